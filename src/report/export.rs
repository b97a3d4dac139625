use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use super::{chart, pdf};
use crate::eval::EvaluationResult;
use crate::paths::Layout;

// ---------------------------------------------------------------------------
// CSV report
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ReportRow<'a> {
    #[serde(rename = "Group")]
    group: &'a str,
    #[serde(rename = "Accuracy")]
    accuracy: f64,
}

/// Write `Group,Accuracy` rows, accuracies rounded to one decimal place.
pub fn write_report_csv(result: &EvaluationResult, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating report CSV at {}", path.display()))?;

    for group in &result.groups {
        writer.serialize(ReportRow {
            group: &group.group,
            accuracy: (group.accuracy * 10.0).round() / 10.0,
        })?;
    }
    writer.flush().context("flushing report CSV")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Export orchestration
// ---------------------------------------------------------------------------

/// Paths of the three artifacts produced by [`export_all`].
#[derive(Debug)]
pub struct ReportPaths {
    pub csv: PathBuf,
    pub png: PathBuf,
    pub pdf: PathBuf,
}

/// Export the full report set for one evaluation:
/// `reports/<name>_report.{csv,png,pdf}`.
pub fn export_all(result: &EvaluationResult, layout: &Layout) -> Result<ReportPaths> {
    let reports_dir = layout.reports_dir();
    std::fs::create_dir_all(&reports_dir)
        .with_context(|| format!("creating report directory {}", reports_dir.display()))?;

    let csv_path = layout.report_file(&result.dataset, "csv");
    write_report_csv(result, &csv_path)?;

    let png_path = layout.report_file(&result.dataset, "png");
    chart::render_bar_chart(result, &png_path)?;

    let pdf_path = layout.report_file(&result.dataset, "pdf");
    pdf::write_report_pdf(result, &png_path, &pdf_path)?;

    Ok(ReportPaths {
        csv: csv_path,
        png: png_path,
        pdf: pdf_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{EvaluationResult, FairnessMetric, GroupResult};

    fn sample_result() -> EvaluationResult {
        EvaluationResult {
            dataset: "UTKFace".to_string(),
            metric: FairnessMetric::AccuracyByGroup,
            groups: vec![
                GroupResult {
                    group: "Male".to_string(),
                    size: 2,
                    accuracy: 87.32,
                },
                GroupResult {
                    group: "Female".to_string(),
                    size: 2,
                    accuracy: 91.0,
                },
            ],
        }
    }

    #[test]
    fn report_csv_has_group_accuracy_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("UTKFace_report.csv");
        write_report_csv(&sample_result(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("Group,Accuracy"));
        assert_eq!(lines.next(), Some("Male,87.3"));
        assert_eq!(lines.next(), Some("Female,91.0"));
    }

    #[test]
    fn export_produces_all_three_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(dir.path());

        let paths = export_all(&sample_result(), &layout).unwrap();
        assert_eq!(paths.csv, layout.report_file("UTKFace", "csv"));
        assert_eq!(paths.png, layout.report_file("UTKFace", "png"));
        assert_eq!(paths.pdf, layout.report_file("UTKFace", "pdf"));

        for path in [&paths.csv, &paths.png, &paths.pdf] {
            let metadata = std::fs::metadata(path)
                .unwrap_or_else(|_| panic!("missing artifact {}", path.display()));
            assert!(metadata.len() > 0, "empty artifact {}", path.display());
        }
    }
}
