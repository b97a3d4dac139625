use std::path::{Path, PathBuf};

use crate::data::model::DatasetKind;

// ---------------------------------------------------------------------------
// Filesystem layout
// ---------------------------------------------------------------------------

/// Filesystem layout of a fairlens workspace:
///
/// ```text
/// <root>/
///   datasets/<Name>/            image folders (UTKFace, FairFace)
///   datasets/<name>_labels.csv  per-dataset labels
///   uploads/                    user-uploaded test images
///   reports/                    generated summaries and reports
/// ```
///
/// The root defaults to the working directory and can be overridden with
/// the `FAIRLENS_ROOT` environment variable, so tests can point the whole
/// tool at a temporary directory.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Layout { root: root.into() }
    }

    pub fn from_env() -> Self {
        let root = std::env::var_os("FAIRLENS_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Layout { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn datasets_dir(&self) -> PathBuf {
        self.root.join("datasets")
    }

    /// Labels CSV for a dataset, e.g. `datasets/utkface_labels.csv`.
    pub fn labels_file(&self, kind: DatasetKind) -> PathBuf {
        self.datasets_dir().join(kind.labels_file_name())
    }

    /// Image folder for a dataset, e.g. `datasets/UTKFace/`.
    pub fn images_dir(&self, kind: DatasetKind) -> PathBuf {
        self.datasets_dir().join(kind.name())
    }

    pub fn uploads_dir(&self) -> PathBuf {
        self.root.join("uploads")
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.root.join("reports")
    }

    /// Demographic summary CSV, e.g. `reports/UTKFace_summary.csv`.
    pub fn summary_csv(&self, dataset_name: &str) -> PathBuf {
        self.reports_dir().join(format!("{dataset_name}_summary.csv"))
    }

    /// Evaluation report artifact, e.g. `reports/UTKFace_report.pdf`.
    pub fn report_file(&self, dataset_name: &str, extension: &str) -> PathBuf {
        self.reports_dir()
            .join(format!("{dataset_name}_report.{extension}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_follows_dataset_conventions() {
        let layout = Layout::new("/tmp/ws");
        assert_eq!(
            layout.labels_file(DatasetKind::UtkFace),
            PathBuf::from("/tmp/ws/datasets/utkface_labels.csv")
        );
        assert_eq!(
            layout.images_dir(DatasetKind::FairFace),
            PathBuf::from("/tmp/ws/datasets/FairFace")
        );
        assert_eq!(
            layout.report_file("UTKFace", "png"),
            PathBuf::from("/tmp/ws/reports/UTKFace_report.png")
        );
    }
}
