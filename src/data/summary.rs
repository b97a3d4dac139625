use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{DatasetTable, RawAge};

// ---------------------------------------------------------------------------
// Age bins
// ---------------------------------------------------------------------------

/// Fixed half-open decade bins: [0,10), [10,20), …, [60,∞).
pub const AGE_BIN_LABELS: [&str; 7] = ["0–9", "10–19", "20–29", "30–39", "40–49", "50–59", "60+"];

fn age_bin_index(years: u32) -> usize {
    ((years / 10).min(6)) as usize
}

/// Bin label for a numeric age, lower bound inclusive.
pub fn age_bin_label(years: u32) -> &'static str {
    AGE_BIN_LABELS[age_bin_index(years)]
}

// ---------------------------------------------------------------------------
// SummaryReport – ordered label→count sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySection {
    pub title: &'static str,
    /// Ordered (label, count) pairs: bin/category order for age,
    /// descending frequency for gender and race.
    pub counts: Vec<(String, u64)>,
}

/// Demographic frequency counts per dimension, built fresh per invocation.
/// A dimension whose source column is absent is omitted, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    pub sections: Vec<SummarySection>,
}

impl SummaryReport {
    pub fn section(&self, title: &str) -> Option<&SummarySection> {
        self.sections.iter().find(|s| s.title == title)
    }
}

// ---------------------------------------------------------------------------
// Summarizer
// ---------------------------------------------------------------------------

/// Build the demographic summary for a loaded table.
pub fn summarize(table: &DatasetTable) -> SummaryReport {
    let mut sections = Vec::new();

    if let Some(age) = age_section(table) {
        sections.push(age);
    }
    sections.push(frequency_section(
        "Gender Distribution",
        table.records.iter().map(|r| r.gender.to_string()),
    ));
    sections.push(frequency_section(
        "Race Distribution",
        table.records.iter().map(|r| r.race.to_string()),
    ));

    SummaryReport { sections }
}

/// Numeric ages go into the fixed decade bins (all bins listed, zero counts
/// included, in bin order); pre-binned string ranges are counted directly
/// and sorted by category label. An age column with no values at all still
/// gets the bin list, every count zero.
fn age_section(table: &DatasetTable) -> Option<SummarySection> {
    if !table.has_age {
        return None;
    }

    let mut bin_counts = [0u64; AGE_BIN_LABELS.len()];
    let mut any_years = false;
    let mut range_counts: BTreeMap<String, u64> = BTreeMap::new();

    for record in &table.records {
        match &record.age {
            Some(RawAge::Years(years)) => {
                any_years = true;
                bin_counts[age_bin_index(*years)] += 1;
            }
            Some(RawAge::Range(range)) => {
                *range_counts.entry(range.clone()).or_insert(0) += 1;
            }
            None => {}
        }
    }

    let mut counts = Vec::new();
    if any_years || range_counts.is_empty() {
        counts.extend(
            AGE_BIN_LABELS
                .iter()
                .zip(bin_counts)
                .map(|(label, count)| (label.to_string(), count)),
        );
    }
    counts.extend(range_counts);

    Some(SummarySection {
        title: "Age Distribution",
        counts,
    })
}

fn frequency_section(
    title: &'static str,
    labels: impl Iterator<Item = String>,
) -> SummarySection {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut counts: Vec<(String, u64)> = counts.into_iter().collect();
    // Descending frequency, label order breaking ties.
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    SummarySection { title, counts }
}

// ---------------------------------------------------------------------------
// Summary CSV writer
// ---------------------------------------------------------------------------

/// Write the summary as blank-line separated sections:
///
/// ```text
/// Age Distribution
/// 0–9,12
/// …
///
/// Gender Distribution
/// Male,60
/// …
/// ```
pub fn write_summary_csv(report: &SummaryReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory {}", parent.display()))?;
    }

    let mut out = String::new();
    for section in &report.sections {
        out.push_str(section.title);
        out.push('\n');
        for (label, count) in &section.counts {
            out.push_str(&format!("{label},{count}\n"));
        }
        out.push('\n');
    }

    std::fs::write(path, out)
        .with_context(|| format!("writing summary CSV to {}", path.display()))
}
