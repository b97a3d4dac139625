/// Data layer: core types, loading, and summarization.
///
/// Architecture:
/// ```text
///  datasets/<name>_labels.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate + normalize → DatasetTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ DatasetTable  │  Vec<LabelRecord>, one canonical schema
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  bin ages, count labels → SummaryReport
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod summary;
