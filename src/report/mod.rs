/// Report layer: turns an [`crate::eval::EvaluationResult`] into the three
/// exported artifacts under `reports/`: a `Group,Accuracy` CSV, a PNG bar
/// chart, and a PDF document embedding the chart.

pub mod chart;
pub mod export;
pub mod pdf;
