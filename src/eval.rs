use std::collections::HashMap;
use std::fmt;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::data::model::DatasetTable;

// ---------------------------------------------------------------------------
// Fairness metrics
// ---------------------------------------------------------------------------

/// The metric a user selects before running an evaluation. All of them
/// currently route through the same simulated scorer; the selection only
/// labels the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FairnessMetric {
    AccuracyByGroup,
    DemographicParityGap,
    EqualOpportunityGap,
}

impl FairnessMetric {
    pub const ALL: [FairnessMetric; 3] = [
        FairnessMetric::AccuracyByGroup,
        FairnessMetric::DemographicParityGap,
        FairnessMetric::EqualOpportunityGap,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FairnessMetric::AccuracyByGroup => "Accuracy by Demographic Group",
            FairnessMetric::DemographicParityGap => "Demographic Parity Gap",
            FairnessMetric::EqualOpportunityGap => "Equal Opportunity Gap",
        }
    }
}

impl fmt::Display for FairnessMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Evaluation result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct GroupResult {
    pub group: String,
    pub size: usize,
    /// Percentage in [70, 99]. Simulated, not model-derived.
    pub accuracy: f64,
}

/// Per-group results of one evaluation run. Replaced wholesale on the next
/// run; consumed by the visualization and export paths.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    pub dataset: String,
    pub metric: FairnessMetric,
    pub groups: Vec<GroupResult>,
}

// ---------------------------------------------------------------------------
// Scorer seam
// ---------------------------------------------------------------------------

/// Produces a per-group accuracy percentage. The trait exists so the
/// simulated placeholder can later be swapped for a real metric computation
/// without touching the reporting or export paths.
pub trait GroupScorer {
    fn score(&mut self, group: &str, size: usize) -> f64;
}

/// PLACEHOLDER scorer: draws uniformly from [70, 99]. There is no model
/// behind this number.
pub struct SimulatedScorer<R: Rng> {
    rng: R,
}

impl SimulatedScorer<ThreadRng> {
    pub fn new() -> Self {
        SimulatedScorer {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for SimulatedScorer<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SimulatedScorer<R> {
    /// Inject a specific RNG (tests use a seeded one).
    pub fn with_rng(rng: R) -> Self {
        SimulatedScorer { rng }
    }
}

impl<R: Rng> GroupScorer for SimulatedScorer<R> {
    fn score(&mut self, _group: &str, _size: usize) -> f64 {
        self.rng.gen_range(70.0..=99.0)
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Run the (simulated) evaluation: one group per distinct gender label in
/// the table, in first-seen order, each with its group size and a scorer
/// produced accuracy.
pub fn evaluate(
    table: &DatasetTable,
    metric: FairnessMetric,
    scorer: &mut dyn GroupScorer,
) -> EvaluationResult {
    let mut order: Vec<String> = Vec::new();
    let mut sizes: HashMap<String, usize> = HashMap::new();

    for record in &table.records {
        let label = record.gender.to_string();
        if !sizes.contains_key(&label) {
            order.push(label.clone());
        }
        *sizes.entry(label).or_insert(0) += 1;
    }

    let groups = order
        .into_iter()
        .map(|group| {
            let size = sizes[&group];
            let accuracy = scorer.score(&group, size);
            GroupResult {
                group,
                size,
                accuracy,
            }
        })
        .collect();

    EvaluationResult {
        dataset: table.kind.name().to_string(),
        metric,
        groups,
    }
}
