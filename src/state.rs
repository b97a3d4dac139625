use crate::data::model::DatasetTable;
use crate::eval::{EvaluationResult, FairnessMetric};

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Everything a menu session owns, passed explicitly to each action
/// (no module-level globals). All of it is replaced wholesale by the
/// corresponding action; nothing else mutates it.
pub struct SessionState {
    /// Loaded dataset (None until the user loads one).
    pub dataset: Option<DatasetTable>,

    /// Metric used for the next evaluation run.
    pub metric: FairnessMetric,

    /// Result of the last evaluation run, if any.
    pub last_evaluation: Option<EvaluationResult>,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState {
            dataset: None,
            metric: FairnessMetric::AccuracyByGroup,
            last_evaluation: None,
        }
    }
}

impl SessionState {
    /// Ingest a newly loaded dataset. A stale evaluation would refer to the
    /// previous dataset, so it is dropped.
    pub fn set_dataset(&mut self, dataset: DatasetTable) {
        self.dataset = Some(dataset);
        self.last_evaluation = None;
    }

    pub fn set_metric(&mut self, metric: FairnessMetric) {
        self.metric = metric;
    }

    pub fn set_evaluation(&mut self, result: EvaluationResult) {
        self.last_evaluation = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::DatasetKind;

    #[test]
    fn loading_a_dataset_drops_the_stale_evaluation() {
        let mut state = SessionState::default();
        state.set_evaluation(EvaluationResult {
            dataset: "UTKFace".to_string(),
            metric: FairnessMetric::AccuracyByGroup,
            groups: Vec::new(),
        });
        assert!(state.last_evaluation.is_some());

        state.set_dataset(DatasetTable::new(DatasetKind::FairFace, Vec::new(), true));
        assert!(state.last_evaluation.is_none());
        assert!(state.dataset.is_some());
    }
}
