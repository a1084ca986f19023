use std::collections::BTreeMap;

use tidy_core::models::ModelStats;
use tidy_core::{PatternStore, ReinforcementState, Strategy};

/// Aggregate statistics for reporting collaborators.
pub fn model_stats(store: &PatternStore, reinforcement: &ReinforcementState) -> ModelStats {
    let distinct_values: BTreeMap<Strategy, usize> = Strategy::ALL
        .into_iter()
        .map(|s| (s, store.distinct_values(s)))
        .collect();

    ModelStats {
        total_samples: store.total_samples(),
        last_trained: store.last_trained(),
        distinct_values,
        destination_popularity: store.destination_popularity(),
        reinforcement_accuracy: reinforcement.accuracy(),
        total_feedback: reinforcement.total_feedback,
        reinforcement_entries: reinforcement.len(),
    }
}
