use tidy_core::{PatternStore, Strategy};
use tracing::info;

/// Feature values with less total evidence than this are considered weak.
pub const DEFAULT_PRUNE_THRESHOLD: f64 = 3.0;

/// Strategies whose tables are pruned. Name-prefix and temporal tables are
/// naturally sparse and would be emptied by a fixed threshold.
pub const PRUNABLE_STRATEGIES: [Strategy; 2] = [Strategy::Category, Strategy::Extension];

/// Pruning decision with metadata for audit logging.
#[derive(Debug, Clone, PartialEq)]
pub struct PruneDecision {
    pub strategy: Strategy,
    pub value: String,
    pub total: f64,
    pub threshold: f64,
    pub should_prune: bool,
    pub reason: String,
}

/// Decide whether one feature value is too weak to keep.
pub fn evaluate(strategy: Strategy, value: &str, total: f64, threshold: f64) -> PruneDecision {
    let should_prune = total < threshold;
    let reason = if should_prune {
        format!(
            "evidence {:.2} below threshold {:.2} for {} '{}'",
            total, threshold, strategy, value
        )
    } else {
        "evidence above threshold".to_string()
    };
    PruneDecision {
        strategy,
        value: value.to_string(),
        total,
        threshold,
        should_prune,
        reason,
    }
}

/// Evaluate every value of the prunable strategies without changing anything.
pub fn plan(store: &PatternStore, threshold: f64) -> Vec<PruneDecision> {
    PRUNABLE_STRATEGIES
        .into_iter()
        .flat_map(|strategy| {
            store
                .value_totals(strategy)
                .into_iter()
                .map(move |(value, total)| evaluate(strategy, &value, total, threshold))
        })
        .collect()
}

/// Remove weak feature values. Returns the decisions that were carried out.
pub fn prune_weak_patterns(store: &mut PatternStore, threshold: f64) -> Vec<PruneDecision> {
    let pruned: Vec<PruneDecision> = plan(store, threshold)
        .into_iter()
        .filter(|d| d.should_prune)
        .collect();

    for decision in &pruned {
        store.remove_value(decision.strategy, &decision.value);
        info!(
            strategy = %decision.strategy,
            value = %decision.value,
            total = decision.total,
            "pruned weak pattern"
        );
    }
    pruned
}
