//! Recommended actions attached to health issues.

pub const NO_MODEL: &str = "Train an initial model from the operation history";
pub const LOW_CONFIDENCE: &str = "Retrain the model from the operation history";
pub const LOW_ACCURACY: &str = "Review learned patterns and retrain";
pub const PRUNE_WEAK_PATTERNS_PREFIX: &str = "Consider pruning";
