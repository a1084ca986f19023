use serde::{Deserialize, Serialize};

use super::defaults;

/// Health check and pruning thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceConfig {
    /// Feature values with less total evidence than this are weak.
    pub weak_pattern_threshold: f64,
    /// Average category confidence below this needs attention.
    pub min_confidence_threshold: f64,
    /// Feedback accuracy below this marks the model degraded.
    pub min_accuracy_threshold: f64,
    /// Feedback events required before accuracy is judged at all.
    pub min_feedback_for_accuracy: u64,
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            weak_pattern_threshold: defaults::DEFAULT_WEAK_PATTERN_THRESHOLD,
            min_confidence_threshold: defaults::DEFAULT_MIN_CONFIDENCE_THRESHOLD,
            min_accuracy_threshold: defaults::DEFAULT_MIN_ACCURACY_THRESHOLD,
            min_feedback_for_accuracy: defaults::DEFAULT_MIN_FEEDBACK_FOR_ACCURACY,
        }
    }
}
