use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::features::Strategy;
use crate::model::ReinforcementKey;

/// Aggregate statistics consumed by reporting collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStats {
    pub total_samples: u64,
    pub last_trained: Option<DateTime<Utc>>,
    pub distinct_values: BTreeMap<Strategy, usize>,
    pub destination_popularity: BTreeMap<String, f64>,
    pub reinforcement_accuracy: Option<f64>,
    pub total_feedback: u64,
    pub reinforcement_entries: usize,
}

/// Per-entry view used in feedback reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryStats {
    pub key: ReinforcementKey,
    pub correct: u64,
    pub wrong: u64,
    pub accuracy: Option<f64>,
    pub multiplier: f64,
}

/// Feedback analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackStats {
    pub total_feedback: u64,
    pub total_correct: u64,
    pub total_wrong: u64,
    pub overall_accuracy: Option<f64>,
    pub entry_count: usize,
    /// Busiest entries first.
    pub top_entries: Vec<EntryStats>,
    pub strongest: Option<EntryStats>,
    pub weakest: Option<EntryStats>,
    pub last_updated: Option<DateTime<Utc>>,
    pub enabled: bool,
}
