use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::features::{extract, FeatureSet};

/// One historical decision replayed during a full retrain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    pub features: FeatureSet,
    pub destination: String,
}

impl TrainingRecord {
    pub fn new(features: FeatureSet, destination: impl Into<String>) -> Self {
        Self {
            features,
            destination: destination.into(),
        }
    }

    /// Build a record from an operation-history row: original name, category,
    /// the path the file was moved to, and its creation time.
    pub fn from_history(
        file_name: &str,
        category: &str,
        new_path: &str,
        created: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            features: FeatureSet::from_file(file_name, category, created),
            destination: extract::destination_from_path(new_path),
        }
    }
}
