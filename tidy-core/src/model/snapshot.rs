use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PatternStore, ReinforcementState};
use crate::constants::SNAPSHOT_FORMAT_VERSION;
use crate::errors::SnapshotError;

/// Persisted form of the full learned state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub format_version: String,
    pub saved_at: DateTime<Utc>,
    pub model: PatternStore,
    pub reinforcement: ReinforcementState,
}

impl ModelSnapshot {
    pub fn new(model: PatternStore, reinforcement: ReinforcementState) -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION.to_string(),
            saved_at: Utc::now(),
            model,
            reinforcement,
        }
    }

    /// Reject snapshots written in another format.
    pub fn check_version(&self) -> Result<(), SnapshotError> {
        if self.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                expected: SNAPSHOT_FORMAT_VERSION.to_string(),
                actual: self.format_version.clone(),
            });
        }
        Ok(())
    }
}
