use serde::{Deserialize, Serialize};

use super::defaults;

/// Snapshot storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding `model.json` and `preferences.json`.
    pub learning_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            learning_dir: defaults::DEFAULT_LEARNING_DIR.to_string(),
        }
    }
}
