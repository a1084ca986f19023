pub mod defaults;
mod feedback_config;
mod learning_config;
mod maintenance_config;
mod observability_config;
mod prediction_config;
mod storage_config;

pub use feedback_config::{FeedbackConfig, PositiveFeedback};
pub use learning_config::LearningConfig;
pub use maintenance_config::MaintenanceConfig;
pub use observability_config::ObservabilityConfig;
pub use prediction_config::PredictionConfig;
pub use storage_config::StorageConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, TidyResult};

/// Top-level configuration, one section per subsystem.
///
/// Every section is optional in TOML; missing fields fall back to `defaults`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TidyConfig {
    pub learning: LearningConfig,
    pub prediction: PredictionConfig,
    pub feedback: FeedbackConfig,
    pub storage: StorageConfig,
    pub maintenance: MaintenanceConfig,
    pub observability: ObservabilityConfig,
}

impl TidyConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> TidyResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> TidyResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Reject out-of-range values instead of clamping them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.learning.validate()?;
        self.prediction.validate()?;
        self.feedback.validate()?;
        Ok(())
    }
}
