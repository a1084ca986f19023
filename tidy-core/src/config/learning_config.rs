use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Incremental learning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Multiplicative decay applied to every count before each update. (0, 1].
    pub decay_factor: f64,
    /// When false, decay is skipped entirely (same as factor 1.0).
    pub enable_decay: bool,
    /// Persist a snapshot every N applied observations.
    pub sync_frequency: u32,
    /// Below this many samples the model refuses to predict.
    pub min_samples_for_prediction: u64,
}

impl LearningConfig {
    /// The factor actually applied before each update.
    pub fn effective_decay_factor(&self) -> f64 {
        if self.enable_decay {
            self.decay_factor
        } else {
            1.0
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.decay_factor > 0.0 && self.decay_factor <= 1.0) {
            return Err(ConfigError::DecayFactorOutOfRange {
                value: self.decay_factor,
            });
        }
        if self.sync_frequency == 0 {
            return Err(ConfigError::SyncFrequencyZero);
        }
        Ok(())
    }
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            decay_factor: defaults::DEFAULT_DECAY_FACTOR,
            enable_decay: defaults::DEFAULT_ENABLE_DECAY,
            sync_frequency: defaults::DEFAULT_SYNC_FREQUENCY,
            min_samples_for_prediction: defaults::DEFAULT_MIN_SAMPLES_FOR_PREDICTION,
        }
    }
}
