use tidy_core::config::LearningConfig;
use tidy_core::errors::ConfigError;
use tidy_core::PatternStore;
use tracing::{debug, warn};

use crate::formula;

/// Applies one global decay step to a pattern store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayEngine {
    /// Multiplicative factor in (0, 1]; 1.0 means decay is off.
    factor: f64,
}

/// What a single decay step did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayReport {
    pub factor: f64,
    /// Total evidence before the step.
    pub evidence_before: f64,
    /// Total evidence after the step.
    pub evidence_after: f64,
}

impl DecayEngine {
    /// Create with an explicit factor. Out-of-range factors behave as disabled
    /// and are logged; use [`DecayEngine::try_new`] to reject them instead.
    pub fn new(factor: f64) -> Self {
        Self::try_new(factor).unwrap_or_else(|e| {
            warn!(error = %e, "decay disabled");
            Self::disabled()
        })
    }

    /// Create with an explicit factor in (0, 1].
    pub fn try_new(factor: f64) -> Result<Self, ConfigError> {
        if factor > 0.0 && factor <= 1.0 {
            Ok(Self { factor })
        } else {
            Err(ConfigError::DecayFactorOutOfRange { value: factor })
        }
    }

    /// Decay that never changes anything.
    pub fn disabled() -> Self {
        Self { factor: 1.0 }
    }

    /// Create from config, honouring `enable_decay`.
    pub fn from_config(config: &LearningConfig) -> Self {
        Self::new(config.effective_decay_factor())
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn is_enabled(&self) -> bool {
        self.factor < 1.0
    }

    /// Multiply every count in `store` by the factor.
    pub fn apply(&self, store: &mut PatternStore) -> DecayReport {
        let evidence_before = total_evidence(store);
        if self.is_enabled() {
            store.decay_all(self.factor);
        }
        let evidence_after = total_evidence(store);
        debug!(
            factor = self.factor,
            evidence_before, evidence_after, "decay step applied"
        );
        DecayReport {
            factor: self.factor,
            evidence_before,
            evidence_after,
        }
    }

    /// Relative weight of evidence `age` updates old.
    pub fn retention_after(&self, age: u32) -> f64 {
        formula::retention(self.factor, age)
    }

    /// Updates until evidence weighs half as much as a fresh observation.
    pub fn half_life(&self) -> Option<u32> {
        formula::half_life(self.factor)
    }
}

impl Default for DecayEngine {
    fn default() -> Self {
        Self::from_config(&LearningConfig::default())
    }
}

fn total_evidence(store: &PatternStore) -> f64 {
    store.destination_popularity().values().sum()
}
