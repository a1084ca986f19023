use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Where positive evidence comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositiveFeedback {
    /// Only explicit confirmations count as correct outcomes.
    Explicit,
    /// An applied prediction that is never reversed counts as correct.
    Implicit,
}

/// Feedback reinforcement configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Master switch for feedback tracking.
    pub enabled: bool,
    /// (min, max) bounds of the confidence multiplier.
    pub reinforcement_bounds: (f64, f64),
    /// (up, down) multiplier steps for correct / wrong outcomes.
    pub confidence_step: (f64, f64),
    pub positive_feedback: PositiveFeedback,
    /// Translate undo events into negative outcomes.
    pub auto_record_undo: bool,
}

impl FeedbackConfig {
    pub fn min_multiplier(&self) -> f64 {
        self.reinforcement_bounds.0
    }

    pub fn max_multiplier(&self) -> f64 {
        self.reinforcement_bounds.1
    }

    pub fn step_up(&self) -> f64 {
        self.confidence_step.0
    }

    pub fn step_down(&self) -> f64 {
        self.confidence_step.1
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = self.reinforcement_bounds;
        // The neutral multiplier must be reachable, otherwise fresh entries start out of bounds.
        if !(min > 0.0 && min <= defaults::NEUTRAL_MULTIPLIER && max >= defaults::NEUTRAL_MULTIPLIER)
        {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        let (up, down) = self.confidence_step;
        if !(up > 0.0 && down > 0.0) {
            return Err(ConfigError::InvalidStep { up, down });
        }
        Ok(())
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_FEEDBACK_ENABLED,
            reinforcement_bounds: (defaults::DEFAULT_MIN_MULTIPLIER, defaults::DEFAULT_MAX_MULTIPLIER),
            confidence_step: (defaults::DEFAULT_STEP_UP, defaults::DEFAULT_STEP_DOWN),
            positive_feedback: PositiveFeedback::Explicit,
            auto_record_undo: defaults::DEFAULT_AUTO_RECORD_UNDO,
        }
    }
}
