use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// How a caller should act on a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    /// Safe to apply automatically.
    High,
    /// Suggest, but let the user decide.
    Medium,
    /// Do not suggest.
    Low,
}

impl ConfidenceTier {
    /// Classify against explicit thresholds.
    pub fn classify(confidence: f64, high: f64, medium: f64) -> Self {
        if confidence >= high {
            ConfidenceTier::High
        } else if confidence >= medium {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    /// Classify against the default 0.80 / 0.50 thresholds.
    pub fn from_confidence(confidence: f64) -> Self {
        Self::classify(
            confidence,
            defaults::DEFAULT_HIGH_CONFIDENCE,
            defaults::DEFAULT_MEDIUM_CONFIDENCE,
        )
    }

    pub fn auto_apply(self) -> bool {
        self == ConfidenceTier::High
    }

    pub fn should_suggest(self) -> bool {
        self != ConfidenceTier::Low
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        };
        f.write_str(name)
    }
}
