use serde::{Deserialize, Serialize};

use super::ConfidenceTier;
use crate::features::Strategy;
use crate::model::ReinforcementKey;

/// One strategy's vote, as recorded in a prediction's reason trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub strategy: Strategy,
    /// Feature value the strategy looked up.
    pub value: String,
    /// The strategy's own best destination.
    pub destination: String,
    /// Evidence behind `destination`.
    pub count: f64,
    /// All evidence recorded for `value`.
    pub total: f64,
    /// `count / total`.
    pub local_confidence: f64,
    pub weight: f64,
}

impl Contribution {
    pub fn key(&self) -> ReinforcementKey {
        ReinforcementKey::new(self.strategy, self.value.clone(), self.destination.clone())
    }

    /// Whether this vote went to `destination`.
    pub fn supports(&self, destination: &str) -> bool {
        self.destination == destination
    }
}

/// A destination the engine is willing to name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub destination: String,
    /// Final confidence after reinforcement, clamped to [0, 1].
    pub confidence: f64,
    /// Weighted confidence before reinforcement.
    pub raw_confidence: f64,
    /// Average reinforcement multiplier of the supporting strategies.
    pub multiplier: f64,
    pub tier: ConfidenceTier,
    /// Human-readable, parseable trail of every participating strategy.
    pub reason: String,
    pub contributions: Vec<Contribution>,
}

impl Prediction {
    /// Strategies whose vote matched the winning destination.
    pub fn supporting(&self) -> impl Iterator<Item = &Contribution> {
        self.contributions
            .iter()
            .filter(|c| c.supports(&self.destination))
    }

    /// Reinforcement keys credited or blamed for this prediction.
    pub fn supporting_keys(&self) -> Vec<ReinforcementKey> {
        self.supporting().map(Contribution::key).collect()
    }
}

/// Why no destination was named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoPredictionReason {
    /// The model has seen too few samples to trust any pattern.
    InsufficientSamples { total_samples: u64, required: u64 },
    /// No strategy had evidence for this file's features.
    NoEvidence,
}

impl NoPredictionReason {
    pub fn describe(&self) -> String {
        match self {
            NoPredictionReason::InsufficientSamples {
                total_samples,
                required,
            } => format!("Insufficient learning data ({total_samples}/{required} samples)"),
            NoPredictionReason::NoEvidence => {
                "No learned pattern matches this file".to_string()
            }
        }
    }
}

/// Result of asking the engine for a destination.
///
/// `NoPrediction` is routine, not a failure: callers simply leave the file alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionOutcome {
    Predicted(Prediction),
    NoPrediction(NoPredictionReason),
}

impl PredictionOutcome {
    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            PredictionOutcome::Predicted(p) => Some(p),
            PredictionOutcome::NoPrediction(_) => None,
        }
    }

    pub fn into_prediction(self) -> Option<Prediction> {
        match self {
            PredictionOutcome::Predicted(p) => Some(p),
            PredictionOutcome::NoPrediction(_) => None,
        }
    }

    pub fn is_prediction(&self) -> bool {
        matches!(self, PredictionOutcome::Predicted(_))
    }

    pub fn destination(&self) -> Option<&str> {
        self.prediction().map(|p| p.destination.as_str())
    }

    /// Final confidence; 0.0 when there is no prediction.
    pub fn confidence(&self) -> f64 {
        self.prediction().map(|p| p.confidence).unwrap_or(0.0)
    }

    pub fn reason(&self) -> String {
        match self {
            PredictionOutcome::Predicted(p) => p.reason.clone(),
            PredictionOutcome::NoPrediction(why) => why.describe(),
        }
    }

    pub fn tier(&self) -> ConfidenceTier {
        self.prediction()
            .map(|p| p.tier)
            .unwrap_or(ConfidenceTier::Low)
    }
}
