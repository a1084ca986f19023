//! Predictor — combines per-strategy votes into one destination.
//!
//! Implements `IPredictor` from tidy-core.

use std::collections::BTreeMap;

use tidy_core::config::{FeedbackConfig, PredictionConfig};
use tidy_core::traits::IPredictor;
use tidy_core::{
    Contribution, FeatureSet, NoPredictionReason, PatternStore, Prediction, PredictionOutcome,
    ReinforcementState, TidyConfig,
};
use tracing::debug;

use crate::reason::format_trail;
use crate::strategies::local_vote;

/// Weighted multi-strategy predictor. Holds configuration only; the model
/// is passed in on every call.
#[derive(Debug, Clone)]
pub struct Predictor {
    config: PredictionConfig,
    min_samples: u64,
    /// Stored multipliers are clamped into these bounds before use.
    multiplier_bounds: (f64, f64),
}

impl Predictor {
    /// Uses the default reinforcement bounds; see [`Predictor::with_multiplier_bounds`].
    pub fn new(config: PredictionConfig, min_samples: u64) -> Self {
        Self {
            config,
            min_samples,
            multiplier_bounds: FeedbackConfig::default().reinforcement_bounds,
        }
    }

    pub fn from_config(config: &TidyConfig) -> Self {
        Self::new(
            config.prediction.clone(),
            config.learning.min_samples_for_prediction,
        )
        .with_multiplier_bounds(config.feedback.reinforcement_bounds)
    }

    /// Inverted bounds are swapped rather than rejected.
    pub fn with_multiplier_bounds(mut self, (min, max): (f64, f64)) -> Self {
        self.multiplier_bounds = if min <= max { (min, max) } else { (max, min) };
        self
    }

    pub fn multiplier_bounds(&self) -> (f64, f64) {
        self.multiplier_bounds
    }

    pub fn config(&self) -> &PredictionConfig {
        &self.config
    }

    pub fn min_samples(&self) -> u64 {
        self.min_samples
    }

    /// Predict a destination for one file.
    pub fn predict(
        &self,
        features: &FeatureSet,
        store: &PatternStore,
        reinforcement: &ReinforcementState,
    ) -> PredictionOutcome {
        let total_samples = store.total_samples();
        if total_samples < self.min_samples {
            return PredictionOutcome::NoPrediction(NoPredictionReason::InsufficientSamples {
                total_samples,
                required: self.min_samples,
            });
        }

        let contributions: Vec<Contribution> = self
            .config
            .weighted_strategies()
            .into_iter()
            .filter_map(|(strategy, weight)| {
                let value = features.value_for(strategy)?;
                local_vote(store, strategy, value, weight)
            })
            .collect();
        if contributions.is_empty() {
            return PredictionOutcome::NoPrediction(NoPredictionReason::NoEvidence);
        }

        let mut scores: BTreeMap<&str, f64> = BTreeMap::new();
        for c in &contributions {
            *scores.entry(c.destination.as_str()).or_insert(0.0) += c.local_confidence * c.weight;
        }
        let Some((winner, score)) = pick_winner(store, &scores) else {
            return PredictionOutcome::NoPrediction(NoPredictionReason::NoEvidence);
        };

        let participating_weight: f64 = contributions.iter().map(|c| c.weight).sum();
        let raw_confidence = if participating_weight > 0.0 {
            score / participating_weight
        } else {
            0.0
        };

        let multipliers: Vec<f64> = contributions
            .iter()
            .filter(|c| c.supports(winner))
            .map(|c| self.bounded_multiplier(reinforcement, c))
            .collect();
        let multiplier = if multipliers.is_empty() {
            1.0
        } else {
            multipliers.iter().sum::<f64>() / multipliers.len() as f64
        };
        let confidence = (raw_confidence * multiplier).clamp(0.0, 1.0);
        let destination = winner.to_string();

        debug!(
            destination = %destination,
            raw_confidence,
            multiplier,
            confidence,
            voters = contributions.len(),
            "prediction made"
        );

        PredictionOutcome::Predicted(Prediction {
            destination,
            confidence,
            raw_confidence,
            multiplier,
            tier: self.config.tier(confidence),
            reason: format_trail(&contributions),
            contributions,
        })
    }

    /// A snapshot written under other bounds may hold any multiplier.
    fn bounded_multiplier(&self, reinforcement: &ReinforcementState, c: &Contribution) -> f64 {
        let (min, max) = self.multiplier_bounds;
        reinforcement.multiplier(&c.key()).max(min).min(max)
    }

    /// Predict for a batch of files, one outcome per input in order.
    pub fn predict_batch(
        &self,
        batch: &[FeatureSet],
        store: &PatternStore,
        reinforcement: &ReinforcementState,
    ) -> Vec<PredictionOutcome> {
        batch
            .iter()
            .map(|features| self.predict(features, store, reinforcement))
            .collect()
    }
}

impl Default for Predictor {
    fn default() -> Self {
        Self::from_config(&TidyConfig::default())
    }
}

impl IPredictor for Predictor {
    fn predict(
        &self,
        features: &FeatureSet,
        store: &PatternStore,
        reinforcement: &ReinforcementState,
    ) -> PredictionOutcome {
        Predictor::predict(self, features, store, reinforcement)
    }
}

/// Highest score wins; ties go to the destination with more evidence overall,
/// then to the smallest name. `scores` iterates in name order, so a strict
/// comparison keeps the smallest name.
fn pick_winner<'a>(store: &PatternStore, scores: &BTreeMap<&'a str, f64>) -> Option<(&'a str, f64)> {
    let mut best: Option<(&'a str, f64, f64)> = None;
    for (&destination, &score) in scores {
        match best {
            Some((_, best_score, _)) if score < best_score => {}
            Some((_, best_score, best_popularity)) if score == best_score => {
                let popularity = store.aggregate_popularity(destination);
                if popularity > best_popularity {
                    best = Some((destination, score, popularity));
                }
            }
            _ => {
                best = Some((destination, score, store.aggregate_popularity(destination)));
            }
        }
    }
    best.map(|(destination, score, _)| (destination, score))
}
