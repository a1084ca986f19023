use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::ConfigError;
use crate::features::Strategy;
use crate::models::ConfidenceTier;

/// Prediction configuration: per-strategy weights and confidence tiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Confidence at or above which a prediction is safe to auto-apply.
    pub high_confidence: f64,
    /// Confidence at or above which a prediction is worth suggesting.
    pub medium_confidence: f64,
    /// Relative weight per strategy name. Must sum to 1.0.
    /// Strategies left out have weight 0 and never vote.
    pub strategy_weights: BTreeMap<String, f64>,
}

impl PredictionConfig {
    /// Weight of a single strategy (0.0 when not configured).
    pub fn weight(&self, strategy: Strategy) -> f64 {
        self.strategy_weights
            .iter()
            .filter(|(name, _)| name.parse::<Strategy>().ok() == Some(strategy))
            .map(|(_, w)| *w)
            .sum()
    }

    /// Strategies with a positive weight, in canonical order.
    pub fn weighted_strategies(&self) -> Vec<(Strategy, f64)> {
        Strategy::ALL
            .into_iter()
            .map(|s| (s, self.weight(s)))
            .filter(|(_, w)| *w > 0.0)
            .collect()
    }

    /// Tier a confidence according to the configured thresholds.
    pub fn tier(&self, confidence: f64) -> ConfidenceTier {
        ConfidenceTier::classify(confidence, self.high_confidence, self.medium_confidence)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut sum = 0.0;
        for (name, weight) in &self.strategy_weights {
            name.parse::<Strategy>()?;
            if !(0.0..=1.0).contains(weight) {
                return Err(ConfigError::WeightOutOfRange {
                    strategy: name.clone(),
                    weight: *weight,
                });
            }
            sum += weight;
        }
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightsDoNotSumToOne { sum });
        }
        let thresholds_ok = (0.0..=1.0).contains(&self.medium_confidence)
            && (0.0..=1.0).contains(&self.high_confidence)
            && self.medium_confidence <= self.high_confidence;
        if !thresholds_ok {
            return Err(ConfigError::InvalidThresholds {
                medium: self.medium_confidence,
                high: self.high_confidence,
            });
        }
        Ok(())
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        let strategy_weights = BTreeMap::from([
            (
                Strategy::Category.name().to_string(),
                defaults::DEFAULT_CATEGORY_WEIGHT,
            ),
            (
                Strategy::Extension.name().to_string(),
                defaults::DEFAULT_EXTENSION_WEIGHT,
            ),
            (
                Strategy::NamePrefix.name().to_string(),
                defaults::DEFAULT_NAME_PREFIX_WEIGHT,
            ),
        ]);
        Self {
            high_confidence: defaults::DEFAULT_HIGH_CONFIDENCE,
            medium_confidence: defaults::DEFAULT_MEDIUM_CONFIDENCE,
            strategy_weights,
        }
    }
}
