//! Feedback reinforcement: correct / wrong outcomes → bounded confidence multipliers.
//!
//! A correct outcome raises a mapping's multiplier by a small step, a wrong
//! one lowers it by a larger step; both stay inside the configured bounds.
//! Raw counts are kept for reporting only.

mod stats;

pub use stats::{feedback_stats, DEFAULT_TOP_ENTRIES};

use chrono::Utc;
use tidy_core::config::FeedbackConfig;
use tidy_core::errors::{ConfigError, TidyResult};
use tidy_core::{Contribution, ReinforcementKey, ReinforcementState};
use tracing::{debug, info};

/// Whether an applied prediction turned out right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Wrong,
}

impl From<bool> for Outcome {
    fn from(was_correct: bool) -> Self {
        if was_correct {
            Outcome::Correct
        } else {
            Outcome::Wrong
        }
    }
}

/// Applies outcomes to a [`ReinforcementState`] within fixed bounds.
#[derive(Debug, Clone)]
pub struct FeedbackReinforcer {
    min_multiplier: f64,
    max_multiplier: f64,
    step_up: f64,
    step_down: f64,
}

impl FeedbackReinforcer {
    /// Takes the bounds and steps as given; inverted bounds are swapped.
    /// Use [`FeedbackReinforcer::try_new`] to reject an invalid config.
    pub fn new(config: &FeedbackConfig) -> Self {
        let (min, max) = config.reinforcement_bounds;
        Self {
            min_multiplier: min.min(max),
            max_multiplier: max.max(min),
            step_up: config.step_up(),
            step_down: config.step_down(),
        }
    }

    pub fn try_new(config: &FeedbackConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Record one outcome for one mapping.
    ///
    /// Returns the new multiplier, or `None` when feedback tracking is disabled.
    pub fn record_outcome(
        &self,
        state: &mut ReinforcementState,
        key: &ReinforcementKey,
        was_correct: bool,
    ) -> Option<f64> {
        if !state.enabled {
            return None;
        }
        let now = Utc::now();
        let entry = state.entry_mut(key);
        let previous = entry.confidence_multiplier;
        let updated = match Outcome::from(was_correct) {
            Outcome::Correct => {
                entry.correct_count += 1;
                previous + self.step_up
            }
            Outcome::Wrong => {
                entry.wrong_count += 1;
                previous - self.step_down
            }
        };
        entry.confidence_multiplier = updated.max(self.min_multiplier).min(self.max_multiplier);
        entry.last_updated = Some(now);
        let multiplier = entry.confidence_multiplier;

        state.total_feedback += 1;
        state.last_updated = Some(now);

        debug!(
            strategy = %key.strategy,
            value = %key.value,
            destination = %key.destination,
            was_correct,
            previous,
            multiplier,
            "feedback recorded"
        );
        Some(multiplier)
    }

    /// Record a correct outcome for every strategy in `trail` that voted for
    /// `destination`. Returns how many mappings were reinforced.
    pub fn record_confirmation(
        &self,
        state: &mut ReinforcementState,
        trail: &[Contribution],
        destination: &str,
    ) -> usize {
        self.record_supporting(state, trail, destination, true)
    }

    /// The file was moved back: one wrong outcome per strategy in `trail`
    /// that voted for `destination`. Returns how many mappings were penalised.
    pub fn record_undo(
        &self,
        state: &mut ReinforcementState,
        trail: &[Contribution],
        destination: &str,
    ) -> usize {
        self.record_supporting(state, trail, destination, false)
    }

    /// [`FeedbackReinforcer::record_undo`] for a caller that only kept the reason string.
    pub fn record_undo_reason(
        &self,
        state: &mut ReinforcementState,
        reason: &str,
        destination: &str,
    ) -> TidyResult<usize> {
        let keys = tidy_prediction::supporting_keys(reason, destination)?;
        Ok(keys
            .iter()
            .filter_map(|key| self.record_outcome(state, key, false))
            .count())
    }

    fn record_supporting(
        &self,
        state: &mut ReinforcementState,
        trail: &[Contribution],
        destination: &str,
        was_correct: bool,
    ) -> usize {
        trail
            .iter()
            .filter(|c| c.supports(destination))
            .filter_map(|c| self.record_outcome(state, &c.key(), was_correct))
            .count()
    }

    /// Overall accuracy; `None` before any feedback.
    pub fn accuracy(&self, state: &ReinforcementState) -> Option<f64> {
        state.accuracy()
    }

    pub fn enable(&self, state: &mut ReinforcementState) {
        state.enabled = true;
        info!("feedback tracking enabled");
    }

    pub fn disable(&self, state: &mut ReinforcementState) {
        state.enabled = false;
        info!("feedback tracking disabled");
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.min_multiplier, self.max_multiplier)
    }
}

impl Default for FeedbackReinforcer {
    fn default() -> Self {
        Self::new(&FeedbackConfig::default())
    }
}
