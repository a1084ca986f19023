use crate::features::FeatureSet;
use crate::model::{PatternStore, ReinforcementState};
use crate::models::PredictionOutcome;

/// Destination prediction over explicitly passed model state.
pub trait IPredictor: Send + Sync {
    /// Predict a destination for one feature set. Never fails: missing
    /// evidence is reported as `PredictionOutcome::NoPrediction`.
    fn predict(
        &self,
        features: &FeatureSet,
        store: &PatternStore,
        reinforcement: &ReinforcementState,
    ) -> PredictionOutcome;
}
