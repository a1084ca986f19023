//! # tidy-core
//!
//! Foundation crate for the Tidy destination-learning engine.
//! Defines feature sets, strategies, the pattern store, reinforcement state,
//! snapshots, config, errors, and the traits other crates implement.

pub mod config;
pub mod constants;
pub mod errors;
pub mod features;
pub mod model;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TidyConfig;
pub use errors::{TidyError, TidyResult};
pub use features::{FeatureSet, Strategy};
pub use model::{
    Distribution, ModelSnapshot, PatternStore, PatternTable, ReinforcementEntry,
    ReinforcementKey, ReinforcementState,
};
pub use models::{
    ConfidenceTier, Contribution, NoPredictionReason, Prediction, PredictionOutcome,
    TrainingRecord,
};
