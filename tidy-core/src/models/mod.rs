mod confidence_tier;
mod health_report;
mod prediction;
mod stats;
mod training;

pub use confidence_tier::ConfidenceTier;
pub use health_report::{HealthMetrics, HealthReport, HealthStatus, MaintenanceReport};
pub use prediction::{Contribution, NoPredictionReason, Prediction, PredictionOutcome};
pub use stats::{EntryStats, FeedbackStats, ModelStats};
pub use training::TrainingRecord;
