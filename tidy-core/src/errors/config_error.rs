/// Configuration validation errors.
///
/// Raised when a config is loaded; the engine refuses to start with any of these.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {reason}")]
    Parse { reason: String },

    #[error("decay_factor must be in (0, 1], got {value}")]
    DecayFactorOutOfRange { value: f64 },

    #[error("sync_frequency must be at least 1")]
    SyncFrequencyZero,

    #[error("strategy weights must sum to 1.0, got {sum}")]
    WeightsDoNotSumToOne { sum: f64 },

    #[error("strategy weight for {strategy} must be within [0, 1], got {weight}")]
    WeightOutOfRange { strategy: String, weight: f64 },

    #[error("unknown strategy: {name}")]
    UnknownStrategy { name: String },

    #[error("reinforcement bounds must satisfy 0 < min <= 1 <= max, got ({min}, {max})")]
    InvalidBounds { min: f64, max: f64 },

    #[error("confidence steps must be positive, got (up {up}, down {down})")]
    InvalidStep { up: f64, down: f64 },

    #[error("confidence thresholds must satisfy 0 <= medium <= high <= 1, got (medium {medium}, high {high})")]
    InvalidThresholds { medium: f64, high: f64 },
}
