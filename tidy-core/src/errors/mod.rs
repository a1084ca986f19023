mod config_error;
mod snapshot_error;

pub use config_error::ConfigError;
pub use snapshot_error::SnapshotError;

/// Top-level error type for the Tidy engine.
#[derive(Debug, thiserror::Error)]
pub enum TidyError {
    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("snapshot error: {0}")]
    SnapshotError(#[from] SnapshotError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("malformed reason trail at byte {offset}: {details}")]
    InvalidReason { offset: usize, details: String },
}

/// Convenience alias used throughout the workspace.
pub type TidyResult<T> = Result<T, TidyError>;
