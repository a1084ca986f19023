/// Snapshot persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("corrupt snapshot at {path}: {reason}")]
    Corrupt { path: String, reason: String },

    #[error("unsupported snapshot format: expected {expected}, got {actual}")]
    UnsupportedVersion { expected: String, actual: String },

    #[error("failed to write snapshot to {path}: {reason}")]
    WriteFailed { path: String, reason: String },
}
