//! Span definitions per operation: prediction, update, feedback, snapshot.

/// Create a prediction span.
#[macro_export]
macro_rules! prediction_span {
    ($strategies:expr) => {
        tracing::info_span!("tidy.prediction", strategies = $strategies)
    };
}

/// Create an incremental update span.
#[macro_export]
macro_rules! update_span {
    ($destination:expr) => {
        tracing::info_span!("tidy.update", destination = %$destination)
    };
}

/// Create a feedback span.
#[macro_export]
macro_rules! feedback_span {
    ($kind:expr, $destination:expr) => {
        tracing::info_span!("tidy.feedback", kind = %$kind, destination = %$destination)
    };
}

/// Create a snapshot span.
#[macro_export]
macro_rules! snapshot_span {
    ($operation:expr) => {
        tracing::info_span!("tidy.snapshot", operation = %$operation)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PREDICTION: &str = "tidy.prediction";
    pub const UPDATE: &str = "tidy.update";
    pub const FEEDBACK: &str = "tidy.feedback";
    pub const SNAPSHOT: &str = "tidy.snapshot";
}
