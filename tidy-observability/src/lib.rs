//! # tidy-observability
//!
//! Tracing initialisation, span macros for the engine's operations, and the
//! model health check used by maintenance.

pub mod health;
pub mod tracing_setup;

pub use health::check_model_health;
pub use tracing_setup::{init_tracing, init_tracing_with_filter, LOG_ENV_VAR};
