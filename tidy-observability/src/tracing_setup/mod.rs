//! Tracing setup — structured logging with span definitions.

pub mod spans;

use std::sync::Once;

use tidy_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, e.g. `TIDY_LOG=tidy_engine=debug`.
pub const LOG_ENV_VAR: &str = "TIDY_LOG";

static INIT: Once = Once::new();

/// Initialize the global subscriber.
///
/// `TIDY_LOG` wins over `config.log_level`; an invalid filter falls back to
/// the configured level. Idempotent: only the first call in a process
/// installs a subscriber, later calls are no-ops.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json);
}

/// Initialize with an explicit filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str, json: bool) {
    install(EnvFilter::new(filter), json);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        // Another subscriber may already be installed by the host; keep it.
        let _ = if json {
            registry
                .with(fmt::layer().json().with_target(true).with_current_span(true))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_line_number(true))
                .try_init()
        };
    });
}
