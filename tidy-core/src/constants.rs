/// Tidy system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version tag stamped into every model.
pub const MODEL_VERSION: &str = "1.0";

/// On-disk snapshot format. Snapshots carrying any other tag are rejected.
pub const SNAPSHOT_FORMAT_VERSION: &str = "1";

/// File name of the machine-readable model snapshot.
pub const MODEL_FILE: &str = "model.json";

/// File name of the human-readable preferences export.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Number of destinations kept per feature value in the preferences export.
pub const PREFERENCES_TOP_DESTINATIONS: usize = 3;

/// Tolerance used when checking that strategy weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Fallback feature / destination value when nothing meaningful can be extracted.
pub const UNKNOWN: &str = "unknown";
