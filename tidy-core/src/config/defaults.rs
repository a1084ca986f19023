// Single source of truth for all default values.

// --- Learning ---
pub const DEFAULT_DECAY_FACTOR: f64 = 0.95;
pub const DEFAULT_ENABLE_DECAY: bool = true;
pub const DEFAULT_SYNC_FREQUENCY: u32 = 5;
pub const DEFAULT_MIN_SAMPLES_FOR_PREDICTION: u64 = 3;

// --- Prediction ---
pub const DEFAULT_CATEGORY_WEIGHT: f64 = 0.5;
pub const DEFAULT_EXTENSION_WEIGHT: f64 = 0.3;
pub const DEFAULT_NAME_PREFIX_WEIGHT: f64 = 0.2;
pub const DEFAULT_HIGH_CONFIDENCE: f64 = 0.8;
pub const DEFAULT_MEDIUM_CONFIDENCE: f64 = 0.5;

// --- Feedback ---
pub const DEFAULT_FEEDBACK_ENABLED: bool = true;
pub const DEFAULT_MIN_MULTIPLIER: f64 = 0.1;
pub const DEFAULT_MAX_MULTIPLIER: f64 = 1.5;
pub const DEFAULT_STEP_UP: f64 = 0.05;
pub const DEFAULT_STEP_DOWN: f64 = 0.10;
pub const DEFAULT_AUTO_RECORD_UNDO: bool = true;
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

// --- Storage ---
pub const DEFAULT_LEARNING_DIR: &str = "learning_data";

// --- Maintenance ---
pub const DEFAULT_WEAK_PATTERN_THRESHOLD: f64 = 3.0;
pub const DEFAULT_MIN_CONFIDENCE_THRESHOLD: f64 = 0.5;
pub const DEFAULT_MIN_ACCURACY_THRESHOLD: f64 = 0.6;
pub const DEFAULT_MIN_FEEDBACK_FOR_ACCURACY: u64 = 10;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
