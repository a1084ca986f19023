//! # tidy-engine
//!
//! `TidyEngine` owns one session's learned state: the pattern store, the
//! reinforcement state, and the snapshot store they are persisted to.
//! Callers hand it feature sets and outcome events; it never touches files
//! other than its own snapshot.
//!
//! ```no_run
//! use tidy_core::{FeatureSet, TidyConfig};
//! use tidy_engine::TidyEngine;
//!
//! # fn main() -> tidy_core::TidyResult<()> {
//! let mut engine = TidyEngine::open_dir(TidyConfig::default())?;
//! let features = FeatureSet::from_file("invoice_2024.pdf", "documents", None);
//! if let Some(p) = engine.predict(&features).into_prediction() {
//!     println!("{} ({:.0}%): {}", p.destination, p.confidence * 100.0, p.reason);
//! }
//! engine.observe(&features, "Finance")?;
//! engine.shutdown()?;
//! # Ok(())
//! # }
//! ```

mod engine;
mod stats;

pub use engine::TidyEngine;
pub use stats::model_stats;
