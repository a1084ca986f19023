//! # tidy-learning
//!
//! Online learning for the destination model.
//! The incremental updater decays and then records each observation, and
//! decides when a snapshot is due. The feedback reinforcer turns correct and
//! wrong outcomes into bounded per-mapping confidence multipliers.

pub mod feedback;
pub mod updater;

pub use feedback::{feedback_stats, FeedbackReinforcer, Outcome, DEFAULT_TOP_ENTRIES};
pub use updater::{ApplyReport, IncrementalUpdater};
