//! # tidy-decay
//!
//! Ages learned evidence so the model follows recent habits.
//!
//! Before every incremental update all counts are multiplied by a single
//! global factor `f`. An observation made `n` updates ago therefore weighs
//! `f^n` relative to a fresh one: with `f = 0.95`, ~60% after 10 updates and
//! ~8% after 50. Decayed cells are never deleted here; weak feature values
//! are removed separately by [`pruning`].

pub mod engine;
pub mod formula;
pub mod pruning;

pub use engine::{DecayEngine, DecayReport};
pub use pruning::{PruneDecision, DEFAULT_PRUNE_THRESHOLD, PRUNABLE_STRATEGIES};
