//! # tidy-prediction
//!
//! Turns a file's feature set into a destination, a confidence, and a reason.
//!
//! ## Strategies
//!
//! | Strategy | Feature | Default weight |
//! |----------|---------|----------------|
//! | Category | broad file category | 0.5 |
//! | Extension | lower-cased extension | 0.3 |
//! | Name prefix | first token of the stem | 0.2 |
//! | Temporal | year bucket | 0.0 (learned, not voting) |
//!
//! Each strategy with evidence casts one local vote (its most frequent
//! destination, weighted by `max / total`). Votes are summed per destination
//! with fixed weights; the winner's score is divided by the weight of the
//! strategies that actually voted, then scaled by the average reinforcement
//! multiplier of the strategies that backed it.

pub mod engine;
pub mod reason;
pub mod strategies;

pub use engine::Predictor;
pub use reason::{format_trail, parse_reason, supporting_keys};
