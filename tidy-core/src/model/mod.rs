//! The learned state: pattern tables, reinforcement entries, and their snapshot form.

mod distribution;
mod pattern_store;
mod pattern_table;
mod reinforcement;
mod snapshot;

pub use distribution::Distribution;
pub use pattern_store::PatternStore;
pub use pattern_table::PatternTable;
pub use reinforcement::{ReinforcementEntry, ReinforcementKey, ReinforcementState};
pub use snapshot::ModelSnapshot;
