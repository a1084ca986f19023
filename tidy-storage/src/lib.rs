//! # tidy-storage
//!
//! Snapshot persistence behind `ISnapshotStore`.
//! `JsonSnapshotStore` keeps `model.json` and a human-readable
//! `preferences.json` in the learning directory; `InMemorySnapshotStore`
//! serves tests and embedders that persist elsewhere.

pub mod json_store;
pub mod memory_store;
pub mod preferences;

pub use json_store::JsonSnapshotStore;
pub use memory_store::InMemorySnapshotStore;
pub use preferences::{DestinationShare, PreferencesExport, PreferencesMetadata};
