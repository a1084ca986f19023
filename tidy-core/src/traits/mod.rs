mod predictor;
mod snapshot_store;

pub use predictor::IPredictor;
pub use snapshot_store::ISnapshotStore;
