use crate::errors::TidyResult;
use crate::model::ModelSnapshot;

/// Persistence boundary for the learned state.
///
/// No locking is implied: callers must not run two writers against one store.
pub trait ISnapshotStore: Send + Sync {
    /// Persist a snapshot, replacing any previous one.
    fn save(&self, snapshot: &ModelSnapshot) -> TidyResult<()>;

    /// Load the last snapshot. `Ok(None)` means nothing was ever saved.
    fn load(&self) -> TidyResult<Option<ModelSnapshot>>;

    /// Remove everything this store persisted.
    fn clear(&self) -> TidyResult<()>;
}
