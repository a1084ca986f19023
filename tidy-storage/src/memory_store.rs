//! InMemorySnapshotStore — keeps the last snapshot in process memory.

use std::sync::{Mutex, MutexGuard};

use tidy_core::errors::TidyResult;
use tidy_core::traits::ISnapshotStore;
use tidy_core::ModelSnapshot;

/// Snapshot store that never touches disk.
///
/// The mutex only exists to satisfy `Send + Sync`; there is a single writer.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    slot: Mutex<Option<ModelSnapshot>>,
    saves: Mutex<u64>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a snapshot already saved.
    pub fn with_snapshot(snapshot: ModelSnapshot) -> Self {
        Self {
            slot: Mutex::new(Some(snapshot)),
            saves: Mutex::new(0),
        }
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> u64 {
        *lock(&self.saves)
    }

    /// Clone of the stored snapshot, if any.
    pub fn current(&self) -> Option<ModelSnapshot> {
        lock(&self.slot).clone()
    }
}

impl ISnapshotStore for InMemorySnapshotStore {
    fn save(&self, snapshot: &ModelSnapshot) -> TidyResult<()> {
        *lock(&self.slot) = Some(snapshot.clone());
        *lock(&self.saves) += 1;
        Ok(())
    }

    fn load(&self) -> TidyResult<Option<ModelSnapshot>> {
        match lock(&self.slot).as_ref() {
            Some(snapshot) => {
                snapshot.check_version()?;
                Ok(Some(snapshot.clone()))
            }
            None => Ok(None),
        }
    }

    fn clear(&self) -> TidyResult<()> {
        *lock(&self.slot) = None;
        Ok(())
    }
}

/// A poisoned lock still holds valid data: the guarded values are plain
/// clones and counters.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
