//! JsonSnapshotStore — file-backed `ISnapshotStore`.
//!
//! `model.json` is replaced atomically: the snapshot is written to a temp
//! file in the same directory, synced, and renamed over the old one. A crash
//! mid-write leaves the previous snapshot intact.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tidy_core::config::StorageConfig;
use tidy_core::constants::{MODEL_FILE, PREFERENCES_FILE};
use tidy_core::errors::{SnapshotError, TidyResult};
use tidy_core::traits::ISnapshotStore;
use tidy_core::ModelSnapshot;
use tracing::{debug, info, warn};

use crate::preferences::PreferencesExport;

/// Snapshot store rooted at a learning directory.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    dir: PathBuf,
}

impl JsonSnapshotStore {
    /// The directory is created on first save, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.learning_dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn model_path(&self) -> PathBuf {
        self.dir.join(MODEL_FILE)
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.dir.join(PREFERENCES_FILE)
    }

    fn write_preferences(&self, snapshot: &ModelSnapshot) -> TidyResult<()> {
        let export = PreferencesExport::from_store(&snapshot.model);
        let json = serde_json::to_vec_pretty(&export)?;
        atomic_write(&self.preferences_path(), &json)
    }
}

impl ISnapshotStore for JsonSnapshotStore {
    fn save(&self, snapshot: &ModelSnapshot) -> TidyResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| write_failed(&self.dir, e))?;
        let json = serde_json::to_vec_pretty(snapshot)?;
        let path = self.model_path();
        atomic_write(&path, &json)?;

        // The export is a convenience; a failure here must not fail the save.
        if let Err(e) = self.write_preferences(snapshot) {
            warn!(error = %e, "failed to write preferences export");
        }

        info!(
            path = %path.display(),
            total_samples = snapshot.model.total_samples(),
            reinforcement_entries = snapshot.reinforcement.len(),
            "snapshot saved"
        );
        Ok(())
    }

    fn load(&self) -> TidyResult<Option<ModelSnapshot>> {
        let path = self.model_path();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no snapshot found");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: ModelSnapshot =
            serde_json::from_slice(&bytes).map_err(|e| SnapshotError::Corrupt {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        snapshot.check_version()?;

        info!(
            path = %path.display(),
            total_samples = snapshot.model.total_samples(),
            saved_at = %snapshot.saved_at,
            "snapshot loaded"
        );
        Ok(Some(snapshot))
    }

    fn clear(&self) -> TidyResult<()> {
        for path in [self.model_path(), self.preferences_path()] {
            match fs::remove_file(&path) {
                Ok(()) => info!(path = %path.display(), "deleted"),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        // Only removes the directory when nothing else lives there.
        match fs::remove_dir(&self.dir) {
            Ok(()) => info!(path = %self.dir.display(), "removed learning directory"),
            Err(e) => debug!(path = %self.dir.display(), error = %e, "learning directory kept"),
        }
        Ok(())
    }
}

/// Write to a temp file beside `target`, then rename over it.
fn atomic_write(target: &Path, data: &[u8]) -> TidyResult<()> {
    let tmp = target.with_extension(format!("json.tmp.{}", std::process::id()));
    let result = (|| -> std::io::Result<()> {
        let mut file = File::create(&tmp)?;
        file.write_all(data)?;
        file.sync_all()?;
        drop(file);
        fs::rename(&tmp, target)
    })();

    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(write_failed(target, e).into());
    }
    Ok(())
}

fn write_failed(path: &Path, e: std::io::Error) -> SnapshotError {
    SnapshotError::WriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}
