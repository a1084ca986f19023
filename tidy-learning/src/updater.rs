//! IncrementalUpdater — decay, record, and count towards the next flush.

use tidy_core::config::LearningConfig;
use tidy_core::errors::ConfigError;
use tidy_core::{FeatureSet, PatternStore, Strategy, TrainingRecord};
use tidy_decay::{DecayEngine, DecayReport};
use tracing::{debug, info, warn};

/// What one applied observation did.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyReport {
    pub decay: DecayReport,
    /// Strategies that recorded evidence.
    pub recorded: Vec<Strategy>,
    pub total_samples: u64,
    /// A snapshot should be written now.
    pub flush_due: bool,
    /// Set by the caller when the due flush was attempted and failed.
    pub flush_error: Option<String>,
}

/// Applies observations to a pattern store one at a time.
///
/// Decay always runs before the new evidence is added, so the newest
/// observation lands at full weight.
#[derive(Debug, Clone)]
pub struct IncrementalUpdater {
    decay: DecayEngine,
    sync_frequency: u32,
    pending: u32,
}

impl IncrementalUpdater {
    /// `sync_frequency` of 0 is logged and treated as 1; use
    /// [`IncrementalUpdater::try_new`] to reject it instead.
    pub fn new(decay: DecayEngine, sync_frequency: u32) -> Self {
        Self::try_new(decay, sync_frequency).unwrap_or_else(|e| {
            warn!(error = %e, "flushing after every observation");
            Self {
                decay,
                sync_frequency: 1,
                pending: 0,
            }
        })
    }

    pub fn try_new(decay: DecayEngine, sync_frequency: u32) -> Result<Self, ConfigError> {
        if sync_frequency == 0 {
            return Err(ConfigError::SyncFrequencyZero);
        }
        Ok(Self {
            decay,
            sync_frequency,
            pending: 0,
        })
    }

    pub fn from_config(config: &LearningConfig) -> Self {
        Self::new(DecayEngine::from_config(config), config.sync_frequency)
    }

    /// Decay every count, then record `features → destination`.
    pub fn apply(
        &mut self,
        store: &mut PatternStore,
        features: &FeatureSet,
        destination: &str,
    ) -> ApplyReport {
        let decay = self.decay.apply(store);
        let recorded = store.observe(features, destination);
        self.pending = self.pending.saturating_add(1);

        debug!(
            destination,
            strategies = recorded.len(),
            total_samples = store.total_samples(),
            pending = self.pending,
            "observation applied"
        );

        ApplyReport {
            decay,
            recorded,
            total_samples: store.total_samples(),
            flush_due: self.flush_due(),
            flush_error: None,
        }
    }

    /// Reset the store and replay `corpus` in order without decay.
    ///
    /// Marks a flush as due. Returns the number of records replayed.
    pub fn retrain(&mut self, store: &mut PatternStore, corpus: &[TrainingRecord]) -> usize {
        store.reset();
        for record in corpus {
            store.observe(&record.features, &record.destination);
        }
        self.pending = self.sync_frequency;
        info!(records = corpus.len(), "model retrained from history");
        corpus.len()
    }

    /// Enough updates have accumulated since the last flush.
    pub fn flush_due(&self) -> bool {
        self.pending >= self.sync_frequency
    }

    /// Updates applied since the last flush.
    pub fn pending(&self) -> u32 {
        self.pending
    }

    pub fn mark_flushed(&mut self) {
        self.pending = 0;
    }

    pub fn sync_frequency(&self) -> u32 {
        self.sync_frequency
    }

    pub fn decay(&self) -> &DecayEngine {
        &self.decay
    }
}

impl Default for IncrementalUpdater {
    fn default() -> Self {
        Self::from_config(&LearningConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flush_due_every_sync_frequency() {
        let mut updater = IncrementalUpdater::new(DecayEngine::disabled(), 3);
        let mut store = PatternStore::new();
        let features = FeatureSet::default().with_category("documents");
        let due: Vec<bool> = (0..3)
            .map(|_| updater.apply(&mut store, &features, "Documents").flush_due)
            .collect();
        assert_eq!(due, vec![false, false, true]);
        updater.mark_flushed();
        assert_eq!(updater.pending(), 0);
        assert!(!updater.flush_due());
    }

    #[test]
    fn zero_sync_frequency_flushes_every_update() {
        let mut updater = IncrementalUpdater::new(DecayEngine::disabled(), 0);
        let mut store = PatternStore::new();
        let report = updater.apply(&mut store, &FeatureSet::default(), "Documents");
        assert!(report.flush_due);
    }

    #[test]
    fn try_new_rejects_zero_sync_frequency() {
        assert!(matches!(
            IncrementalUpdater::try_new(DecayEngine::disabled(), 0),
            Err(ConfigError::SyncFrequencyZero)
        ));
        let updater = IncrementalUpdater::try_new(DecayEngine::disabled(), 4).unwrap();
        assert_eq!(updater.sync_frequency(), 4);
    }

    #[test]
    fn empty_feature_set_still_counts_as_sample() {
        let mut updater = IncrementalUpdater::default();
        let mut store = PatternStore::new();
        let report = updater.apply(&mut store, &FeatureSet::default(), "Documents");
        assert!(report.recorded.is_empty());
        assert_eq!(report.total_samples, 1);
    }
}
