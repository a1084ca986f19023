//! TidyEngine — the session that owns the model, implements the public
//! predict / learn / feedback / maintenance surface, and decides when to flush.

use tidy_core::config::PositiveFeedback;
use tidy_core::models::{FeedbackStats, HealthReport, MaintenanceReport, ModelStats};
use tidy_core::traits::ISnapshotStore;
use tidy_core::{
    FeatureSet, ModelSnapshot, PatternStore, Prediction, PredictionOutcome, ReinforcementState,
    TidyConfig, TidyResult, TrainingRecord,
};
use tidy_decay::{pruning, PruneDecision};
use tidy_learning::{
    feedback_stats, ApplyReport, FeedbackReinforcer, IncrementalUpdater, DEFAULT_TOP_ENTRIES,
};
use tidy_observability::{
    check_model_health, feedback_span, prediction_span, snapshot_span, update_span,
};
use tidy_prediction::Predictor;
use tidy_storage::{InMemorySnapshotStore, JsonSnapshotStore};
use tracing::{debug, info, instrument, warn};

/// One learning session.
///
/// Not shared between threads: mutators take `&mut self` and the snapshot
/// file is the only hand-off point between processes.
pub struct TidyEngine {
    config: TidyConfig,
    store: PatternStore,
    reinforcement: ReinforcementState,
    predictor: Predictor,
    updater: IncrementalUpdater,
    reinforcer: FeedbackReinforcer,
    snapshots: Box<dyn ISnapshotStore>,
}

impl TidyEngine {
    /// Validate `config` and restore the last snapshot from `snapshots`.
    ///
    /// A missing snapshot is a cold start. An unreadable one is logged and
    /// also treated as a cold start; only an invalid config is fatal.
    #[instrument(skip_all)]
    pub fn open(config: TidyConfig, snapshots: Box<dyn ISnapshotStore>) -> TidyResult<Self> {
        config.validate()?;

        let (store, mut reinforcement) = {
            let _span = snapshot_span!("load").entered();
            match snapshots.load() {
                Ok(Some(snapshot)) => (snapshot.model, snapshot.reinforcement),
                Ok(None) => {
                    info!("no snapshot found, starting with an empty model");
                    (PatternStore::new(), ReinforcementState::new())
                }
                Err(e) => {
                    warn!(error = %e, "could not restore snapshot, starting with an empty model");
                    (PatternStore::new(), ReinforcementState::new())
                }
            }
        };
        if !config.feedback.enabled {
            reinforcement.enabled = false;
        }

        info!(
            total_samples = store.total_samples(),
            reinforcement_entries = reinforcement.len(),
            feedback_enabled = reinforcement.enabled,
            "engine opened"
        );

        Ok(Self {
            predictor: Predictor::from_config(&config),
            updater: IncrementalUpdater::from_config(&config.learning),
            reinforcer: FeedbackReinforcer::new(&config.feedback),
            store,
            reinforcement,
            snapshots,
            config,
        })
    }

    /// Open against `config.storage.learning_dir`.
    pub fn open_dir(config: TidyConfig) -> TidyResult<Self> {
        let snapshots = JsonSnapshotStore::from_config(&config.storage);
        Self::open(config, Box::new(snapshots))
    }

    /// Open with nothing persisted to disk.
    pub fn in_memory(config: TidyConfig) -> TidyResult<Self> {
        Self::open(config, Box::new(InMemorySnapshotStore::new()))
    }

    // ── Prediction ────────────────────────────────────────────────────────

    pub fn predict(&self, features: &FeatureSet) -> PredictionOutcome {
        let _span = prediction_span!(features.defined().count()).entered();
        self.predictor
            .predict(features, &self.store, &self.reinforcement)
    }

    pub fn predict_batch(&self, batch: &[FeatureSet]) -> Vec<PredictionOutcome> {
        self.predictor
            .predict_batch(batch, &self.store, &self.reinforcement)
    }

    // ── Learning ──────────────────────────────────────────────────────────

    /// Learn that a file with `features` went to `destination`.
    ///
    /// Writes a snapshot when the sync frequency is reached. The observation
    /// is applied either way: a failed write is logged, reported in
    /// `flush_error`, and retried on the next due flush.
    pub fn observe(&mut self, features: &FeatureSet, destination: &str) -> TidyResult<ApplyReport> {
        let _span = update_span!(destination).entered();
        let mut report = self.updater.apply(&mut self.store, features, destination);
        if report.flush_due {
            if let Err(e) = self.flush() {
                warn!(
                    error = %e,
                    pending = self.updater.pending(),
                    "snapshot write failed, observation kept in memory"
                );
                report.flush_error = Some(e.to_string());
            }
        }
        Ok(report)
    }

    /// Rebuild the model from a full history, then flush.
    #[instrument(skip_all, fields(records = corpus.len()))]
    pub fn retrain(&mut self, corpus: &[TrainingRecord]) -> TidyResult<usize> {
        let replayed = self.updater.retrain(&mut self.store, corpus);
        self.flush()?;
        Ok(replayed)
    }

    // ── Feedback ──────────────────────────────────────────────────────────

    /// The user explicitly accepted `prediction`. Counts as correct only in
    /// explicit positive-feedback mode; implicit mode takes positive evidence
    /// from [`TidyEngine::settle`] alone, so one prediction is never credited twice.
    pub fn confirm(&mut self, prediction: &Prediction) -> usize {
        match self.config.feedback.positive_feedback {
            PositiveFeedback::Explicit => {
                let _span = feedback_span!("confirm", prediction.destination).entered();
                self.reinforcer.record_confirmation(
                    &mut self.reinforcement,
                    &prediction.contributions,
                    &prediction.destination,
                )
            }
            PositiveFeedback::Implicit => {
                debug!(destination = %prediction.destination, "confirmation ignored in implicit mode");
                0
            }
        }
    }

    /// An applied prediction was never reversed. Counts as correct only in
    /// implicit positive-feedback mode.
    pub fn settle(&mut self, prediction: &Prediction) -> usize {
        match self.config.feedback.positive_feedback {
            PositiveFeedback::Implicit => {
                let _span = feedback_span!("settle", prediction.destination).entered();
                self.reinforcer.record_confirmation(
                    &mut self.reinforcement,
                    &prediction.contributions,
                    &prediction.destination,
                )
            }
            PositiveFeedback::Explicit => 0,
        }
    }

    /// The user moved a file back out of `destination`; `reason` is the
    /// trail stored with the original move.
    ///
    /// Returns how many mappings were penalised. Fails only on a malformed reason.
    pub fn undo(&mut self, reason: &str, destination: &str) -> TidyResult<usize> {
        if !self.config.feedback.auto_record_undo {
            return Ok(0);
        }
        let _span = feedback_span!("undo", destination).entered();
        let penalised =
            self.reinforcer
                .record_undo_reason(&mut self.reinforcement, reason, destination)?;
        info!(destination, penalised, "undo recorded as negative feedback");
        Ok(penalised)
    }

    /// The user sent the file somewhere else: penalise the mappings behind
    /// `prediction` and learn the actual destination.
    pub fn correct(
        &mut self,
        prediction: &Prediction,
        features: &FeatureSet,
        actual: &str,
    ) -> TidyResult<ApplyReport> {
        if prediction.destination != actual {
            let _span = feedback_span!("correct", prediction.destination).entered();
            self.reinforcer.record_undo(
                &mut self.reinforcement,
                &prediction.contributions,
                &prediction.destination,
            );
        }
        self.observe(features, actual)
    }

    pub fn enable_feedback(&mut self) {
        self.reinforcer.enable(&mut self.reinforcement);
    }

    pub fn disable_feedback(&mut self) {
        self.reinforcer.disable(&mut self.reinforcement);
    }

    // ── Persistence ───────────────────────────────────────────────────────

    /// Write a snapshot now.
    pub fn flush(&mut self) -> TidyResult<()> {
        let _span = snapshot_span!("save").entered();
        let snapshot = ModelSnapshot::new(self.store.clone(), self.reinforcement.clone());
        self.snapshots.save(&snapshot)?;
        self.updater.mark_flushed();
        Ok(())
    }

    /// Flush and close the session.
    #[instrument(skip_all)]
    pub fn shutdown(mut self) -> TidyResult<()> {
        self.flush()?;
        info!(total_samples = self.store.total_samples(), "engine shut down");
        Ok(())
    }

    // ── Maintenance ───────────────────────────────────────────────────────

    /// Forget everything learned and delete the persisted snapshot. Irreversible.
    #[instrument(skip_all)]
    pub fn reset(&mut self) -> TidyResult<()> {
        self.store.reset();
        self.reinforcement.reset();
        self.updater.mark_flushed();
        self.snapshots.clear()?;
        warn!("learned model and feedback cleared");
        Ok(())
    }

    /// Remove weak category / extension patterns and flush if anything changed.
    #[instrument(skip_all)]
    pub fn prune(&mut self) -> TidyResult<Vec<PruneDecision>> {
        let threshold = self.config.maintenance.weak_pattern_threshold;
        let pruned = pruning::prune_weak_patterns(&mut self.store, threshold);
        if !pruned.is_empty() {
            info!(pruned = pruned.len(), threshold, "weak patterns pruned");
            self.flush()?;
        }
        Ok(pruned)
    }

    /// Retrain from `corpus` when the model is not healthy, or always when `force`.
    ///
    /// Returns whether a retrain happened.
    #[instrument(skip_all, fields(records = corpus.len(), force = force))]
    pub fn retrain_if_needed(&mut self, corpus: &[TrainingRecord], force: bool) -> TidyResult<bool> {
        if !force {
            let health = self.health();
            if health.is_healthy() {
                info!("model health is good, no retrain needed");
                return Ok(false);
            }
            warn!(status = ?health.status, issues = ?health.issues, "model needs retraining");
        }
        self.retrain(corpus)?;
        info!(
            total_samples = self.store.total_samples(),
            reason = if force { "manual" } else { "health_check" },
            "model retrained"
        );
        Ok(true)
    }

    /// Full maintenance pass: check health, retrain if it is not healthy,
    /// then prune weak patterns.
    #[instrument(skip_all, fields(records = corpus.len()))]
    pub fn maintain(&mut self, corpus: &[TrainingRecord]) -> TidyResult<MaintenanceReport> {
        let health_before = self.health();
        let retrained = !health_before.is_healthy() && self.retrain_if_needed(corpus, true)?;
        let patterns_pruned = self.prune()?.len();
        info!(
            status = ?health_before.status,
            retrained,
            patterns_pruned,
            "maintenance finished"
        );
        Ok(MaintenanceReport {
            health_before,
            retrained,
            patterns_pruned,
        })
    }

    pub fn health(&self) -> HealthReport {
        check_model_health(&self.store, &self.reinforcement, &self.config.maintenance)
    }

    pub fn stats(&self) -> ModelStats {
        crate::stats::model_stats(&self.store, &self.reinforcement)
    }

    pub fn feedback_stats(&self) -> FeedbackStats {
        feedback_stats(&self.reinforcement, DEFAULT_TOP_ENTRIES)
    }

    /// Overall feedback accuracy; `None` before any feedback.
    pub fn accuracy(&self) -> Option<f64> {
        self.reinforcer.accuracy(&self.reinforcement)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &TidyConfig {
        &self.config
    }

    pub fn store(&self) -> &PatternStore {
        &self.store
    }

    pub fn reinforcement(&self) -> &ReinforcementState {
        &self.reinforcement
    }

    /// Observations applied since the last snapshot.
    pub fn pending_updates(&self) -> u32 {
        self.updater.pending()
    }
}
