use tidy_core::config::{FeedbackConfig, LearningConfig};
use tidy_core::errors::ConfigError;
use tidy_core::{
    FeatureSet, PatternStore, ReinforcementKey, ReinforcementState, Strategy, TrainingRecord,
};
use tidy_decay::DecayEngine;
use tidy_learning::{FeedbackReinforcer, IncrementalUpdater};
use tidy_prediction::Predictor;

fn documents() -> FeatureSet {
    FeatureSet::default().with_category("documents")
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── IncrementalUpdater ────────────────────────────────────────────────────

#[test]
fn decay_runs_before_the_new_increment() {
    let mut store = PatternStore::new();
    for dest in ["Documents", "Documents", "Documents", "Work"] {
        store.observe(&documents(), dest);
    }
    let mut updater = IncrementalUpdater::new(DecayEngine::new(0.95), 5);
    let unrelated = FeatureSet::default().with_extension(".png");
    let report = updater.apply(&mut store, &unrelated, "Pictures");

    let dist = store.distribution(Strategy::Category, "documents");
    assert!(approx(dist.get("Documents"), 2.85));
    assert!(approx(dist.get("Work"), 0.95));
    // The new observation is recorded at full weight.
    assert_eq!(store.distribution(Strategy::Extension, ".png").get("Pictures"), 1.0);
    assert_eq!(report.recorded, vec![Strategy::Extension]);
    assert_eq!(report.total_samples, 5);
    assert!(approx(report.decay.evidence_before, 4.0));
    assert!(approx(report.decay.evidence_after, 3.8));
}

#[test]
fn same_value_decays_then_increments() {
    let mut updater = IncrementalUpdater::new(DecayEngine::new(0.5), 5);
    let mut store = PatternStore::new();
    updater.apply(&mut store, &documents(), "Documents");
    updater.apply(&mut store, &documents(), "Documents");
    // 1 × 0.5 + 1
    assert_eq!(
        store.distribution(Strategy::Category, "documents").get("Documents"),
        1.5
    );
}

#[test]
fn disabled_decay_leaves_counts_whole() {
    let config = LearningConfig {
        enable_decay: false,
        ..LearningConfig::default()
    };
    let mut updater = IncrementalUpdater::from_config(&config);
    let mut store = PatternStore::new();
    for _ in 0..4 {
        updater.apply(&mut store, &documents(), "Documents");
    }
    assert_eq!(
        store.distribution(Strategy::Category, "documents").get("Documents"),
        4.0
    );
}

#[test]
fn default_config_flushes_every_five_updates() {
    let mut updater = IncrementalUpdater::default();
    let mut store = PatternStore::new();
    let mut flushes = 0;
    for _ in 0..12 {
        if updater.apply(&mut store, &documents(), "Documents").flush_due {
            flushes += 1;
            updater.mark_flushed();
        }
    }
    assert_eq!(flushes, 2);
    assert_eq!(updater.pending(), 2);
}

#[test]
fn retrain_replaces_the_model_without_decay() {
    let mut updater = IncrementalUpdater::new(DecayEngine::new(0.5), 5);
    let mut store = PatternStore::new();
    updater.apply(&mut store, &FeatureSet::default().with_category("images"), "Pictures");

    let corpus: Vec<TrainingRecord> = (0..4)
        .map(|_| TrainingRecord::new(documents(), "Documents"))
        .collect();
    assert_eq!(updater.retrain(&mut store, &corpus), 4);

    assert_eq!(store.total_samples(), 4);
    assert!(store.distribution(Strategy::Category, "images").is_empty());
    assert_eq!(
        store.distribution(Strategy::Category, "documents").get("Documents"),
        4.0
    );
    assert!(updater.flush_due());
}

#[test]
fn retrain_from_history_rows() {
    let corpus = vec![
        TrainingRecord::from_history("invoice_2024.pdf", "documents", "/home/u/organized/Finance/invoice_2024.pdf", None),
        TrainingRecord::from_history("invoice_2025.pdf", "documents", "/home/u/organized/Finance/invoice_2025.pdf", None),
        TrainingRecord::from_history("holiday.jpg", "images", "/home/u/organized/Pictures/holiday.jpg", None),
    ];
    let mut updater = IncrementalUpdater::default();
    let mut store = PatternStore::new();
    updater.retrain(&mut store, &corpus);

    let outcome = Predictor::default().predict(
        &FeatureSet::from_file("invoice_2026.pdf", "documents", None),
        &store,
        &ReinforcementState::new(),
    );
    assert_eq!(outcome.destination(), Some("Finance"));
}

// ── FeedbackReinforcer ────────────────────────────────────────────────────

#[test]
fn multiplier_path_five_correct_one_wrong() {
    let reinforcer = FeedbackReinforcer::default();
    let mut state = ReinforcementState::new();
    let key = ReinforcementKey::new(Strategy::Category, "documents", "Documents");

    let path: Vec<f64> = [true, true, true, true, true, false]
        .into_iter()
        .filter_map(|correct| reinforcer.record_outcome(&mut state, &key, correct))
        .collect();
    let expected = [1.05, 1.10, 1.15, 1.20, 1.25, 1.15];
    assert_eq!(path.len(), expected.len());
    for (actual, expected) in path.iter().zip(expected) {
        assert!(approx(*actual, expected), "{actual} != {expected}");
    }
    let entry = state.get(&key).unwrap();
    assert_eq!(entry.correct_count, 5);
    assert_eq!(entry.wrong_count, 1);
    assert!(approx(entry.accuracy().unwrap(), 5.0 / 6.0));
}

#[test]
fn undo_penalises_only_supporting_strategies() {
    let mut store = PatternStore::new();
    for _ in 0..3 {
        store.observe(&documents(), "Documents");
        store.observe(&FeatureSet::default().with_extension(".pdf"), "Work");
    }
    let features = documents().with_extension(".pdf");
    let prediction = Predictor::default()
        .predict(&features, &store, &ReinforcementState::new())
        .into_prediction()
        .unwrap();
    assert_eq!(prediction.destination, "Documents");

    let reinforcer = FeedbackReinforcer::default();
    let mut state = ReinforcementState::new();
    let penalised = reinforcer
        .record_undo_reason(&mut state, &prediction.reason, &prediction.destination)
        .unwrap();
    assert_eq!(penalised, 1);

    let category = ReinforcementKey::new(Strategy::Category, "documents", "Documents");
    let extension = ReinforcementKey::new(Strategy::Extension, ".pdf", "Work");
    assert!(approx(state.multiplier(&category), 0.9));
    assert!(state.get(&extension).is_none());
    assert_eq!(state.get(&category).unwrap().wrong_count, 1);
}

#[test]
fn undo_with_malformed_reason_is_an_error() {
    let reinforcer = FeedbackReinforcer::default();
    let mut state = ReinforcementState::new();
    assert!(reinforcer
        .record_undo_reason(&mut state, "not a trail", "Documents")
        .is_err());
    assert!(state.is_empty());
}

#[test]
fn confirmation_and_undo_via_trail() {
    let store = {
        let mut s = PatternStore::new();
        for _ in 0..3 {
            s.observe(&documents(), "Documents");
        }
        s
    };
    let prediction = Predictor::default()
        .predict(&documents(), &store, &ReinforcementState::new())
        .into_prediction()
        .unwrap();
    let reinforcer = FeedbackReinforcer::default();
    let mut state = ReinforcementState::new();
    assert_eq!(
        reinforcer.record_confirmation(&mut state, &prediction.contributions, "Documents"),
        1
    );
    assert_eq!(
        reinforcer.record_undo(&mut state, &prediction.contributions, "Documents"),
        1
    );
    assert_eq!(reinforcer.accuracy(&state), Some(0.5));
}

#[test]
fn custom_bounds_and_steps() {
    let config = FeedbackConfig {
        reinforcement_bounds: (0.5, 1.2),
        confidence_step: (0.1, 0.25),
        ..FeedbackConfig::default()
    };
    let reinforcer = FeedbackReinforcer::new(&config);
    let mut state = ReinforcementState::new();
    let key = ReinforcementKey::new(Strategy::NamePrefix, "invoice", "Finance");
    for _ in 0..5 {
        reinforcer.record_outcome(&mut state, &key, true);
    }
    assert_eq!(state.multiplier(&key), 1.2);
    for _ in 0..5 {
        reinforcer.record_outcome(&mut state, &key, false);
    }
    assert_eq!(state.multiplier(&key), 0.5);
}

#[test]
fn inverted_bounds_are_swapped_not_fatal() {
    let config = FeedbackConfig {
        reinforcement_bounds: (1.5, 0.1),
        ..FeedbackConfig::default()
    };
    assert!(matches!(
        FeedbackReinforcer::try_new(&config),
        Err(ConfigError::InvalidBounds { .. })
    ));

    let reinforcer = FeedbackReinforcer::new(&config);
    assert_eq!(reinforcer.bounds(), (0.1, 1.5));
    let mut state = ReinforcementState::new();
    let key = ReinforcementKey::new(Strategy::Extension, ".pdf", "Documents");
    for _ in 0..20 {
        reinforcer.record_outcome(&mut state, &key, false);
    }
    assert!(approx(state.multiplier(&key), 0.1));
}

#[test]
fn try_new_accepts_a_valid_config() {
    let reinforcer = FeedbackReinforcer::try_new(&FeedbackConfig::default()).unwrap();
    assert_eq!(reinforcer.bounds(), (0.1, 1.5));
}
