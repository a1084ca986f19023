use tidy_core::config::MaintenanceConfig;
use tidy_core::models::HealthStatus;
use tidy_core::{FeatureSet, PatternStore, ReinforcementKey, ReinforcementState, Strategy};
use tidy_observability::check_model_health;
use tidy_observability::health::{LOW_ACCURACY, LOW_CONFIDENCE, NO_MODEL};

fn store_with(category: &str, destinations: &[&str]) -> PatternStore {
    let mut store = PatternStore::new();
    for dest in destinations {
        store.observe(&FeatureSet::default().with_category(category), dest);
    }
    store
}

fn feedback(correct: u64, wrong: u64) -> ReinforcementState {
    let mut state = ReinforcementState::new();
    let entry = state.entry_mut(&ReinforcementKey::new(Strategy::Category, "documents", "Documents"));
    entry.correct_count = correct;
    entry.wrong_count = wrong;
    state.total_feedback = correct + wrong;
    state
}

#[test]
fn empty_model_needs_training() {
    let report = check_model_health(
        &PatternStore::new(),
        &ReinforcementState::new(),
        &MaintenanceConfig::default(),
    );
    assert_eq!(report.status, HealthStatus::NeedsTraining);
    assert!(report.recommendations.contains(&NO_MODEL.to_string()));
    assert_eq!(report.metrics.avg_confidence, None);
}

#[test]
fn decisive_model_is_healthy() {
    let store = store_with("documents", &["Documents"; 5]);
    let report = check_model_health(&store, &ReinforcementState::new(), &MaintenanceConfig::default());
    assert!(report.is_healthy());
    assert!(report.issues.is_empty());
    assert_eq!(report.metrics.avg_confidence, Some(1.0));
    assert_eq!(report.metrics.total_samples, 5);
    assert_eq!(report.metrics.weak_patterns, 0);
}

#[test]
fn indecisive_model_needs_attention() {
    let store = store_with("documents", &["A", "B", "C", "D", "A"]);
    let report = check_model_health(&store, &ReinforcementState::new(), &MaintenanceConfig::default());
    assert_eq!(report.status, HealthStatus::NeedsAttention);
    assert!(report.recommendations.contains(&LOW_CONFIDENCE.to_string()));
    assert!((report.metrics.avg_confidence.unwrap() - 0.4).abs() < 1e-9);
}

#[test]
fn poor_feedback_degrades_the_model() {
    let store = store_with("documents", &["Documents"; 5]);
    let report = check_model_health(&store, &feedback(3, 9), &MaintenanceConfig::default());
    assert_eq!(report.status, HealthStatus::Degraded);
    assert!(report.recommendations.contains(&LOW_ACCURACY.to_string()));
    assert_eq!(report.metrics.feedback_accuracy, Some(0.25));
}

#[test]
fn accuracy_is_ignored_until_enough_feedback() {
    let store = store_with("documents", &["Documents"; 5]);
    let report = check_model_health(&store, &feedback(0, 10), &MaintenanceConfig::default());
    assert!(report.is_healthy());
    assert_eq!(report.metrics.feedback_accuracy, None);
}

#[test]
fn weak_patterns_are_counted_and_recommended() {
    let mut store = store_with("documents", &["Documents"; 5]);
    store.observe(&FeatureSet::default().with_category("images"), "Pictures");
    let report = check_model_health(&store, &ReinforcementState::new(), &MaintenanceConfig::default());
    assert_eq!(report.metrics.weak_patterns, 1);
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.contains("1 weak patterns")));
}
