//! Model health: is there enough evidence, is it decisive, and is feedback agreeing?
//!
//! Checks run in order and the later, more serious ones overwrite the status:
//! needs training → needs attention → degraded.

mod recommendations;

pub use recommendations::{
    LOW_ACCURACY, LOW_CONFIDENCE, NO_MODEL, PRUNE_WEAK_PATTERNS_PREFIX,
};

use chrono::Utc;
use tidy_core::config::MaintenanceConfig;
use tidy_core::models::{HealthMetrics, HealthReport, HealthStatus};
use tidy_core::{PatternStore, ReinforcementState, Strategy};
use tidy_decay::pruning;
use tracing::debug;

/// Assess the model and the feedback it has received.
pub fn check_model_health(
    store: &PatternStore,
    reinforcement: &ReinforcementState,
    config: &MaintenanceConfig,
) -> HealthReport {
    let mut status = HealthStatus::Healthy;
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();
    let mut metrics = HealthMetrics {
        total_samples: store.total_samples(),
        ..HealthMetrics::default()
    };

    if store.total_samples() > 0 {
        let avg = average_category_confidence(store);
        metrics.avg_confidence = Some(avg);
        if avg < config.min_confidence_threshold {
            issues.push(format!("Low average confidence: {:.1}%", avg * 100.0));
            recommendations.push(LOW_CONFIDENCE.to_string());
            status = HealthStatus::NeedsAttention;
        }
    } else {
        issues.push("No trained model found".to_string());
        recommendations.push(NO_MODEL.to_string());
        status = HealthStatus::NeedsTraining;
    }

    if reinforcement.total_feedback > config.min_feedback_for_accuracy {
        if let Some(accuracy) = reinforcement.accuracy() {
            metrics.feedback_accuracy = Some(accuracy);
            if accuracy < config.min_accuracy_threshold {
                issues.push(format!("Low feedback accuracy: {:.1}%", accuracy * 100.0));
                recommendations.push(LOW_ACCURACY.to_string());
                status = HealthStatus::Degraded;
            }
        }
    }

    let weak = pruning::plan(store, config.weak_pattern_threshold)
        .into_iter()
        .filter(|d| d.should_prune)
        .count();
    metrics.weak_patterns = weak;
    if weak > 0 {
        recommendations.push(format!("{PRUNE_WEAK_PATTERNS_PREFIX} {weak} weak patterns"));
    }

    debug!(?status, issues = issues.len(), "model health checked");

    HealthReport {
        checked_at: Utc::now(),
        status,
        issues,
        recommendations,
        metrics,
    }
}

/// Mean `max / total` over every category value with evidence; 0.0 when none.
fn average_category_confidence(store: &PatternStore) -> f64 {
    let Some(table) = store.table(Strategy::Category) else {
        return 0.0;
    };
    let confidences: Vec<f64> = table
        .iter()
        .filter_map(|(value, _)| {
            let dist = store.distribution(Strategy::Category, value);
            let total = dist.total();
            (total > 0.0).then(|| dist.max_count() / total)
        })
        .collect();
    if confidences.is_empty() {
        0.0
    } else {
        confidences.iter().sum::<f64>() / confidences.len() as f64
    }
}
