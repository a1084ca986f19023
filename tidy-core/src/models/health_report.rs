use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Overall model condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    NeedsTraining,
    NeedsAttention,
    Degraded,
}

/// Numbers behind a health verdict.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub total_samples: u64,
    /// Mean local confidence of category patterns.
    pub avg_confidence: Option<f64>,
    pub feedback_accuracy: Option<f64>,
    pub weak_patterns: usize,
}

/// Model health report with issues and recommended actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub checked_at: DateTime<Utc>,
    pub status: HealthStatus,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub metrics: HealthMetrics,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

/// Outcome of one full maintenance pass: health check, optional retrain, prune.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceReport {
    pub health_before: HealthReport,
    pub retrained: bool,
    /// Feature values removed as weak patterns.
    pub patterns_pruned: usize,
}
