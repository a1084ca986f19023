use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{Distribution, PatternTable};
use crate::constants::MODEL_VERSION;
use crate::features::{FeatureSet, Strategy};

/// Strategy-scoped frequency accounting for every observation seen so far.
///
/// Only aggregates are kept; individual observations are never stored.
/// Counts move in two ways only: `record` adds evidence, `decay_all` shrinks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternStore {
    tables: BTreeMap<Strategy, PatternTable>,
    total_samples: u64,
    last_trained: Option<DateTime<Utc>>,
    version: String,
}

impl PatternStore {
    /// An empty model with no evidence.
    pub fn new() -> Self {
        Self {
            tables: BTreeMap::new(),
            total_samples: 0,
            last_trained: None,
            version: MODEL_VERSION.to_string(),
        }
    }

    /// Add one unit of evidence for `feature_value → destination` in one strategy.
    ///
    /// Does not count as a new sample, so the minimum-sample gate stays closed
    /// until [`PatternStore::record_observation`] is called once per observation.
    /// [`PatternStore::observe`] does both.
    pub fn record(&mut self, strategy: Strategy, feature_value: &str, destination: &str) {
        self.tables
            .entry(strategy)
            .or_default()
            .increment(feature_value, destination, 1.0);
    }

    /// Record one observation across every strategy whose feature is defined.
    ///
    /// Increments `total_samples` exactly once, however many strategies learned.
    /// Returns the strategies that recorded evidence.
    pub fn observe(&mut self, features: &FeatureSet, destination: &str) -> Vec<Strategy> {
        let recorded: Vec<Strategy> = features
            .defined()
            .map(|(strategy, value)| {
                self.record(strategy, value, destination);
                strategy
            })
            .collect();
        self.record_observation();
        recorded
    }

    /// Count one completed observation and stamp the training time.
    pub fn record_observation(&mut self) {
        self.total_samples += 1;
        self.last_trained = Some(Utc::now());
    }

    /// Full destination → count mapping for a feature value (empty if unseen).
    pub fn distribution(&self, strategy: Strategy, feature_value: &str) -> Distribution {
        self.tables
            .get(&strategy)
            .and_then(|table| table.row(feature_value))
            .map(|row| Distribution::new(row.clone()))
            .unwrap_or_default()
    }

    /// Multiply every count in every table by `factor`.
    ///
    /// `factor` must lie in (0, 1]; anything else is ignored. Near-zero cells
    /// are left in place for pruning.
    pub fn decay_all(&mut self, factor: f64) {
        if !(factor > 0.0 && factor <= 1.0) {
            warn!(factor, "ignoring decay factor outside (0, 1]");
            return;
        }
        if factor == 1.0 {
            return;
        }
        for table in self.tables.values_mut() {
            table.scale(factor);
        }
    }

    /// Total count of `destination` across all feature values of one strategy.
    pub fn popularity(&self, strategy: Strategy, destination: &str) -> f64 {
        self.tables
            .get(&strategy)
            .map(|table| table.destination_total(destination))
            .unwrap_or(0.0)
    }

    /// Total count of `destination` across every strategy.
    pub fn aggregate_popularity(&self, destination: &str) -> f64 {
        self.tables
            .values()
            .map(|table| table.destination_total(destination))
            .sum()
    }

    /// Aggregate popularity of every destination ever recorded.
    pub fn destination_popularity(&self) -> BTreeMap<String, f64> {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for (_, row) in self.tables.values().flat_map(|t| t.iter()) {
            for (dest, count) in row {
                *totals.entry(dest.clone()).or_insert(0.0) += count;
            }
        }
        totals
    }

    /// Number of distinct feature values learned by a strategy.
    pub fn distinct_values(&self, strategy: Strategy) -> usize {
        self.tables.get(&strategy).map(PatternTable::len).unwrap_or(0)
    }

    /// Total evidence per feature value for one strategy.
    pub fn value_totals(&self, strategy: Strategy) -> Vec<(String, f64)> {
        self.tables
            .get(&strategy)
            .map(|table| {
                table
                    .iter()
                    .map(|(value, row)| (value.clone(), row.values().sum()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Remove a feature value from a strategy's table. Returns true if it existed.
    pub fn remove_value(&mut self, strategy: Strategy, feature_value: &str) -> bool {
        self.tables
            .get_mut(&strategy)
            .map(|table| table.remove(feature_value))
            .unwrap_or(false)
    }

    /// Remove every feature value of `strategy` whose total evidence is below
    /// `min_total`. Returns the removed values in order.
    pub fn prune(&mut self, strategy: Strategy, min_total: f64) -> Vec<String> {
        let weak: Vec<String> = self
            .value_totals(strategy)
            .into_iter()
            .filter(|(_, total)| *total < min_total)
            .map(|(value, _)| value)
            .collect();
        for value in &weak {
            self.remove_value(strategy, value);
        }
        weak
    }

    /// Read-only access to one strategy's table.
    pub fn table(&self, strategy: Strategy) -> Option<&PatternTable> {
        self.tables.get(&strategy)
    }

    pub fn total_samples(&self) -> u64 {
        self.total_samples
    }

    pub fn last_trained(&self) -> Option<DateTime<Utc>> {
        self.last_trained
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// True when nothing has ever been observed.
    pub fn is_empty(&self) -> bool {
        self.total_samples == 0 && self.tables.values().all(PatternTable::is_empty)
    }

    /// Forget everything.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for PatternStore {
    fn default() -> Self {
        Self::new()
    }
}
