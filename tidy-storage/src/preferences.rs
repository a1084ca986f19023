//! Human-readable export of what the model has learned.
//!
//! Written next to every snapshot; never read back.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tidy_core::constants::PREFERENCES_TOP_DESTINATIONS;
use tidy_core::{PatternStore, Strategy};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferencesMetadata {
    pub version: String,
    pub total_samples: u64,
    pub last_trained: Option<DateTime<Utc>>,
    pub exported_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationShare {
    pub destination: String,
    pub count: f64,
}

/// Top destinations per feature value, grouped by strategy name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferencesExport {
    pub metadata: PreferencesMetadata,
    pub patterns: BTreeMap<String, BTreeMap<String, Vec<DestinationShare>>>,
}

impl PreferencesExport {
    pub fn from_store(store: &PatternStore) -> Self {
        Self::with_limit(store, PREFERENCES_TOP_DESTINATIONS)
    }

    /// Keep at most `limit` destinations per feature value, busiest first.
    pub fn with_limit(store: &PatternStore, limit: usize) -> Self {
        let mut patterns = BTreeMap::new();
        for strategy in Strategy::ALL {
            let Some(table) = store.table(strategy) else {
                continue;
            };
            let values: BTreeMap<String, Vec<DestinationShare>> = table
                .iter()
                .map(|(value, _)| {
                    let top = store
                        .distribution(strategy, value)
                        .top(limit)
                        .into_iter()
                        .map(|(destination, count)| DestinationShare {
                            destination: destination.to_string(),
                            count,
                        })
                        .collect();
                    (value.clone(), top)
                })
                .collect();
            if !values.is_empty() {
                patterns.insert(strategy.name().to_string(), values);
            }
        }

        Self {
            metadata: PreferencesMetadata {
                version: store.version().to_string(),
                total_samples: store.total_samples(),
                last_trained: store.last_trained(),
                exported_at: Utc::now(),
            },
            patterns,
        }
    }

    /// Top destinations for one strategy / value pair, if exported.
    pub fn top_for(&self, strategy: Strategy, value: &str) -> Option<&[DestinationShare]> {
        self.patterns
            .get(strategy.name())
            .and_then(|values| values.get(value))
            .map(Vec::as_slice)
    }
}
