use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::defaults::NEUTRAL_MULTIPLIER;
use crate::features::Strategy;

/// Identifies one learned mapping: strategy, feature value, destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReinforcementKey {
    pub strategy: Strategy,
    pub value: String,
    pub destination: String,
}

impl ReinforcementKey {
    pub fn new(strategy: Strategy, value: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            strategy,
            value: value.into(),
            destination: destination.into(),
        }
    }
}

/// Outcome counters and trust multiplier for one mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementEntry {
    #[serde(flatten)]
    pub key: ReinforcementKey,
    pub correct_count: u64,
    pub wrong_count: u64,
    pub confidence_multiplier: f64,
    pub last_updated: Option<DateTime<Utc>>,
}

impl ReinforcementEntry {
    /// A fresh entry with neutral trust.
    pub fn new(key: ReinforcementKey) -> Self {
        Self {
            key,
            correct_count: 0,
            wrong_count: 0,
            confidence_multiplier: NEUTRAL_MULTIPLIER,
            last_updated: None,
        }
    }

    pub fn total(&self) -> u64 {
        self.correct_count + self.wrong_count
    }

    /// `correct / (correct + wrong)`, or `None` before any feedback.
    pub fn accuracy(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.correct_count as f64 / total as f64),
        }
    }
}

/// Every reinforcement entry plus feedback bookkeeping.
///
/// Entries are created lazily and never removed except by [`ReinforcementState::reset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementState {
    #[serde(with = "entry_list")]
    entries: BTreeMap<ReinforcementKey, ReinforcementEntry>,
    pub total_feedback: u64,
    pub last_updated: Option<DateTime<Utc>>,
    pub enabled: bool,
}

impl ReinforcementState {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            total_feedback: 0,
            last_updated: None,
            enabled: true,
        }
    }

    pub fn get(&self, key: &ReinforcementKey) -> Option<&ReinforcementEntry> {
        self.entries.get(key)
    }

    /// Get-or-insert-default accessor; new entries start neutral.
    pub fn entry_mut(&mut self, key: &ReinforcementKey) -> &mut ReinforcementEntry {
        self.entries
            .entry(key.clone())
            .or_insert_with(|| ReinforcementEntry::new(key.clone()))
    }

    /// Current multiplier for a key; neutral when no feedback was ever recorded.
    pub fn multiplier(&self, key: &ReinforcementKey) -> f64 {
        self.entries
            .get(key)
            .map(|e| e.confidence_multiplier)
            .unwrap_or(NEUTRAL_MULTIPLIER)
    }

    pub fn entries(&self) -> impl Iterator<Item = &ReinforcementEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_correct(&self) -> u64 {
        self.entries.values().map(|e| e.correct_count).sum()
    }

    pub fn total_wrong(&self) -> u64 {
        self.entries.values().map(|e| e.wrong_count).sum()
    }

    /// Overall `correct / (correct + wrong)` across all entries.
    pub fn accuracy(&self) -> Option<f64> {
        let correct = self.total_correct();
        match correct + self.total_wrong() {
            0 => None,
            total => Some(correct as f64 / total as f64),
        }
    }

    /// Drop every entry. Irreversible; the enabled flag is kept.
    pub fn reset(&mut self) {
        let enabled = self.enabled;
        *self = Self::new();
        self.enabled = enabled;
    }
}

impl Default for ReinforcementState {
    fn default() -> Self {
        Self::new()
    }
}

/// Entries serialize as a flat list since composite keys cannot be JSON object keys.
mod entry_list {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serializer};

    use super::{ReinforcementEntry, ReinforcementKey};

    pub fn serialize<S>(
        entries: &BTreeMap<ReinforcementKey, ReinforcementEntry>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(entries.values())
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<BTreeMap<ReinforcementKey, ReinforcementEntry>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let list = Vec::<ReinforcementEntry>::deserialize(deserializer)?;
        Ok(list.into_iter().map(|e| (e.key.clone(), e)).collect())
    }
}
