use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A snapshot of one feature value's destination counts.
///
/// Empty when the value was never seen; that is a normal outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution {
    counts: BTreeMap<String, f64>,
}

impl Distribution {
    pub fn new(counts: BTreeMap<String, f64>) -> Self {
        Self { counts }
    }

    pub fn get(&self, destination: &str) -> f64 {
        self.counts.get(destination).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Largest count present (0.0 when empty).
    pub fn max_count(&self) -> f64 {
        self.counts.values().copied().fold(0.0, f64::max)
    }

    /// Destinations sharing the largest count, in lexicographic order.
    pub fn leaders(&self) -> Vec<&str> {
        let max = self.max_count();
        if max <= 0.0 {
            return Vec::new();
        }
        self.counts
            .iter()
            .filter(|(_, count)| **count == max)
            .map(|(dest, _)| dest.as_str())
            .collect()
    }

    /// Up to `n` destinations ordered by count descending, then name.
    pub fn top(&self, n: usize) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> =
            self.counts.iter().map(|(d, c)| (d.as_str(), *c)).collect();
        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        entries.truncate(n);
        entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.counts.iter().map(|(d, c)| (d.as_str(), *c))
    }
}
