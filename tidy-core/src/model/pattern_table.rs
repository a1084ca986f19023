use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Destination → running weighted count for one feature value.
pub type DestinationCounts = BTreeMap<String, f64>;

/// Two-level frequency table: feature value → destination → count.
///
/// Counts are non-negative. A value that was never recorded has no row and
/// therefore no opinion. Rows are created only through [`PatternTable::row_mut`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternTable {
    rows: BTreeMap<String, DestinationCounts>,
}

impl PatternTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get-or-insert-default accessor for a feature value's row.
    pub fn row_mut(&mut self, value: &str) -> &mut DestinationCounts {
        self.rows.entry(value.to_string()).or_default()
    }

    /// Add `amount` to `value → destination`, creating the cell when missing.
    pub fn increment(&mut self, value: &str, destination: &str, amount: f64) {
        *self
            .row_mut(value)
            .entry(destination.to_string())
            .or_insert(0.0) += amount.max(0.0);
    }

    pub fn row(&self, value: &str) -> Option<&DestinationCounts> {
        self.rows.get(value)
    }

    /// Multiply every cell by `factor`. Cells are never removed here.
    pub fn scale(&mut self, factor: f64) {
        for count in self.rows.values_mut().flat_map(|row| row.values_mut()) {
            *count *= factor;
        }
    }

    /// Total evidence recorded for one feature value.
    pub fn value_total(&self, value: &str) -> f64 {
        self.rows.get(value).map(|row| row.values().sum()).unwrap_or(0.0)
    }

    /// Total evidence for one destination across every feature value.
    pub fn destination_total(&self, destination: &str) -> f64 {
        self.rows
            .values()
            .filter_map(|row| row.get(destination))
            .sum()
    }

    /// Drop a feature value entirely. Returns true if it existed.
    pub fn remove(&mut self, value: &str) -> bool {
        self.rows.remove(value).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DestinationCounts)> {
        self.rows.iter()
    }

    /// Number of distinct feature values.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_mut_inserts_empty_row_once() {
        let mut table = PatternTable::new();
        assert!(table.row_mut("documents").is_empty());
        table.row_mut("documents").insert("Work".into(), 1.0);
        assert_eq!(table.len(), 1);
        assert_eq!(table.value_total("documents"), 1.0);
    }

    #[test]
    fn increment_never_goes_negative() {
        let mut table = PatternTable::new();
        table.increment(".pdf", "Documents", -5.0);
        assert_eq!(table.value_total(".pdf"), 0.0);
    }

    #[test]
    fn destination_total_spans_values() {
        let mut table = PatternTable::new();
        table.increment(".pdf", "Documents", 2.0);
        table.increment(".docx", "Documents", 1.0);
        table.increment(".docx", "Work", 4.0);
        assert_eq!(table.destination_total("Documents"), 3.0);
        assert_eq!(table.destination_total("Missing"), 0.0);
    }
}
