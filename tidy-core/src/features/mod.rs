//! Feature sets supplied by callers and the strategies that read them.

pub mod extract;
mod strategy;

pub use strategy::Strategy;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The features a caller extracted for one file.
///
/// Every field is optional; a strategy whose feature is absent (or empty)
/// neither learns from nor votes on this file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSet {
    /// Broad file category, e.g. `documents`.
    pub category: Option<String>,
    /// Lower-cased extension with its leading dot, e.g. `.pdf`.
    pub extension: Option<String>,
    /// First token of the file stem, e.g. `invoice`.
    pub name_prefix: Option<String>,
    /// Coarse time bucket, e.g. the year `2025`.
    pub temporal_bucket: Option<String>,
}

impl FeatureSet {
    /// Build a feature set from a raw file name, its category, and an optional timestamp.
    pub fn from_file(file_name: &str, category: &str, created: Option<DateTime<Utc>>) -> Self {
        Self {
            category: Some(category.to_string()).filter(|c| !c.is_empty()),
            extension: extract::extension_of(file_name),
            name_prefix: Some(extract::name_prefix_of(file_name)),
            temporal_bucket: created.map(|ts| extract::temporal_bucket_of(&ts)),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = Some(prefix.into());
        self
    }

    pub fn with_temporal_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.temporal_bucket = Some(bucket.into());
        self
    }

    /// The value `strategy` extracts from this set, or `None` if undefined.
    pub fn value_for(&self, strategy: Strategy) -> Option<&str> {
        let value = match strategy {
            Strategy::Category => self.category.as_deref(),
            Strategy::Extension => self.extension.as_deref(),
            Strategy::NamePrefix => self.name_prefix.as_deref(),
            Strategy::Temporal => self.temporal_bucket.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }

    /// `(strategy, value)` pairs for every defined feature, in strategy order.
    pub fn defined(&self) -> impl Iterator<Item = (Strategy, &str)> + '_ {
        Strategy::ALL
            .into_iter()
            .filter_map(move |s| self.value_for(s).map(|v| (s, v)))
    }

    /// True when no strategy can read anything from this set.
    pub fn is_empty(&self) -> bool {
        self.defined().next().is_none()
    }
}
