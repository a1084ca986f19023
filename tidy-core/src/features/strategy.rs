use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// An independent feature extractor paired with its own pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Category,
    Extension,
    NamePrefix,
    Temporal,
}

impl Strategy {
    /// All strategies in their canonical order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Category,
        Strategy::Extension,
        Strategy::NamePrefix,
        Strategy::Temporal,
    ];

    /// Stable name used in configs, snapshots, and reason trails.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Category => "category",
            Strategy::Extension => "extension",
            Strategy::NamePrefix => "name_prefix",
            Strategy::Temporal => "temporal",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(Strategy::Category),
            "extension" => Ok(Strategy::Extension),
            "name_prefix" | "name-prefix" => Ok(Strategy::NamePrefix),
            "temporal" | "temporal_bucket" | "temporal-bucket" => Ok(Strategy::Temporal),
            other => Err(ConfigError::UnknownStrategy {
                name: other.to_string(),
            }),
        }
    }
}
