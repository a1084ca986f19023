//! Test fixture loader for Tidy training histories and scenarios.
//!
//! Fixtures live in this crate's `data/` directory and are shared by
//! integration tests across the workspace.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    paths.sort();
    paths
}

/// One completed move from an operation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub file_name: String,
    pub category: String,
    pub new_path: String,
    /// RFC 3339 creation time, when known.
    #[serde(default)]
    pub created: Option<String>,
}

/// A named history corpus with the predictions it is expected to support.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryFixture {
    pub description: String,
    pub rows: Vec<HistoryRow>,
    #[serde(default)]
    pub expectations: Vec<Expectation>,
}

/// Expected prediction for a file after training on the corpus.
#[derive(Debug, Clone, Deserialize)]
pub struct Expectation {
    pub file_name: String,
    pub category: String,
    /// `None` means no prediction should be made.
    pub destination: Option<String>,
    #[serde(default)]
    pub min_confidence: f64,
}

/// Load a history corpus from `history/<name>.json`.
pub fn load_history(name: &str) -> HistoryFixture {
    load_fixture(&format!("history/{name}.json"))
}
