//! Helpers for callers that start from raw file names and paths.

use std::path::Path;

use chrono::{DateTime, Datelike, Utc};

use crate::constants::UNKNOWN;

/// Lower-cased extension with its leading dot, or `None` when the name has none.
///
/// `report.PDF` → `.pdf`, `archive.tar.gz` → `.gz`, `Makefile` → `None`.
pub fn extension_of(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}

/// First meaningful token of the file stem, lower-cased.
///
/// `report_2024_Q1.pdf` → `report`, `IMG-1234.jpg` → `img`. Falls back to `unknown`.
pub fn name_prefix_of(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    stem.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .find(|part| !part.is_empty())
        .map(str::to_lowercase)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Year bucket for a timestamp.
pub fn temporal_bucket_of(ts: &DateTime<Utc>) -> String {
    ts.year().to_string()
}

/// Destination category implied by where a file ended up.
///
/// Uses the component right after an `organized` directory, else the parent
/// directory name, else `unknown`.
pub fn destination_from_path(path: &str) -> String {
    let path = Path::new(path);
    let parts: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if let Some(idx) = parts.iter().position(|p| p == "organized") {
        // The last component is the file itself, never a destination.
        if idx + 2 < parts.len() {
            return parts[idx + 1].clone();
        }
    }

    path.parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| UNKNOWN.to_string())
}
