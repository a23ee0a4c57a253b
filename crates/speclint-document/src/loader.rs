//! Tolerant file access for blueprint documents
//!
//! Reads never fail: a missing or undecodable file yields an empty
//! string, and invalid UTF-8 is replaced rather than raised. The check
//! layer turns emptiness into gaps; this layer only observes.

use std::fs;
use std::path::{Path, PathBuf};

/// Read a document and return its text.
///
/// Returns `""` when the file does not exist or cannot be read. Bytes
/// that are not valid UTF-8 are replaced with U+FFFD.
#[must_use]
pub fn read_text(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => String::new(),
    }
}

/// List files in a directory whose names end with `suffix`, sorted by name.
///
/// Returns an empty list when the directory does not exist.
#[must_use]
pub fn list_files(directory: &Path, suffix: &str) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(directory) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(suffix))
        })
        .collect();
    files.sort();
    files
}

/// File stem with a trailing `.feature` label stripped.
///
/// `checkout.feature.md` has stem `checkout.feature`; the feature label
/// is part of the naming convention, not the name, so it is removed.
#[must_use]
pub fn stem_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    stem.strip_suffix(".feature").unwrap_or(stem).to_string()
}
