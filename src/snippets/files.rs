//! Locating snippet files on disk
//!
//! Discovery is glob based: for a filetype `ft` and a snippet directory,
//! the candidate files are `ft.snippets`, `ft_*.snippets` and anything
//! under a `ft/` subdirectory.

use glob::glob;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve symlinks and relative components. Falls back to the input when
/// the path cannot be resolved (e.g. it no longer exists).
pub fn normalize_file_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Returns all matching snippet files for `ft` in `directory`.
///
/// The directory is tilde-expanded first. Unreadable entries and patterns
/// that fail to compile (a filetype containing glob metacharacters) are
/// skipped rather than reported.
pub fn find_snippet_files(ft: &str, directory: &str) -> BTreeSet<PathBuf> {
    let directory = shellexpand::tilde(directory).into_owned();
    let directory = Path::new(&directory);
    let patterns = [
        format!("{ft}.snippets"),
        format!("{ft}_*.snippets"),
        format!("{ft}/*"),
    ];

    let mut found = BTreeSet::new();
    for pattern in &patterns {
        let Some(full_pattern) = directory.join(pattern).to_str().map(String::from) else {
            continue;
        };
        if let Ok(paths) = glob(&full_pattern) {
            for path in paths.flatten() {
                found.insert(normalize_file_path(&path));
            }
        }
    }
    found
}
