//! Directory listing and root resolution used by the walker.
//!
//! Both helpers swallow filesystem errors and return `None`: a directory that
//! cannot be listed contributes nothing to the output.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::config::WalkerConfig;

/// Resolve the walk root against the current directory. Symlinks are left
/// alone; only the path text is made absolute.
pub fn absolute_root(path: &Path) -> Option<PathBuf> {
    match std::path::absolute(path) {
        Ok(p) => Some(p),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "cannot resolve walk root");
            None
        }
    }
}

/// List the immediate children of `dir`. Entries that fail mid-iteration are
/// dropped; a failure to open the directory yields `None`.
pub fn read_entries(dir: &Path, config: &WalkerConfig) -> Option<Vec<PathBuf>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            debug!(path = %dir.display(), error = %e, "skipping unreadable directory");
            return None;
        }
    };

    let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
    if config.sort {
        entries.sort_by_key(|a| a.file_name());
    }

    Some(entries.into_iter().map(|entry| entry.path()).collect())
}
