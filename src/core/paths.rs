//! Path utilities
//!
//! Resolves where the cache file lives and normalizes paths for output.

use std::path::{Path, PathBuf};

/// Default cache file name, created under the root directory
pub const CACHE_FILE: &str = "AnagramCachedSets.txt";

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Get the default cache file for a given root
pub fn cache_path(root: &Path) -> PathBuf {
    root.join(CACHE_FILE)
}

/// Pick the cache file: an explicit path wins, otherwise the root default
pub fn resolve_cache_path(root: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => cache_path(root),
    }
}
