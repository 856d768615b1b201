//! Check flow - Decide whether two inputs are anagrams
//!
//! Steps:
//! 1. Reject inputs containing whitespace or digits
//! 2. Normalize both inputs
//! 3. Answer from the cache when the pair is already known
//! 4. Otherwise compare, and record a positive match in the cache

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::{debug, warn};

use crate::cache::classes::MergeOutcome;
use crate::cache::error::CacheError;
use crate::cache::storage::{FileStorage, MemoryStorage, Storage};
use crate::cache::store::CacheStore;
use crate::core::compare::are_anagrams;
use crate::core::model::{ResultItem, ResultSet, Verdict};
use crate::core::normalize::{normalize, NormalizedString};
use crate::core::render::{RenderConfig, Renderer};

/// Inputs must not contain whitespace or digits
static REJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s|\d").expect("Invalid REJECT_RE regex"));

/// Outcome of a single check
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub verdict: Verdict,
    pub first: NormalizedString,
    pub second: NormalizedString,
    /// Set when the pair was merged into the cache
    pub merge: Option<MergeOutcome>,
}

/// Return one rejection message per invalid input
pub fn validate_inputs(inputs: &[&str]) -> Vec<String> {
    inputs
        .iter()
        .filter(|input| REJECT_RE.is_match(input))
        .map(|input| {
            format!(
                "Input \"{}\" rejected. Reason: Contained whitespaces or numbers.",
                input
            )
        })
        .collect()
}

/// Check a pair against the cache, comparing and recording on a miss
pub fn check_pair<S: Storage>(
    store: &mut CacheStore<S>,
    first: &str,
    second: &str,
) -> Result<CheckReport, CacheError> {
    let a = normalize(first);
    let b = normalize(second);

    if store.contains(&a, &b) {
        debug!(a = %a, b = %b, "Cache hit");
        return Ok(CheckReport {
            verdict: Verdict::CacheHit,
            first: a,
            second: b,
            merge: None,
        });
    }

    if !are_anagrams(&a, &b) {
        debug!(a = %a, b = %b, "Not anagrams");
        return Ok(CheckReport {
            verdict: Verdict::NotAnagram,
            first: a,
            second: b,
            merge: None,
        });
    }

    let merge = store.record(&a, &b)?;
    Ok(CheckReport {
        verdict: Verdict::Anagram,
        first: a,
        second: b,
        merge: Some(merge),
    })
}

/// Run the check command
///
/// With `dry_run`, the cache file is read into memory and never written.
pub fn run_check(
    cache_path: &Path,
    first: &str,
    second: &str,
    dry_run: bool,
    config: RenderConfig,
) -> Result<()> {
    let rejected = validate_inputs(&[first, second]);
    if !rejected.is_empty() {
        bail!(rejected.join("\n"));
    }

    let storage = FileStorage::new(cache_path);
    let report = if dry_run {
        let seeded = match storage
            .read()
            .with_context(|| format!("Failed to load cache: {}", cache_path.display()))?
        {
            Some(text) => MemoryStorage::with_contents(text),
            None => MemoryStorage::new(),
        };
        check_with(seeded, cache_path, first, second)?
    } else {
        check_with(storage, cache_path, first, second)?
    };

    debug!(verdict = ?report.verdict, merge = ?report.merge, dry_run, "Check finished");

    let mut result_set = ResultSet::new();
    result_set.push(ResultItem::check(
        report.verdict,
        [first, second],
        [&report.first, &report.second],
    ));

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}

fn check_with<S: Storage>(
    storage: S,
    cache_path: &Path,
    first: &str,
    second: &str,
) -> Result<CheckReport> {
    let mut store = CacheStore::load(storage)
        .with_context(|| format!("Failed to load cache: {}", cache_path.display()))?;

    check_pair(&mut store, first, second)
        .inspect_err(|e| {
            if e.is_write_error() {
                warn!("Merge applied in memory only; cache file is stale");
            }
        })
        .with_context(|| format!("Failed to update cache: {}", cache_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_inputs_accepts_words() {
        assert!(validate_inputs(&["friend", "FINDER", "it's"]).is_empty());
    }

    #[test]
    fn test_validate_inputs_rejects_whitespace_and_digits() {
        let rejected = validate_inputs(&["two words", "ok", "abc1"]);
        assert_eq!(rejected.len(), 2);
        assert!(rejected[0].contains("\"two words\""));
        assert!(rejected[1].contains("\"abc1\""));
    }

    #[test]
    fn test_fresh_match_is_recorded() {
        let mut store = CacheStore::load(MemoryStorage::new()).unwrap();
        let report = check_pair(&mut store, "FRIEND", "FINDER").unwrap();

        assert_eq!(report.verdict, Verdict::Anagram);
        assert_eq!(report.first.as_str(), "friend");
        assert_eq!(report.second.as_str(), "finder");
        assert_eq!(report.merge, Some(MergeOutcome::Created));

        let contents = store.storage().contents().unwrap();
        assert!(contents == "friend,finder\n" || contents == "finder,friend\n");
    }

    #[test]
    fn test_second_check_hits_cache() {
        let mut store = CacheStore::load(MemoryStorage::new()).unwrap();
        check_pair(&mut store, "friend", "finder").unwrap();

        let report = check_pair(&mut store, "finder", "Friend").unwrap();
        assert_eq!(report.verdict, Verdict::CacheHit);
        assert!(report.merge.is_none());
        assert_eq!(store.storage().writes(), 1);
    }

    #[test]
    fn test_non_anagram_leaves_cache_untouched() {
        let mut store = CacheStore::load(MemoryStorage::new()).unwrap();
        let report = check_pair(&mut store, "are", "friend").unwrap();

        assert_eq!(report.verdict, Verdict::NotAnagram);
        assert!(store.cache().is_empty());
        assert!(store.storage().contents().is_none());
    }

    #[test]
    fn test_bridging_pair_unites_classes() {
        let text = "listen,silent\nenlist,tinsel\n";
        let mut store = CacheStore::load(MemoryStorage::with_contents(text)).unwrap();

        let report = check_pair(&mut store, "silent", "tinsel").unwrap();
        assert_eq!(report.merge, Some(MergeOutcome::United));
        assert_eq!(
            store.storage().contents(),
            Some("listen,silent,enlist,tinsel\n")
        );
    }

    #[test]
    fn test_write_failure_is_surfaced() {
        let mut store = CacheStore::load(MemoryStorage::failing()).unwrap();
        let err = check_pair(&mut store, "friend", "finder").unwrap_err();
        assert!(err.is_write_error());
    }

    #[test]
    fn test_empty_inputs_are_not_cached() {
        let mut store = CacheStore::load(MemoryStorage::new()).unwrap();
        let report = check_pair(&mut store, "!!", "??").unwrap();

        assert_eq!(report.verdict, Verdict::Anagram);
        assert_eq!(report.merge, Some(MergeOutcome::Skipped));
        assert!(store.storage().contents().is_none());
    }

    #[test]
    fn test_run_check_writes_cache_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("AnagramCachedSets.txt");

        run_check(&path, "FRIEND", "FINDER", false, RenderConfig::default()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("friend") && contents.contains("finder"));
    }

    #[test]
    fn test_run_check_dry_run_leaves_file_alone() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("AnagramCachedSets.txt");
        std::fs::write(&path, "listen,silent\n").unwrap();

        run_check(&path, "friend", "finder", true, RenderConfig::default()).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "listen,silent\n");
    }

    #[test]
    fn test_run_check_corrupt_cache_fails() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("AnagramCachedSets.txt");
        std::fs::write(&path, "listen,,silent\n").unwrap();

        let err = run_check(&path, "friend", "finder", false, RenderConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to load cache"));
    }

    #[test]
    fn test_run_check_rejects_invalid_input() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("AnagramCachedSets.txt");

        let err = run_check(&path, "abc 1", "cba", false, RenderConfig::default()).unwrap_err();
        assert!(err.to_string().contains("rejected"));
        assert!(!path.exists());
    }
}
