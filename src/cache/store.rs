//! Cache store - Load, query, merge and persist the anagram cache
//!
//! On-disk format: one equivalence class per line, members comma-separated.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::cache::classes::{EquivalenceCache, MergeOutcome};
use crate::cache::error::CacheError;
use crate::cache::storage::{FileStorage, Storage};
use crate::core::compare::are_anagrams;
use crate::core::model::{ResultItem, ResultSet};
use crate::core::normalize::{normalize, NormalizedString};
use crate::core::paths::normalize_path;
use crate::core::render::{OutputFormat, RenderConfig, Renderer};

/// Member separator within a line
pub const SEPARATOR: &str = ",";

/// An [`EquivalenceCache`] bound to the storage it was loaded from
#[derive(Debug)]
pub struct CacheStore<S: Storage> {
    storage: S,
    cache: EquivalenceCache,
}

impl<S: Storage> CacheStore<S> {
    /// Load the cache from `storage`. Missing storage yields an empty cache.
    pub fn load(storage: S) -> Result<Self, CacheError> {
        let cache = match storage.read()? {
            Some(text) => parse_cache(&text)?,
            None => {
                debug!(location = %storage.location(), "No cache found, starting empty");
                EquivalenceCache::new()
            }
        };

        debug!(
            location = %storage.location(),
            classes = cache.len(),
            members = cache.member_count(),
            "Loaded cache"
        );

        Ok(Self { storage, cache })
    }

    pub fn cache(&self) -> &EquivalenceCache {
        &self.cache
    }

    #[allow(dead_code)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn contains(&self, a: &NormalizedString, b: &NormalizedString) -> bool {
        self.cache.contains(a, b)
    }

    /// Merge in memory only; see [`CacheStore::record`] to also flush
    pub fn merge(&mut self, a: &NormalizedString, b: &NormalizedString) -> MergeOutcome {
        self.cache.merge(a, b)
    }

    /// Overwrite storage with the current cache
    pub fn persist(&mut self) -> Result<(), CacheError> {
        let text = serialize_cache(&self.cache);
        self.storage.write(&text)?;
        debug!(location = %self.storage.location(), classes = self.cache.len(), "Persisted cache");
        Ok(())
    }

    /// Merge a confirmed anagram pair and flush if anything changed.
    ///
    /// A failed flush leaves the merge applied in memory.
    pub fn record(
        &mut self,
        a: &NormalizedString,
        b: &NormalizedString,
    ) -> Result<MergeOutcome, CacheError> {
        let outcome = self.merge(a, b);
        if outcome.changed() {
            info!(a = %a, b = %b, ?outcome, "Cached new anagram pair");
            self.persist()?;
        }
        Ok(outcome)
    }
}

/// Parse the persisted text format
pub fn parse_cache(text: &str) -> Result<EquivalenceCache, CacheError> {
    let mut cache = EquivalenceCache::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let members = parse_line(line, line_no)?;
        if cache.insert_class(&members) {
            warn!(line = line_no, "Cache line overlaps an earlier class; merging them");
        }
    }

    Ok(cache)
}

fn parse_line(line: &str, line_no: usize) -> Result<Vec<NormalizedString>, CacheError> {
    let mut members: Vec<NormalizedString> = Vec::new();

    for raw in line.split(SEPARATOR) {
        if raw.is_empty() {
            return Err(CacheError::malformed(line_no, "empty member"));
        }
        let member = NormalizedString::parse(raw).ok_or_else(|| {
            CacheError::malformed(line_no, format!("{:?} is not lowercase letters", raw))
        })?;
        if let Some(first) = members.first() {
            if !are_anagrams(first, &member) {
                return Err(CacheError::malformed(
                    line_no,
                    format!("{} is not an anagram of {}", member, first),
                ));
            }
        }
        members.push(member);
    }

    Ok(members)
}

/// Serialize the cache, one class per line
pub fn serialize_cache(cache: &EquivalenceCache) -> String {
    let mut out = String::new();
    for class in cache.classes() {
        let line = class
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// List cached classes, optionally only the one containing `word`
pub fn run_classes(cache_path: &Path, word: Option<&str>, config: RenderConfig) -> Result<()> {
    let store = CacheStore::load(FileStorage::new(cache_path))
        .with_context(|| format!("Failed to load cache: {}", cache_path.display()))?;

    let mut result_set = ResultSet::new();
    match word {
        Some(word) => {
            if let Some(class) = store.cache().class_of(&normalize(word)) {
                result_set.push(ResultItem::class(class));
            }
        }
        None => {
            for class in store.cache().classes() {
                result_set.push(ResultItem::class(class));
            }
        }
    }

    if result_set.is_empty() && config.format == OutputFormat::Text {
        return Ok(());
    }

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}

/// Delete the cache file
pub fn run_clear(cache_path: &Path, config: RenderConfig) -> Result<()> {
    let storage = FileStorage::new(cache_path);
    let removed = storage
        .remove()
        .with_context(|| format!("Failed to remove cache: {}", cache_path.display()))?;
    debug!(location = %storage.location(), removed, "Cleared cache");

    let mut result_set = ResultSet::new();
    result_set.push(ResultItem::cleared(normalize_path(storage.path()), removed));

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}
