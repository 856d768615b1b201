//! Unified Result Model
//!
//! Every command maps its outcome to this model before rendering output.

use serde::Serialize;

use crate::core::normalize::NormalizedString;

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Check,
    Class,
    Clear,
}

/// Outcome of checking one pair of inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The pair was already recorded in the cache
    CacheHit,
    /// The pair was compared and found to be anagrams
    Anagram,
    /// The pair was compared and is not an anagram
    NotAnagram,
}

impl Verdict {
    /// Console message for this verdict
    pub fn message(self) -> &'static str {
        match self {
            Verdict::CacheHit => "Cache Lookup: The inputted values are anagrams.",
            Verdict::Anagram => "Result: The inputted values are anagrams",
            Verdict::NotAnagram => "Result: The inputted values are not anagrams",
        }
    }
}

/// The unified result item that all commands produce
#[derive(Debug, Clone, Serialize)]
pub struct ResultItem {
    /// The kind of this result
    pub kind: Kind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,

    /// Raw inputs as supplied
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<String>,

    /// Normalized inputs, or the members of a class
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,

    /// Cache file path using '/' as separator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    pub message: String,
}

impl ResultItem {
    /// Result of checking a pair
    pub fn check(
        verdict: Verdict,
        inputs: [&str; 2],
        normalized: [&NormalizedString; 2],
    ) -> Self {
        Self {
            kind: Kind::Check,
            verdict: Some(verdict),
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            members: normalized.iter().map(|s| s.to_string()).collect(),
            path: None,
            message: verdict.message().to_string(),
        }
    }

    /// One cached equivalence class
    pub fn class(members: Vec<&NormalizedString>) -> Self {
        let members: Vec<String> = members.into_iter().map(|m| m.to_string()).collect();
        Self {
            kind: Kind::Class,
            verdict: None,
            inputs: Vec::new(),
            message: members.join(","),
            members,
            path: None,
        }
    }

    /// Cache file removal
    pub fn cleared(path: impl Into<String>, removed: bool) -> Self {
        let path = path.into();
        let message = if removed {
            format!("Removed cache {}", path)
        } else {
            format!("No cache at {}", path)
        };
        Self {
            kind: Kind::Clear,
            verdict: None,
            inputs: Vec::new(),
            members: Vec::new(),
            path: Some(path),
            message,
        }
    }
}

/// A collection of result items
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalize::normalize;

    #[test]
    fn test_verdict_messages() {
        assert_eq!(
            Verdict::CacheHit.message(),
            "Cache Lookup: The inputted values are anagrams."
        );
        assert_eq!(
            Verdict::Anagram.message(),
            "Result: The inputted values are anagrams"
        );
        assert_eq!(
            Verdict::NotAnagram.message(),
            "Result: The inputted values are not anagrams"
        );
    }

    #[test]
    fn test_check_item_serialization() {
        let a = normalize("FRIEND");
        let b = normalize("FINDER");
        let item = ResultItem::check(Verdict::Anagram, ["FRIEND", "FINDER"], [&a, &b]);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "check");
        assert_eq!(json["verdict"], "anagram");
        assert_eq!(json["members"][0], "friend");
        assert_eq!(json["inputs"][1], "FINDER");
        assert!(json.get("path").is_none());
    }

    #[test]
    fn test_class_item() {
        let a = normalize("listen");
        let b = normalize("silent");
        let item = ResultItem::class(vec![&a, &b]);

        assert_eq!(item.kind, Kind::Class);
        assert_eq!(item.message, "listen,silent");
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("verdict").is_none());
        assert!(json.get("inputs").is_none());
    }

    #[test]
    fn test_cleared_item() {
        let item = ResultItem::cleared("/tmp/cache.txt", false);
        assert_eq!(item.path.as_deref(), Some("/tmp/cache.txt"));
        assert!(item.message.starts_with("No cache"));
    }

    #[test]
    fn test_result_set() {
        let mut set = ResultSet::new();
        assert!(set.is_empty());
        set.push(ResultItem::cleared("x", true));
        assert_eq!(set.items.len(), 1);
    }
}
