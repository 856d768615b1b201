//! Input normalization
//!
//! Reduces raw input to lowercase ASCII letters so that comparison and
//! caching operate on a single canonical spelling.

use std::fmt;

/// A string made only of lowercase ASCII letters.
///
/// The only ways to obtain one are [`normalize`], which always succeeds, and
/// [`NormalizedString::parse`], which accepts text that is already in
/// canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NormalizedString(String);

impl NormalizedString {
    /// Accept `s` only if it is already normalized.
    ///
    /// Used when reading persisted cache lines, where anything other than
    /// lowercase ASCII letters means the file is corrupt.
    pub fn parse(s: &str) -> Option<Self> {
        if s.bytes().all(|b| b.is_ascii_lowercase()) {
            Some(Self(s.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sorted letters. Two strings are anagrams iff their signatures match.
    pub fn signature(&self) -> Vec<u8> {
        let mut letters = self.0.as_bytes().to_vec();
        letters.sort_unstable();
        letters
    }
}

impl fmt::Display for NormalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strip everything outside `[A-Za-z]` and lowercase the rest
pub fn normalize(s: &str) -> NormalizedString {
    NormalizedString(
        s.chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .collect(),
    )
}
