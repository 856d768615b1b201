//! Anagram comparison

use crate::core::normalize::NormalizedString;

/// Check whether `a` and `b` hold the same multiset of letters
pub fn are_anagrams(a: &NormalizedString, b: &NormalizedString) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.signature() == b.signature()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalize::normalize;

    fn check(a: &str, b: &str) -> bool {
        are_anagrams(&normalize(a), &normalize(b))
    }

    #[test]
    fn test_basic_anagram() {
        assert!(check("friend", "finder"));
        assert!(check("listen", "silent"));
    }

    #[test]
    fn test_non_anagram() {
        assert!(!check("are", "friend"));
        assert!(!check("abc", "abd"));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(!check("ab", "abc"));
    }

    #[test]
    fn test_repeated_letters_must_match_counts() {
        assert!(!check("aab", "abb"));
        assert!(check("aabb", "baba"));
    }

    #[test]
    fn test_case_and_punctuation_ignored() {
        assert!(check("FRIEND", "finder"));
        assert!(check("Dormitory", "dirty room!"));
    }

    #[test]
    fn test_identical_and_empty() {
        assert!(check("abc", "abc"));
        assert!(check("", ""));
        assert!(check("123", "!!"));
    }
}
