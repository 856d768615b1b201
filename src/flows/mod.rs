//! Flows module - Multi-step operations combining normalization, comparison and the cache
//!
//! Provides:
//! - check: Answer whether two inputs are anagrams, consulting and updating the cache

pub mod check;
