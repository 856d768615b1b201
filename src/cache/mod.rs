//! Cache module - Persistent partition of strings into anagram classes
//!
//! Provides:
//! - Disjoint-set equivalence classes (classes.rs)
//! - Pluggable storage backends (storage.rs)
//! - Line-oriented persistence and the load/merge/persist cycle (store.rs)
//! - Storage error taxonomy (error.rs)

pub mod classes;
pub mod error;
pub mod storage;
pub mod store;
