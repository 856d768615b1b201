//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Input normalization (NormalizedString)
//! - Anagram comparison
//! - Unified result model (ResultItem)
//! - Rendering functions for different output formats
//! - Cache path resolution
//! - Logging setup

pub mod compare;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod paths;
pub mod render;
