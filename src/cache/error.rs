//! Cache error taxonomy

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by cache storage.
///
/// `Read` and `Malformed` mean the persisted state could not be loaded;
/// `Write` means a flush failed and the in-memory cache is now ahead of disk.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to read cache storage {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed cache line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("failed to write cache storage {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CacheError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        CacheError::Malformed {
            line,
            reason: reason.into(),
        }
    }

    /// True for errors raised while loading (`StorageReadError`)
    #[allow(dead_code)]
    pub fn is_read_error(&self) -> bool {
        matches!(self, CacheError::Read { .. } | CacheError::Malformed { .. })
    }

    /// True for errors raised while flushing (`StorageWriteError`)
    pub fn is_write_error(&self) -> bool {
        matches!(self, CacheError::Write { .. })
    }
}
