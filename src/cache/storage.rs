//! Storage backends for the anagram cache
//!
//! The cache never touches the filesystem directly; it is handed a
//! [`Storage`] when loaded and flushes through it.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::cache::error::CacheError;

/// A medium holding the serialized cache
pub trait Storage {
    /// Read the full persisted text, or `None` if nothing was persisted yet
    fn read(&self) -> Result<Option<String>, CacheError>;

    /// Replace the persisted text in full
    fn write(&mut self, contents: &str) -> Result<(), CacheError>;

    /// Human-readable location, used in logs
    fn location(&self) -> String;
}

/// Cache file on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[allow(dead_code)]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Delete the cache file. Returns false if there was nothing to delete.
    pub fn remove(&self) -> Result<bool, CacheError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(CacheError::Write {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write_err(&self, source: io::Error) -> CacheError {
        CacheError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl Storage for FileStorage {
    fn read(&self) -> Result<Option<String>, CacheError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(CacheError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write(&mut self, contents: &str) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.write_err(e))?;
            }
        }

        let file = File::create(&self.path).map_err(|e| self.write_err(e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(contents.as_bytes())
            .map_err(|e| self.write_err(e))?;
        writer.flush().map_err(|e| self.write_err(e))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory storage for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    contents: Option<String>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            ..Self::default()
        }
    }

    /// Storage whose every write fails, as a full disk would
    #[allow(dead_code)]
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    #[allow(dead_code)]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful writes
    #[allow(dead_code)]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, CacheError> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<(), CacheError> {
        if self.fail_writes {
            return Err(CacheError::Write {
                path: PathBuf::from(self.location()),
                source: io::Error::new(io::ErrorKind::Other, "no space left on device"),
            });
        }
        self.contents = Some(contents.to_string());
        self.writes += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_storage_missing_reads_none() {
        let temp = tempdir().unwrap();
        let storage = FileStorage::new(temp.path().join("cache.txt"));
        assert!(storage.read().unwrap().is_none());
        assert!(!storage.exists());
    }

    #[test]
    fn test_file_storage_write_read() {
        let temp = tempdir().unwrap();
        let mut storage = FileStorage::new(temp.path().join("cache.txt"));
        storage.write("friend,finder\n").unwrap();

        assert_eq!(storage.read().unwrap().as_deref(), Some("friend,finder\n"));
    }

    #[test]
    fn test_file_storage_write_overwrites() {
        let temp = tempdir().unwrap();
        let mut storage = FileStorage::new(temp.path().join("cache.txt"));
        storage.write("a,b\nc,d\n").unwrap();
        storage.write("e,f\n").unwrap();

        assert_eq!(storage.read().unwrap().as_deref(), Some("e,f\n"));
    }

    #[test]
    fn test_file_storage_creates_parent_dirs() {
        let temp = tempdir().unwrap();
        let mut storage = FileStorage::new(temp.path().join("nested/dir/cache.txt"));
        storage.write("ab,ba\n").unwrap();
        assert!(storage.exists());
    }

    #[test]
    fn test_file_storage_read_directory_fails() {
        let temp = tempdir().unwrap();
        let storage = FileStorage::new(temp.path());
        let err = storage.read().unwrap_err();
        assert!(err.is_read_error());
    }

    #[test]
    fn test_file_storage_write_to_directory_fails() {
        let temp = tempdir().unwrap();
        let mut storage = FileStorage::new(temp.path());
        let err = storage.write("ab,ba\n").unwrap_err();
        assert!(err.is_write_error());
    }

    #[test]
    fn test_file_storage_remove() {
        let temp = tempdir().unwrap();
        let mut storage = FileStorage::new(temp.path().join("cache.txt"));
        assert!(!storage.remove().unwrap());

        storage.write("ab,ba\n").unwrap();
        assert!(storage.remove().unwrap());
        assert!(!storage.exists());
    }

    #[test]
    fn test_memory_storage() {
        let mut storage = MemoryStorage::new();
        assert!(storage.read().unwrap().is_none());

        storage.write("ab,ba\n").unwrap();
        assert_eq!(storage.contents(), Some("ab,ba\n"));
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn test_memory_storage_failing() {
        let mut storage = MemoryStorage::failing();
        assert!(storage.write("ab,ba\n").unwrap_err().is_write_error());
        assert!(storage.contents().is_none());
    }
}
