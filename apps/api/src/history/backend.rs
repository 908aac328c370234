//! Durable storage for the history list.
//!
//! A backend holds exactly one value: the full serialized list. It is read
//! once at startup and rewritten in full on every mutation. Swapping the
//! persistence technology means implementing `HistoryBackend` and nothing else.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
#[cfg(test)]
use std::sync::Mutex;

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::models::history::HistoryEntry;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read/replace unit for the persisted history list.
pub trait HistoryBackend: Send + Sync {
    /// Returns the stored list, or an empty list when nothing has been stored yet.
    fn load(&self) -> Result<Vec<HistoryEntry>, StorageError>;

    /// Replaces the stored list with `entries`.
    fn store(&self, entries: &[HistoryEntry]) -> Result<(), StorageError>;
}

// ────────────────────────────────────────────────────────────────────────────
// JSON file
// ────────────────────────────────────────────────────────────────────────────

/// Keeps the list as a pretty-printed JSON array in a single file.
///
/// Writes go to a temp file in the same directory which is then renamed over
/// the target, so readers never observe a half-written list. Two processes
/// sharing one file still race: last writer wins.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl HistoryBackend for JsonFileBackend {
    fn load(&self) -> Result<Vec<HistoryEntry>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn store(&self, entries: &[HistoryEntry]) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| self.io_error(e))?;

        let json = serde_json::to_vec_pretty(entries)?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(&json).map_err(|e| self.io_error(e))?;
        tmp.as_file().sync_all().map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

/// Backend that only lives as long as the process.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<Vec<HistoryEntry>>,
}

#[cfg(test)]
impl HistoryBackend for MemoryBackend {
    fn load(&self) -> Result<Vec<HistoryEntry>, StorageError> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn store(&self, entries: &[HistoryEntry]) -> Result<(), StorageError> {
        *self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = entries.to_vec();
        Ok(())
    }
}
