use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::Todo;

/// Error type for persistence operations
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Durable save/restore of the todo list, decoupled from the storage medium
/// so the backend can vary without touching the UI layer.
pub trait StoreBackend {
    /// Restore the persisted list, in persisted order.
    fn load(&self) -> Result<Vec<Todo>, PersistError>;
    /// Overwrite the persisted list with `todos`.
    fn save(&self, todos: &[Todo]) -> Result<(), PersistError>;
}

/// The shipped backend: one JSON array in a flat file.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: PathBuf) -> Self {
        JsonFileBackend { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw content of the data file, for recovery-log capture after a parse
    /// failure. Best-effort.
    pub fn raw_content(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }
}

impl StoreBackend for JsonFileBackend {
    fn load(&self) -> Result<Vec<Todo>, PersistError> {
        if !self.path.exists() {
            // First run: create an empty file and start with an empty list.
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent).map_err(|e| PersistError::Write {
                    path: self.path.clone(),
                    source: e,
                })?;
            }
            fs::File::create(&self.path).map_err(|e| PersistError::Write {
                path: self.path.clone(),
                source: e,
            })?;
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| PersistError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|e| PersistError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    fn save(&self, todos: &[Todo]) -> Result<(), PersistError> {
        let content = serde_json::to_string_pretty(todos).map_err(|e| PersistError::Parse {
            path: self.path.clone(),
            source: e,
        })?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PersistError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }
        atomic_write(&self.path, content.as_bytes()).map_err(|e| PersistError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Write `content` to `path` atomically using a temp file + rename, so an
/// interrupted save leaves the previous file intact.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
