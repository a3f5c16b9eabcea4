//! Storage backends.
//!
//! A backend is a plain string key-value medium; all JSON handling and
//! decode recovery lives in [`crate::Store`]. The file backend keeps
//! the whole table in one JSON document and rewrites it on every set,
//! which is fine at the data sizes involved (a handful of small lists).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::StoreError;

/// A string key-value medium the client can persist to.
pub trait StorageBackend: Send + Sync {
    /// Read the raw value at `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Write the raw value at `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the entry at `key`. Absent keys are a no-op.
    fn remove(&self, key: &str);
}

/// Volatile backend for tests and previews.
#[derive(Default)]
pub struct MemoryBackend {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries, for test assertions.
    pub fn entries(&self) -> BTreeMap<String, String> {
        self.entries.read().clone()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

/// Backend persisting the key table to a single JSON file.
pub struct FileBackend {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileBackend {
    /// Open the backend at `path`, loading any existing table.
    ///
    /// A corrupt table file is discarded and replaced on the next
    /// write; stored preference data is recoverable by the user, a
    /// startup crash is not.
    pub fn open(path: impl AsRef<Path>) -> Result<Arc<Self>, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "discarding corrupt storage file");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Arc::new(Self {
            path,
            entries: RwLock::new(entries),
        }))
    }

    fn flush(&self, key: &str) -> Result<(), StoreError> {
        let raw = {
            let entries = self.entries.read();
            serde_json::to_string_pretty(&*entries).map_err(|source| StoreError::Encode {
                key: key.to_string(),
                source,
            })?
        };
        fs::write(&self.path, raw).map_err(|source| StoreError::Write {
            key: key.to_string(),
            source,
        })
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.write().insert(key.to_string(), value.to_string());
        self.flush(key)
    }

    fn remove(&self, key: &str) {
        let removed = self.entries.write().remove(key).is_some();
        if removed {
            if let Err(err) = self.flush(key) {
                tracing::warn!(key, error = %err, "failed to persist key removal");
            }
        }
    }
}
