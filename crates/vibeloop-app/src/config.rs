//! Application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the client persists its collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum StorageChoice {
    /// Volatile storage; every start is a fresh install.
    #[default]
    Memory,
    /// Single JSON table file on disk.
    File(PathBuf),
}

/// Configuration handed to [`crate::AppCore::new`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageChoice,
}

impl AppConfig {
    pub fn in_memory() -> Self {
        Self {
            storage: StorageChoice::Memory,
        }
    }

    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            storage: StorageChoice::File(path.into()),
        }
    }
}
