//! Configuration persistence.

use std::path::{Path, PathBuf};

use crate::domain::Configuration;

/// Errors from reading or writing the stored configuration.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("error reading configuration file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error writing configuration file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error parsing configuration: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("error serializing configuration: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Where the admin server keeps the sign configuration.
pub trait ConfigStore: Send + Sync {
    fn get(&self) -> Result<Configuration, StoreError>;
    fn put(&self, config: &Configuration) -> Result<(), StoreError>;
}

/// Stores the configuration as a JSON file.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    fn get(&self) -> Result<Configuration, StoreError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(StoreError::Parse)
    }

    /// Creates parent directories if they don't exist.
    fn put(&self, config: &Configuration) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let json = serde_json::to_string_pretty(config).map_err(StoreError::Serialize)?;
        std::fs::write(&self.path, json).map_err(write_err)
    }
}
