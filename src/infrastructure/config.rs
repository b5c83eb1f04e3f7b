//! Configuration management

use crate::error::{QrStashError, Result};
use crate::infrastructure::storage::validate_key;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Storage key used when nothing else is configured
pub const DEFAULT_STORAGE_KEY: &str = "qrStore";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    pub created: DateTime<Utc>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            storage_key: default_storage_key(),
            created: Utc::now(),
        }
    }

    /// Load config from .qrstash/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".qrstash").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QrStashError::NotStashDirectory(path.to_path_buf())
            } else {
                QrStashError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;

        validate_key(&config.storage_key)?;
        Ok(config)
    }

    /// Save config to .qrstash/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let stash_dir = path.join(".qrstash");
        let config_path = stash_dir.join("config.toml");

        if !stash_dir.exists() {
            fs::create_dir(&stash_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the storage key, letting QRSTASH_KEY override the configured one
    pub fn get_storage_key(&self) -> Result<String> {
        match std::env::var("QRSTASH_KEY") {
            Ok(key) if !key.is_empty() => {
                validate_key(&key)?;
                Ok(key)
            }
            _ => Ok(self.storage_key.clone()),
        }
    }
}
