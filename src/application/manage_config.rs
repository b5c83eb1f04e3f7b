//! Config management use case

use crate::error::{QrStashError, Result};
use crate::infrastructure::storage::validate_key;
use crate::infrastructure::{Config, FileSystemRepository, StashRepository};

/// Service for managing stash configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "storage_key" => Ok(config.storage_key.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(QrStashError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: storage_key, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "storage_key" => {
                validate_key(value)?;
                config.storage_key = value.to_string();
            }
            "created" => {
                return Err(QrStashError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(QrStashError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: storage_key",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
