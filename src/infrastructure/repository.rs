//! File system repository

use crate::error::{QrStashError, Result};
use crate::infrastructure::{Config, FileStorage};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the marker directory holding config and storage
pub const STASH_DIR: &str = ".qrstash";

/// Abstract repository for stash operations
pub trait StashRepository {
    /// Load configuration from .qrstash/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .qrstash/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .qrstash directory exists
    fn is_initialized(&self) -> bool;

    /// Create .qrstash directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of StashRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover stash root by walking up from current directory
    /// First checks QRSTASH_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("QRSTASH_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_stash_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(QrStashError::Config(format!(
                    "QRSTASH_ROOT is set to '{}' but no .qrstash directory found. \
                    Run 'qrstash init' in that directory or unset QRSTASH_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover stash root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_stash_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(QrStashError::NotStashDirectory(start.to_path_buf())),
            }
        }
    }

    /// Directory backing the key-value storage
    pub fn storage_dir(&self) -> PathBuf {
        self.root.join(STASH_DIR).join("storage")
    }

    /// Key-value storage rooted in this stash
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.storage_dir())
    }

    fn has_stash_dir(path: &Path) -> bool {
        path.join(STASH_DIR).is_dir()
    }
}

impl StashRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_stash_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(QrStashError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(self.root.join(STASH_DIR))?;
        fs::create_dir(self.storage_dir())?;
        Ok(())
    }
}
