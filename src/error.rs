//! Error types for qrstash

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for qrstash
#[derive(Debug, Error)]
pub enum QrStashError {
    #[error("Not a qrstash directory: {0}")]
    NotStashDirectory(PathBuf),

    #[error("Malformed storage content under key '{key}': {source}")]
    MalformedStorage {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("Unsupported storage version: {0}")]
    UnsupportedVersion(String),

    #[error("Invalid price: {0} (prices must be finite numbers)")]
    InvalidPrice(f64),

    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl QrStashError {
    /// Get the exit code for this error.
    ///
    /// 2 is left to clap for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            QrStashError::NotStashDirectory(_) => 4,
            QrStashError::MalformedStorage { .. }
            | QrStashError::MalformedRecord { .. }
            | QrStashError::UnsupportedVersion(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            QrStashError::NotStashDirectory(path) => {
                format!(
                    "Not a qrstash directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'qrstash init' in this directory to create a new stash\n\
                    • Navigate to an existing qrstash directory\n\
                    • Set QRSTASH_ROOT environment variable to your stash path",
                    path.display()
                )
            }
            QrStashError::MalformedStorage { .. }
            | QrStashError::MalformedRecord { .. }
            | QrStashError::UnsupportedVersion(_) => {
                let location = match self {
                    QrStashError::MalformedStorage { key, .. } => {
                        format!(".qrstash/storage/{}", key)
                    }
                    _ => ".qrstash/storage/".to_string(),
                };
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Inspect {} for hand edits or truncation\n\
                    • Run 'qrstash clear' to discard the stored QR codes and start over",
                    self, location
                )
            }
            QrStashError::InvalidKey(_) => {
                format!(
                    "{}\n\n\
                    Storage keys start with a letter or digit and may contain\n\
                    letters, digits, '-', '_' and '.'\n\
                    Example: qrstash config storage_key qrStore",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using QrStashError
pub type Result<T> = std::result::Result<T, QrStashError>;
