//! Key-value storage backends
//!
//! The store persists through [`KeyValueStorage`], which mirrors the browser
//! `Storage` API: string keys, string values, whole-value reads and writes.

use crate::error::{QrStashError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract string key-value storage
pub trait KeyValueStorage {
    /// Read the value stored under `key`, `None` if absent
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &mut S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

/// Check that a key is usable as a storage key (and as a file name).
pub fn validate_key(key: &str) -> Result<()> {
    let mut chars = key.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(QrStashError::InvalidKey(key.to_string()))
    }
}

/// In-process storage, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write and removal fail, as a full or locked
    /// host storage would.
    pub fn with_fail_writes(mut self, fail_writes: bool) -> Self {
        self.fail_writes = fail_writes;
        self
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            Err(QrStashError::Storage(
                "write rejected by storage backend".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.items.remove(key);
        Ok(())
    }
}

/// Directory-backed storage: one file per key
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` as the storage directory. The directory is created on the
    /// first write.
    pub fn new(dir: PathBuf) -> Self {
        FileStorage { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    pub fn item_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(key))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(QrStashError::Io(e)),
        }
    }

    /// Write to a temp file in the same directory, then rename into place.
    /// The temp file is removed again if it cannot be moved into place.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.item_path(key)?;

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let tmp_path = self
            .dir
            .join(format!(".{}.qrstash-tmp-{}", key, std::process::id()));
        fs::write(&tmp_path, value)?;

        let replaced = (|| -> std::io::Result<()> {
            if cfg!(windows) && path.exists() {
                // rename does not replace an existing file on Windows
                fs::remove_file(&path)?;
            }
            fs::rename(&tmp_path, &path)
        })();

        if let Err(e) = replaced {
            let _ = fs::remove_file(&tmp_path);
            tracing::debug!(key, error = %e, "failed to move temp file into place");
            return Err(QrStashError::Io(e));
        }
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let path = self.item_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(QrStashError::Io(e)),
        }
    }
}

/// The browser's `window.localStorage`
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// Open the window's local storage
    pub fn open() -> Result<Self> {
        let storage = web_sys::window()
            .ok_or_else(|| QrStashError::Storage("no window available".to_string()))?
            .local_storage()
            .map_err(|e| QrStashError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| QrStashError::Storage("localStorage is disabled".to_string()))?;

        Ok(LocalStorage { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| QrStashError::Storage(format!("{:?}", e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| QrStashError::Storage(format!("{:?}", e)))
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| QrStashError::Storage(format!("{:?}", e)))
    }
}
