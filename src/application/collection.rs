//! QR collection use cases

use crate::application::QrStore;
use crate::domain::QrRecord;
use crate::error::{QrStashError, Result};
use crate::infrastructure::{
    FileStorage, FileSystemRepository, KeyValueStorage, StashRepository,
};

/// Service behind the add/list/delete/clear commands
pub struct CollectionService {
    repository: FileSystemRepository,
}

impl CollectionService {
    /// Create a new collection service
    pub fn new(repository: FileSystemRepository) -> Self {
        CollectionService { repository }
    }

    /// Load the stash's store under its configured key
    pub fn open(&self) -> Result<QrStore<FileStorage>> {
        QrStore::initialize(self.repository.storage(), self.storage_key()?)
    }

    fn storage_key(&self) -> Result<String> {
        self.repository.load_config()?.get_storage_key()
    }

    /// Append a record, returning its index
    pub fn add(&self, record: QrRecord) -> Result<usize> {
        let mut store = self.open()?;
        store.append(record)?;
        Ok(store.len() - 1)
    }

    pub fn list(&self) -> Result<Vec<QrRecord>> {
        Ok(self.open()?.get_all().to_vec())
    }

    /// Delete by index; `None` when nothing was at that index
    pub fn delete(&self, index: usize) -> Result<Option<QrRecord>> {
        self.open()?.delete_at(index)
    }

    /// Clear the collection. Unreadable stored content is discarded too.
    pub fn clear(&self) -> Result<()> {
        let key = self.storage_key()?;

        match QrStore::initialize(self.repository.storage(), key.clone()) {
            Ok(mut store) => store.clear_all(),
            Err(
                e @ (QrStashError::MalformedStorage { .. }
                | QrStashError::MalformedRecord { .. }
                | QrStashError::UnsupportedVersion(_)),
            ) => {
                tracing::warn!("discarding unreadable collection: {}", e);
                self.repository.storage().remove_item(&key)
            }
            Err(e) => Err(e),
        }
    }
}
