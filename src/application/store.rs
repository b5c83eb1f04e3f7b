//! Persisted collection store
//!
//! [`QrStore`] holds the ordered list of QR records in memory and mirrors
//! every mutation to a [`KeyValueStorage`] under a single key. Each mutation
//! rewrites the whole serialized collection.

use crate::domain::{envelope, QrRecord};
use crate::error::Result;
use crate::infrastructure::KeyValueStorage;

/// In-memory QR record collection backed by key-value storage
#[derive(Debug)]
pub struct QrStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    records: Vec<QrRecord>,
}

impl<S: KeyValueStorage> QrStore<S> {
    /// Load the collection stored under `key`.
    ///
    /// A missing key yields an empty collection. Stored text that is not
    /// JSON is an error; see [`envelope::decode`] for the shapes accepted.
    pub fn initialize(storage: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();

        let records = match storage.get_item(&key)? {
            Some(raw) => envelope::decode(&key, &raw)?,
            None => Vec::new(),
        };
        tracing::debug!(key = %key, count = records.len(), "loaded QR collection");

        Ok(QrStore {
            storage,
            key,
            records,
        })
    }

    /// Current records in insertion order
    pub fn get_all(&self) -> &[QrRecord] {
        &self.records
    }

    /// Add a record at the end and persist.
    ///
    /// A record with a non-finite price is refused before anything changes.
    pub fn append(&mut self, record: QrRecord) -> Result<()> {
        record.validate()?;
        self.records.push(record);
        self.persist()
    }

    /// Remove the record at `index` and persist.
    ///
    /// An out-of-range index removes nothing; the unchanged collection is
    /// still written back.
    pub fn delete_at(&mut self, index: usize) -> Result<Option<QrRecord>> {
        let removed = if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            tracing::debug!(index, len = self.records.len(), "delete index out of range");
            None
        };

        self.persist()?;
        Ok(removed)
    }

    /// Drop every record and remove the storage key entirely
    pub fn clear_all(&mut self) -> Result<()> {
        self.records.clear();
        self.storage.remove_item(&self.key)?;
        tracing::debug!(key = %self.key, "cleared QR collection");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Storage key this store persists under
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Tear down the store, handing back its storage backend
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) -> Result<()> {
        let blob = envelope::encode(&self.records)?;
        self.storage.set_item(&self.key, &blob)?;
        tracing::debug!(key = %self.key, count = self.records.len(), "persisted QR collection");
        Ok(())
    }
}
