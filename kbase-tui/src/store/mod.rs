//! Persistence of the entry collection as a single JSON blob under one key.

use crate::types::Entry;
use thiserror::Error;
use tracing::{debug, warn};

mod storage;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
#[cfg(test)]
pub use storage::RecordingStorage;

pub const DEFAULT_STORAGE_KEY: &str = "knowledgeEntries";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize entries: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub struct EntryStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> EntryStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the whole collection. A missing key, an unreadable backend or a
    /// blob that does not parse all yield an empty collection.
    pub fn get_entries(&self) -> Vec<Entry> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "could not read entries, using empty collection");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(key = %self.key, error = %e, "malformed entries blob, using empty collection");
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted collection. On error the previous value is kept.
    pub fn save_entries(&mut self, entries: &[Entry]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(entries)?;
        self.storage.set_item(&self.key, &raw)?;
        debug!(key = %self.key, count = entries.len(), "saved entries");
        Ok(())
    }
}
