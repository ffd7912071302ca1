//! In-process key-value store.

use super::{KeyValueStore, StorageError, StorageResult};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// Map-backed store for tests and hosts without durable storage.
///
/// Writes can be switched off with [`MemoryStore::reject_writes`] to emulate
/// a full or disabled browser store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    reject_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent `set` calls fail with `StorageError::Unavailable`.
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    /// Returns the raw stored text without going through the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.reject_writes.get() {
            return Err(StorageError::Unavailable("quota exceeded".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
