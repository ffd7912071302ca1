//! Contact store over a single-key JSON snapshot.
//!
//! # Responsibility
//! - Load the contact list, seeding sample rows when storage is empty.
//! - Provide append, positional delete and id-based delete.
//!
//! # Invariants
//! - The snapshot under `key` is the JSON array of `list()` after every
//!   successful call, unless `has_unsaved_changes()` reports otherwise.
//! - Malformed snapshots are rejected, never overwritten with seed data.
//! - Ids assigned to id-less rows on load are written back, so they stay
//!   stable across reloads.

use crate::model::contact::{seed_contacts, Contact, ContactId};
use crate::storage::{KeyValueStore, StorageError};
use log::{info, warn};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "tableData";

pub type StoreResult<T> = Result<T, StoreError>;

/// Contact store error.
#[derive(Debug)]
pub enum StoreError {
    /// Positional delete outside `0..len`.
    OutOfRange { index: usize, len: usize },
    /// No contact with this stable id.
    NotFound(ContactId),
    /// Backend failed to read or write the snapshot.
    StorageUnavailable(StorageError),
    /// Stored snapshot could not be decoded.
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "contact index {index} out of range for list of {len}")
            }
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
            Self::StorageUnavailable(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted contact data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StorageUnavailable(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::StorageUnavailable(value)
    }
}

/// Ordered contact list mirrored to a key-value store.
pub struct ContactStore<S: KeyValueStore> {
    storage: S,
    key: String,
    contacts: Vec<Contact>,
    unsaved: bool,
}

impl<S: KeyValueStore> ContactStore<S> {
    /// Creates an unloaded store using [`DEFAULT_STORAGE_KEY`].
    ///
    /// The list stays empty until [`ContactStore::load`] is called.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Creates an unloaded store under a caller-chosen key.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            contacts: Vec::new(),
            unsaved: false,
        }
    }

    /// Creates a store under [`DEFAULT_STORAGE_KEY`] and loads it.
    pub fn open(storage: S) -> StoreResult<Self> {
        Self::open_with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Creates a store under `key` and loads it.
    pub fn open_with_key(storage: S, key: impl Into<String>) -> StoreResult<Self> {
        let mut store = Self::with_key(storage, key);
        store.load()?;
        Ok(store)
    }

    /// Replaces the in-memory list with the persisted snapshot.
    ///
    /// # Contract
    /// - Absent or empty snapshot: installs the 3-row seed list and persists
    ///   it immediately.
    /// - Rows stored without `id` get a fresh one, and the upgraded list is
    ///   persisted.
    /// - If either write-back fails, the list stays in memory and
    ///   `has_unsaved_changes()` turns true; the next successful write
    ///   (or [`ContactStore::save`]) stores it.
    /// - Malformed snapshot: returns `InvalidData`; memory and storage keep
    ///   their previous contents.
    pub fn load(&mut self) -> StoreResult<()> {
        let raw = self.storage.get(&self.key)?;
        let snapshot = match raw.as_deref() {
            Some(text) => decode_snapshot(text).inspect_err(|err| {
                warn!(
                    "event=contacts_load module=repo status=error error_code=invalid_snapshot error={err}"
                );
            })?,
            None => DecodedSnapshot::default(),
        };

        let (source, write_back) = if snapshot.contacts.is_empty() {
            self.contacts = seed_contacts();
            ("seed", true)
        } else if snapshot.assigned_ids > 0 {
            self.contacts = snapshot.contacts;
            ("legacy", true)
        } else {
            self.contacts = snapshot.contacts;
            ("storage", false)
        };

        self.unsaved = false;
        if write_back && self.persist().is_err() {
            self.unsaved = true;
        }
        info!(
            "event=contacts_load module=repo status=ok source={source} count={} unsaved={}",
            self.contacts.len(),
            self.unsaved
        );
        Ok(())
    }

    /// Writes the current list, e.g. to retry a write-back that failed on load.
    pub fn save(&mut self) -> StoreResult<()> {
        self.persist()
    }

    /// True while the in-memory list differs from the stored snapshot.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Current rows in insertion order.
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Storage key this store writes to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Appends one contact and persists the full list.
    ///
    /// The contact is stored as given; validation happens upstream.
    pub fn create(&mut self, contact: Contact) -> StoreResult<ContactId> {
        let id = contact.id;
        self.contacts.push(contact);
        if let Err(err) = self.persist() {
            self.contacts.pop();
            return Err(err);
        }
        info!(
            "event=contact_create module=repo status=ok count={}",
            self.contacts.len()
        );
        Ok(id)
    }

    /// Removes the contact at `index`, shifting later rows down by one.
    ///
    /// # Errors
    /// - `OutOfRange` when `index >= len`; nothing changes.
    pub fn delete(&mut self, index: usize) -> StoreResult<Contact> {
        let len = self.contacts.len();
        if index >= len {
            warn!(
                "event=contact_delete module=repo status=error error_code=out_of_range index={index} len={len}"
            );
            return Err(StoreError::OutOfRange { index, len });
        }

        let removed = self.contacts.remove(index);
        if let Err(err) = self.persist() {
            self.contacts.insert(index, removed);
            return Err(err);
        }
        info!(
            "event=contact_delete module=repo status=ok index={index} count={}",
            self.contacts.len()
        );
        Ok(removed)
    }

    /// Removes the contact with a stable id, wherever it currently sits.
    pub fn delete_by_id(&mut self, id: ContactId) -> StoreResult<Contact> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        self.delete(index)
    }

    /// Returns the current list position of a contact id.
    pub fn position(&self, id: ContactId) -> Option<usize> {
        self.contacts.iter().position(|contact| contact.id == id)
    }

    fn persist(&mut self) -> StoreResult<()> {
        let text = serde_json::to_string(&self.contacts)
            .map_err(|err| StoreError::InvalidData(format!("failed to encode snapshot: {err}")))?;
        self.storage.set(&self.key, &text).map_err(|err| {
            warn!(
                "event=contacts_save module=repo status=error error_code=storage_unavailable error={err}"
            );
            StoreError::from(err)
        })?;
        self.unsaved = false;
        Ok(())
    }
}

/// Snapshot row as stored; older snapshots carry no `id`.
#[derive(Deserialize)]
struct StoredContact {
    #[serde(default)]
    id: Option<ContactId>,
    name: String,
    email: String,
    phone: String,
}

#[derive(Debug, Default)]
struct DecodedSnapshot {
    contacts: Vec<Contact>,
    assigned_ids: usize,
}

fn decode_snapshot(text: &str) -> StoreResult<DecodedSnapshot> {
    if text.trim() == "null" {
        return Ok(DecodedSnapshot::default());
    }
    let rows: Vec<StoredContact> =
        serde_json::from_str(text).map_err(|err| StoreError::InvalidData(err.to_string()))?;

    let mut decoded = DecodedSnapshot::default();
    for row in rows {
        let id = row.id.unwrap_or_else(|| {
            decoded.assigned_ids += 1;
            ContactId::new_v4()
        });
        decoded
            .contacts
            .push(Contact::with_id(id, row.name, row.email, row.phone));
    }
    Ok(decoded)
}
