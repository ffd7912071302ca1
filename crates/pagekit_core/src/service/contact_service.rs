//! Contact table use-case service.
//!
//! # Responsibility
//! - Run the submit flow: validate, trim, append.
//! - Track the save status line shown beneath the table.
//!
//! # Invariants
//! - Invalid submissions never reach the store.
//! - A failed save is reported through `SaveStatus::Failed`, never a panic.

use crate::messages::{STATUS_AUTOSAVE_IDLE, STATUS_SAVED, STATUS_SAVE_FAILED};
use crate::model::contact::{Contact, ContactForm, ContactId};
use crate::repo::contact_repo::{ContactStore, StoreError, StoreResult};
use crate::storage::KeyValueStore;
use crate::validation::form::{validate, FieldError, ValidationResult};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result of the most recent write, for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    /// No write since load, or the "saved" notice has been acknowledged.
    #[default]
    Idle,
    /// Last write succeeded.
    Saved,
    /// Last write was rejected by storage.
    Failed,
}

impl SaveStatus {
    pub fn message(self) -> &'static str {
        match self {
            Self::Idle => STATUS_AUTOSAVE_IDLE,
            Self::Saved => STATUS_SAVED,
            Self::Failed => STATUS_SAVE_FAILED,
        }
    }
}

/// Error returned by [`ContactService::submit`].
#[derive(Debug)]
pub enum SubmitError {
    /// Form input failed validation; every failing field is listed.
    Invalid(Vec<FieldError>),
    /// Input was valid but the store rejected the write.
    Store(StoreError),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(errors) => {
                write!(f, "form has {} invalid field(s)", errors.len())
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for SubmitError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Form-level facade over a [`ContactStore`].
pub struct ContactService<S: KeyValueStore> {
    store: ContactStore<S>,
    status: SaveStatus,
}

impl<S: KeyValueStore> ContactService<S> {
    /// Wraps a store; call [`ContactStore::load`] (or use
    /// [`ContactStore::open`]) before handing it over.
    ///
    /// Starts in `SaveStatus::Failed` when the load could not store its seed
    /// or upgraded rows.
    pub fn new(store: ContactStore<S>) -> Self {
        let status = if store.has_unsaved_changes() {
            SaveStatus::Failed
        } else {
            SaveStatus::Idle
        };
        Self { store, status }
    }

    /// Validates raw input and appends the trimmed contact.
    ///
    /// # Contract
    /// - Returns `SubmitError::Invalid` with all field errors and leaves the
    ///   store and status untouched when validation fails.
    /// - Returns the stored contact on success.
    pub fn submit(&mut self, form: &ContactForm) -> Result<Contact, SubmitError> {
        if let ValidationResult::Invalid(errors) = validate(form) {
            info!(
                "event=contact_submit module=service status=rejected invalid_fields={}",
                errors.len()
            );
            return Err(SubmitError::Invalid(errors));
        }

        let contact = form.normalized();
        let result = self.store.create(contact.clone());
        self.record(result)?;
        Ok(contact)
    }

    /// Deletes by list position, as passed back by a row's delete control.
    pub fn delete(&mut self, index: usize) -> StoreResult<Contact> {
        let result = self.store.delete(index);
        self.record(result)
    }

    /// Deletes by stable id.
    pub fn delete_by_id(&mut self, id: ContactId) -> StoreResult<Contact> {
        let result = self.store.delete_by_id(id);
        self.record(result)
    }

    /// Writes the current list again after a failed save.
    pub fn retry_save(&mut self) -> StoreResult<()> {
        let result = self.store.save();
        self.record(result)
    }

    pub fn contacts(&self) -> &[Contact] {
        self.store.list()
    }

    pub fn status(&self) -> SaveStatus {
        self.status
    }

    /// Returns the status line to idle, e.g. after the "saved" notice timed out.
    pub fn acknowledge_status(&mut self) {
        if self.status == SaveStatus::Saved {
            self.status = SaveStatus::Idle;
        }
    }

    pub fn store(&self) -> &ContactStore<S> {
        &self.store
    }

    fn record<T>(&mut self, result: StoreResult<T>) -> StoreResult<T> {
        match &result {
            Ok(_) => self.status = SaveStatus::Saved,
            Err(StoreError::StorageUnavailable(err)) => {
                warn!(
                    "event=contact_save module=service status=error error_code=storage_unavailable error={err}"
                );
                self.status = SaveStatus::Failed;
            }
            Err(_) => {}
        }
        result
    }
}
