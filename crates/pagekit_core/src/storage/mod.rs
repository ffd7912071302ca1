//! Persistent key-value storage collaborators.
//!
//! # Responsibility
//! - Define the single-key text snapshot contract used by `ContactStore`.
//! - Provide an in-process store and a SQLite-backed durable store.
//!
//! # Invariants
//! - `set` replaces the whole value stored under a key; no partial updates.
//! - `get` returns `Ok(None)` for absent keys, never an empty placeholder.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::{latest_schema_version, open_sqlite, open_sqlite_in_memory, SqliteKeyValueStore};

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure reported by a storage backend.
#[derive(Debug)]
pub enum StorageError {
    /// SQLite transport failure.
    Sqlite(rusqlite::Error),
    /// The database was written by a binary with a newer schema.
    SchemaTooNew { found: u32, supported: u32 },
    /// The connection skipped `open_sqlite*` and has no current schema.
    SchemaNotMigrated { found: u32, expected: u32 },
    /// Backend refused the operation (quota exceeded, disabled, read-only).
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "storage schema version {found} is newer than supported {supported}"
            ),
            Self::SchemaNotMigrated { found, expected } => write!(
                f,
                "storage schema version {found} has not been upgraded to {expected}"
            ),
            Self::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaTooNew { .. } | Self::SchemaNotMigrated { .. } | Self::Unavailable(_) => {
                None
            }
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Text snapshot store addressed by string keys.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
