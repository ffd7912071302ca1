//! SQLite-backed key-value store.
//!
//! # Responsibility
//! - Open connections ready for snapshot reads and writes.
//! - Store one text value per key in `kv_entries`.
//!
//! # Invariants
//! - Connections returned by `open_sqlite*` are at `latest_schema_version()`.
//! - `SqliteKeyValueStore` only wraps connections at that version.
//! - One row per key; `set` is an upsert.

use super::{KeyValueStore, StorageError, StorageResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

mod schema;

use schema::{check_schema, upgrade_schema, SchemaState};
pub use schema::latest_schema_version;

/// Opens (creating if needed) a SQLite file and upgrades its schema.
///
/// Emits one `kv_open` start event and one ok/error event.
pub fn open_sqlite(path: impl AsRef<Path>) -> StorageResult<Connection> {
    open_with("file", || Connection::open(path))
}

/// Opens a private in-memory SQLite database with the schema applied.
pub fn open_sqlite_in_memory() -> StorageResult<Connection> {
    open_with("memory", Connection::open_in_memory)
}

fn open_with(
    mode: &'static str,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> StorageResult<Connection> {
    let started_at = Instant::now();
    info!("event=kv_open module=storage status=start mode={mode}");

    let result = connect().map_err(StorageError::from).and_then(|mut conn| {
        conn.busy_timeout(Duration::from_secs(5))?;
        upgrade_schema(&mut conn)?;
        Ok(conn)
    });

    match &result {
        Ok(_) => info!(
            "event=kv_open module=storage status=ok mode={} duration_ms={}",
            mode,
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=kv_open module=storage status=error mode={} duration_ms={} error={}",
            mode,
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

/// Durable store over the `kv_entries` table.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Wraps a connection whose schema is already current.
    ///
    /// # Errors
    /// - `StorageError::SchemaNotMigrated` when the connection was not opened
    ///   through `open_sqlite*`.
    /// - `StorageError::SchemaTooNew` when a newer binary owns the database.
    pub fn try_new(conn: &'conn Connection) -> StorageResult<Self> {
        match check_schema(conn)? {
            SchemaState::Current => Ok(Self { conn }),
            SchemaState::Behind { found } => Err(StorageError::SchemaNotMigrated {
                found,
                expected: latest_schema_version(),
            }),
        }
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}
