//! Schema versioning for the `kv_entries` table.
//!
//! # Invariants
//! - Step versions are strictly increasing; the last one is the supported
//!   schema.
//! - The applied version lives in `PRAGMA user_version`.
//! - A database stamped with a newer version is never touched.

use crate::storage::{StorageError, StorageResult};
use log::info;
use rusqlite::Connection;

struct SchemaStep {
    version: u32,
    sql: &'static str,
}

const SCHEMA_STEPS: &[SchemaStep] = &[SchemaStep {
    version: 1,
    sql: include_str!("0001_kv_entries.sql"),
}];

/// Where a connection's schema stands relative to this binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SchemaState {
    Current,
    Behind { found: u32 },
}

/// Schema version this binary reads and writes.
pub fn latest_schema_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |step| step.version)
}

/// Version gate shared by bootstrap and `SqliteKeyValueStore::try_new`.
///
/// # Errors
/// - `StorageError::SchemaTooNew` when another binary already moved the
///   database past `latest_schema_version()`.
pub(crate) fn check_schema(conn: &Connection) -> StorageResult<SchemaState> {
    let found = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    let supported = latest_schema_version();
    if found > supported {
        return Err(StorageError::SchemaTooNew { found, supported });
    }
    if found == supported {
        Ok(SchemaState::Current)
    } else {
        Ok(SchemaState::Behind { found })
    }
}

/// Brings the connection up to `latest_schema_version()` in one transaction.
pub(crate) fn upgrade_schema(conn: &mut Connection) -> StorageResult<()> {
    let SchemaState::Behind { found } = check_schema(conn)? else {
        return Ok(());
    };

    let tx = conn.transaction()?;
    for step in SCHEMA_STEPS.iter().filter(|step| step.version > found) {
        tx.execute_batch(step.sql)?;
        tx.pragma_update(None, "user_version", step.version)?;
    }
    tx.commit()?;

    info!(
        "event=kv_schema_upgrade module=storage status=ok from_version={} to_version={}",
        found,
        latest_schema_version()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check_schema, latest_schema_version, upgrade_schema, SchemaState};
    use crate::storage::StorageError;
    use rusqlite::Connection;

    #[test]
    fn fresh_connection_is_behind_then_current() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert_eq!(
            check_schema(&conn).unwrap(),
            SchemaState::Behind { found: 0 }
        );

        upgrade_schema(&mut conn).unwrap();
        assert_eq!(check_schema(&conn).unwrap(), SchemaState::Current);

        upgrade_schema(&mut conn).unwrap();
        assert_eq!(check_schema(&conn).unwrap(), SchemaState::Current);
    }

    #[test]
    fn newer_version_is_rejected_by_gate_and_upgrade() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.pragma_update(None, "user_version", latest_schema_version() + 1)
            .unwrap();

        assert!(matches!(
            check_schema(&conn),
            Err(StorageError::SchemaTooNew { .. })
        ));
        assert!(matches!(
            upgrade_schema(&mut conn),
            Err(StorageError::SchemaTooNew { .. })
        ));
    }
}
