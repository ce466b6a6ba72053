//! Database connection management
//!
//! Opening and configuring SQLite connections for the catalog

use crate::config::StoreConfig;
use crate::errors::{io_error, store_error, Result};
use crate::migrations::apply_migrations;
use curvecat_core::CcErrorKind;
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(|e| store_error(CcErrorKind::StoreUnavailable, "open", e))
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory()
        .map_err(|e| store_error(CcErrorKind::StoreUnavailable, "open", e))
}

/// Configure a connection: foreign keys, busy timeout and journal mode
pub fn configure(conn: &Connection, config: &StoreConfig) -> Result<()> {
    let unavailable = |e: rusqlite::Error| store_error(CcErrorKind::StoreUnavailable, "configure", e);

    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(unavailable)?;

    conn.busy_timeout(config.busy_timeout())
        .map_err(unavailable)?;

    // journal_mode reports the resulting mode as a row
    let mode: String = conn
        .pragma_update_and_check(None, "journal_mode", config.journal_mode.as_pragma(), |row| {
            row.get(0)
        })
        .map_err(unavailable)?;
    tracing::debug!(journal_mode = %mode, "configured catalog connection");

    Ok(())
}

/// Open, configure and migrate the catalog described by `config`
///
/// Creates the parent directory of the database file if needed.
pub fn open_catalog(config: &StoreConfig) -> Result<Connection> {
    if let Some(parent) = config.db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| io_error("create_catalog_dir", e))?;
        }
    }

    let mut conn = open(&config.db_path)?;
    configure(&conn, config)?;
    apply_migrations(&mut conn)?;
    Ok(conn)
}

/// Open, configure and migrate an in-memory catalog
pub fn open_catalog_in_memory() -> Result<Connection> {
    let mut conn = open_in_memory()?;
    configure(&conn, &StoreConfig::default())?;
    apply_migrations(&mut conn)?;
    Ok(conn)
}
