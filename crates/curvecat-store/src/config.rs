//! Store configuration
//!
//! An explicit configuration value handed to whatever opens the store. There
//! is no process-wide default connection; callers build a `StoreConfig`
//! (from defaults, a TOML file, or flags) and pass it to `db::open_catalog`.

use crate::errors::{io_error, serialization_error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// SQLite journal mode applied when a connection is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalMode {
    Wal,
    Delete,
    Memory,
}

impl JournalMode {
    pub fn as_pragma(&self) -> &'static str {
        match self {
            JournalMode::Wal => "WAL",
            JournalMode::Delete => "DELETE",
            JournalMode::Memory => "MEMORY",
        }
    }
}

/// Configuration for the catalog database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
    /// How long a statement waits for a competing writer before failing
    pub busy_timeout_ms: u64,
    pub journal_mode: JournalMode,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(".curvecat").join("catalog.db"),
            busy_timeout_ms: 5000,
            journal_mode: JournalMode::Wal,
        }
    }
}

impl StoreConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| serialization_error("config_parse", format!("Invalid config: {}", e)))
    }

    /// Load a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| io_error("config_read", e))?;
        Self::from_toml_str(&content)
    }

    /// Override the database path
    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }
}
