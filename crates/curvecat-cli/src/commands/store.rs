//! Store configuration resolution
//!
//! Precedence, lowest first: defaults, `--config` file, `CURVECAT_DB`
//! (a `.env` file is loaded at startup), `--db`.

use curvecat_store::db::open_catalog;
use curvecat_store::StoreConfig;
use rusqlite::Connection;
use std::path::PathBuf;

/// Environment variable naming the catalog database
pub const DB_ENV_VAR: &str = "CURVECAT_DB";

/// Global store flags shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct StoreArgs {
    pub config: Option<PathBuf>,
    pub db: Option<PathBuf>,
}

impl StoreArgs {
    /// Resolve the effective store configuration
    pub fn resolve(&self) -> Result<StoreConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => StoreConfig::load(path)?,
            None => StoreConfig::default(),
        };
        if let Ok(db) = std::env::var(DB_ENV_VAR) {
            if !db.is_empty() {
                config = config.with_db_path(db);
            }
        }
        if let Some(db) = &self.db {
            config = config.with_db_path(db.clone());
        }
        Ok(config)
    }

    /// Open (and migrate) the configured catalog
    pub fn open(&self) -> Result<(StoreConfig, Connection), Box<dyn std::error::Error>> {
        let config = self.resolve()?;
        let conn = open_catalog(&config)?;
        Ok((config, conn))
    }
}
