//! curvecat Store - SQLite persistence for the curve catalog
//!
//! Provides:
//! - Store configuration and connection setup
//! - Embedded, checksummed schema migrations
//! - Row-level repository for curves, helpers, helper configs and tickers
//! - Name to id resolution
//! - Hydration of curves with their helpers and configs
//! - Curve definition documents (YAML/JSON) for bulk import

pub mod config;
pub mod db;
pub mod definition;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use config::{JournalMode, StoreConfig};
pub use errors::Result;
pub use repo::{SqliteRepo, TickerRepo};
