//! Repository layer for the catalog tables
//!
//! Row-level primitives only. Functions take `&Connection`, so they run
//! equally against a plain connection or inside a `Transaction`; the engine
//! decides the transaction boundaries.

pub mod hydration;
pub mod resolver;
pub mod sqlite_repo;
pub mod ticker_repo;

pub use sqlite_repo::SqliteRepo;
pub use ticker_repo::TickerRepo;
