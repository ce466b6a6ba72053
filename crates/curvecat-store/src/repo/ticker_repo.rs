//! Ticker rows
//!
//! Tickers are independent of the curve tables; each statement stands alone.

use crate::errors::{store_error, Result};
use curvecat_core::CcErrorKind;
use rusqlite::Connection;

/// SQLite repository for the ticker table
pub struct TickerRepo;

impl TickerRepo {
    /// Insert one ticker
    pub fn insert(conn: &Connection, ticker: &str) -> Result<()> {
        conn.execute("INSERT INTO bbg_tickers (ticker) VALUES (?1)", [ticker])
            .map_err(|e| {
                store_error(CcErrorKind::CreateFailed, "insert_ticker", e).with_entity_id(ticker)
            })?;
        Ok(())
    }

    /// Delete one ticker, returning the number of rows removed
    pub fn delete(conn: &Connection, ticker: &str) -> Result<usize> {
        conn.execute("DELETE FROM bbg_tickers WHERE ticker = ?1", [ticker])
            .map_err(|e| {
                store_error(CcErrorKind::DeleteFailed, "delete_ticker", e).with_entity_id(ticker)
            })
    }

    /// All tickers, sorted
    pub fn list(conn: &Connection) -> Result<Vec<String>> {
        let read_error = |e: rusqlite::Error| store_error(CcErrorKind::Persistence, "list_tickers", e);

        let mut stmt = conn
            .prepare("SELECT ticker FROM bbg_tickers ORDER BY ticker")
            .map_err(read_error)?;

        let tickers = stmt
            .query_map([], |row| row.get(0))
            .map_err(read_error)?
            .collect::<std::result::Result<Vec<String>, _>>()
            .map_err(read_error)?;

        Ok(tickers)
    }
}
