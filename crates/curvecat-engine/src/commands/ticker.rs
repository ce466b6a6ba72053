//! Ticker registry commands.
//!
//! Tickers are independent rows. Bulk add/remove runs statement by statement
//! without an enclosing transaction: the first failure stops the batch and
//! rows written before it stay.

#![allow(clippy::result_large_err)]

use curvecat_core::{log_op_end, log_op_error, log_op_start};
use curvecat_store::errors::Result;
use curvecat_store::repo::TickerRepo;
use rusqlite::Connection;

/// Register each ticker in order
///
/// ## Errors
///
/// - `CreateFailed`: a ticker was rejected (e.g. already registered); tickers
///   before it remain registered
/// - `StoreUnavailable`: the store could not execute statements
pub fn add_tickers<S: AsRef<str>>(conn: &Connection, tickers: &[S]) -> Result<()> {
    log_op_start!("add_tickers", ticker_count = tickers.len());
    let start = std::time::Instant::now();

    let result = tickers
        .iter()
        .try_for_each(|ticker| TickerRepo::insert(conn, ticker.as_ref()));

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => log_op_end!("add_tickers", duration_ms = elapsed),
        Err(e) => {
            let e_clone = e.clone();
            log_op_error!("add_tickers", e_clone, duration_ms = elapsed);
        }
    }
    result
}

/// Remove each ticker in order; absent tickers are skipped silently
///
/// ## Returns
///
/// How many tickers were actually registered and removed
///
/// ## Errors
///
/// - `DeleteFailed`: a delete statement failed; earlier removals stand
/// - `StoreUnavailable`: the store could not execute statements
pub fn remove_tickers<S: AsRef<str>>(conn: &Connection, tickers: &[S]) -> Result<usize> {
    log_op_start!("remove_tickers", ticker_count = tickers.len());
    let start = std::time::Instant::now();

    let mut removed = 0;
    let result = tickers.iter().try_for_each(|ticker| -> Result<()> {
        match TickerRepo::delete(conn, ticker.as_ref())? {
            0 => tracing::debug!(ticker = ticker.as_ref(), "ticker not registered"),
            n => removed += n,
        }
        Ok(())
    });

    let elapsed = start.elapsed().as_millis() as u64;
    match result {
        Ok(()) => {
            log_op_end!("remove_tickers", duration_ms = elapsed, removed = removed);
            Ok(removed)
        }
        Err(e) => {
            log_op_error!("remove_tickers", e.clone(), duration_ms = elapsed, removed = removed);
            Err(e)
        }
    }
}

/// All registered tickers, sorted
pub fn list_tickers(conn: &Connection) -> Result<Vec<String>> {
    TickerRepo::list(conn)
}
