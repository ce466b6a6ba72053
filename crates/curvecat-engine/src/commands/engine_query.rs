//! Engine-level read-only query surface.
//!
//! `apply_engine_query` is the single entry point for catalog reads. Unlike
//! `apply_engine_command`, it accepts a shared (non-mutable) connection and
//! never writes to the store.

#![allow(clippy::result_large_err)]

use crate::commands::export::{export_catalog, export_curve};
use crate::commands::ticker::list_tickers;
use curvecat_core::errors::{CatalogError, CcError};
use curvecat_core::model::{CurveId, CurveRecord, CurveSummary, HelperId};
use curvecat_core::{log_op_end, log_op_error, log_op_start};
use curvecat_store::errors::Result;
use curvecat_store::repo::hydration::{list_curves, load_curve, load_curve_by_name};
use curvecat_store::repo::resolver::{resolve_curve_id, resolve_helper_id, resolve_helper_id_in_curve};
use rusqlite::Connection;
use serde_json::Value;

/// Read-only queries supported by the engine.
#[derive(Debug, Clone)]
pub enum EngineQuery {
    /// Get a curve with its helpers and configs by id.
    CurveGet { curve_id: CurveId },
    /// Get a curve with its helpers and configs by name.
    CurveGetByName { curve_name: String },
    /// List curve summaries ordered by name.
    CurveList,
    /// Export one curve (by name) or the whole catalog as builder JSON.
    CurveExport { curve_name: Option<String> },
    /// Resolve a curve name to its id.
    CurveResolve { curve_name: String },
    /// Resolve a helper name, optionally scoped to one curve.
    HelperResolve {
        curve_id: Option<CurveId>,
        helper_name: String,
    },
    /// List registered tickers.
    TickerList,
}

/// Result of a read-only engine query.
#[derive(Debug, Clone)]
pub enum EngineQueryResult {
    Curve(Box<CurveRecord>),
    CurveList(Vec<CurveSummary>),
    Export(Value),
    CurveId(Option<CurveId>),
    HelperId(Option<HelperId>),
    TickerList(Vec<String>),
}

fn query_name(query: &EngineQuery) -> &'static str {
    match query {
        EngineQuery::CurveGet { .. } => "curve_get",
        EngineQuery::CurveGetByName { .. } => "curve_get_by_name",
        EngineQuery::CurveList => "curve_list",
        EngineQuery::CurveExport { .. } => "curve_export",
        EngineQuery::CurveResolve { .. } => "curve_resolve",
        EngineQuery::HelperResolve { .. } => "helper_resolve",
        EngineQuery::TickerList => "ticker_list",
    }
}

/// Apply a read-only engine query.
///
/// ## Errors
///
/// - `NotFound`: `CurveGet`, `CurveGetByName` or a named `CurveExport`
///   matched no curve
/// - `Persistence` / `StoreUnavailable`: the read failed
pub fn apply_engine_query(query: EngineQuery, conn: &Connection) -> Result<EngineQueryResult> {
    let op = query_name(&query);
    log_op_start!(op);
    let start = std::time::Instant::now();

    let result = run_query(query, conn);

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => log_op_end!(op, duration_ms = elapsed),
        Err(e) => {
            let e_clone = e.clone();
            log_op_error!(op, e_clone, duration_ms = elapsed);
        }
    }
    result
}

fn run_query(query: EngineQuery, conn: &Connection) -> Result<EngineQueryResult> {
    match query {
        EngineQuery::CurveGet { curve_id } => load_curve(conn, curve_id)?
            .map(|record| EngineQueryResult::Curve(Box::new(record)))
            .ok_or_else(|| not_found(CatalogError::CurveIdNotFound { curve_id }, "curve_get")),
        EngineQuery::CurveGetByName { curve_name } => load_curve_by_name(conn, &curve_name)?
            .map(|record| EngineQueryResult::Curve(Box::new(record)))
            .ok_or_else(|| not_found(CatalogError::CurveNotFound { curve_name }, "curve_get_by_name")),
        EngineQuery::CurveList => Ok(EngineQueryResult::CurveList(list_curves(conn)?)),
        EngineQuery::CurveExport { curve_name: None } => {
            Ok(EngineQueryResult::Export(export_catalog(conn)?))
        }
        EngineQuery::CurveExport {
            curve_name: Some(curve_name),
        } => match load_curve_by_name(conn, &curve_name)? {
            Some(record) => Ok(EngineQueryResult::Export(export_curve(&record))),
            None => Err(not_found(CatalogError::CurveNotFound { curve_name }, "curve_export")),
        },
        EngineQuery::CurveResolve { curve_name } => {
            Ok(EngineQueryResult::CurveId(resolve_curve_id(conn, &curve_name)))
        }
        EngineQuery::HelperResolve {
            curve_id,
            helper_name,
        } => {
            let helper_id = match curve_id {
                Some(curve_id) => resolve_helper_id_in_curve(conn, curve_id, &helper_name),
                None => resolve_helper_id(conn, &helper_name),
            };
            Ok(EngineQueryResult::HelperId(helper_id))
        }
        EngineQuery::TickerList => Ok(EngineQueryResult::TickerList(list_tickers(conn)?)),
    }
}

fn not_found(err: CatalogError, op: &str) -> CcError {
    CcError::from(err).with_op(op.to_string())
}
