//! Name to identifier resolution
//!
//! Resolution never fails the caller: a missing row and a failed query both
//! come back as `None`. Use the `require_*` variants where absence is an
//! error for the caller.

use crate::errors::Result;
use curvecat_core::errors::CatalogError;
use curvecat_core::model::{CurveId, HelperId};
use rusqlite::{Connection, OptionalExtension};

fn lookup_id(conn: &Connection, op: &str, sql: &str, params: &[&dyn rusqlite::ToSql]) -> Option<i64> {
    match conn.query_row(sql, params, |row| row.get(0)).optional() {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(op, error = %e, "identifier lookup failed; treating as not found");
            None
        }
    }
}

/// Resolve a curve name to its id (first match wins)
pub fn resolve_curve_id(conn: &Connection, curve_name: &str) -> Option<CurveId> {
    lookup_id(
        conn,
        "resolve_curve_id",
        "SELECT curve_id FROM curves WHERE curve_name = ?1 ORDER BY curve_id LIMIT 1",
        &[&curve_name],
    )
}

/// Resolve a helper name to its id across all curves (first match wins)
pub fn resolve_helper_id(conn: &Connection, helper_name: &str) -> Option<HelperId> {
    lookup_id(
        conn,
        "resolve_helper_id",
        "SELECT helper_id FROM helpers WHERE helper_name = ?1 ORDER BY helper_id LIMIT 1",
        &[&helper_name],
    )
}

/// Resolve a helper name within one curve
pub fn resolve_helper_id_in_curve(
    conn: &Connection,
    curve_id: CurveId,
    helper_name: &str,
) -> Option<HelperId> {
    lookup_id(
        conn,
        "resolve_helper_id_in_curve",
        "SELECT helper_id FROM helpers WHERE curve_id = ?1 AND helper_name = ?2",
        &[&curve_id, &helper_name],
    )
}

/// Resolve a curve name, failing with `NotFound` when absent
pub fn require_curve_id(conn: &Connection, curve_name: &str) -> Result<CurveId> {
    resolve_curve_id(conn, curve_name).ok_or_else(|| {
        CatalogError::CurveNotFound {
            curve_name: curve_name.to_string(),
        }
        .into()
    })
}

/// Resolve a helper name, optionally scoped to a curve, failing with `NotFound`
pub fn require_helper_id(
    conn: &Connection,
    curve_id: Option<CurveId>,
    helper_name: &str,
) -> Result<HelperId> {
    let resolved = match curve_id {
        Some(curve_id) => resolve_helper_id_in_curve(conn, curve_id, helper_name),
        None => resolve_helper_id(conn, helper_name),
    };
    resolved.ok_or_else(|| {
        CatalogError::HelperNotFound {
            helper_name: helper_name.to_string(),
        }
        .into()
    })
}
