//! Hydration layer - loads curves with their helpers and configs
//!
//! This is the read side consumed by the curve construction engine.

use crate::errors::{store_error, Result};
use crate::repo::resolver::resolve_curve_id;
use crate::repo::SqliteRepo;
use curvecat_core::model::{Curve, CurveId, CurveRecord, CurveSummary, HelperRecord};
use curvecat_core::CcErrorKind;
use rusqlite::Connection;

/// Load a curve and everything it owns
///
/// Returns `None` when no curve has this id.
pub fn load_curve(conn: &Connection, curve_id: CurveId) -> Result<Option<CurveRecord>> {
    match SqliteRepo::get_curve(conn, curve_id)? {
        Some(curve) => Ok(Some(hydrate(conn, curve)?)),
        None => Ok(None),
    }
}

/// Load a curve by name
pub fn load_curve_by_name(conn: &Connection, curve_name: &str) -> Result<Option<CurveRecord>> {
    match resolve_curve_id(conn, curve_name) {
        Some(curve_id) => load_curve(conn, curve_id),
        None => Ok(None),
    }
}

/// Load every curve, ordered by name
pub fn load_all_curves(conn: &Connection) -> Result<Vec<CurveRecord>> {
    SqliteRepo::list_curves(conn)?
        .into_iter()
        .map(|curve| hydrate(conn, curve))
        .collect()
}

/// Summaries of every curve, ordered by name
pub fn list_curves(conn: &Connection) -> Result<Vec<CurveSummary>> {
    let read_error = |e: rusqlite::Error| store_error(CcErrorKind::Persistence, "list_curve_summaries", e);

    let mut stmt = conn
        .prepare(
            "SELECT c.curve_id, COUNT(h.helper_id)
             FROM curves c LEFT JOIN helpers h ON h.curve_id = c.curve_id
             GROUP BY c.curve_id",
        )
        .map_err(read_error)?;

    let counts: std::collections::HashMap<CurveId, i64> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .map_err(read_error)?
        .collect::<std::result::Result<_, _>>()
        .map_err(read_error)?;

    let summaries = SqliteRepo::list_curves(conn)?
        .into_iter()
        .map(|curve| CurveSummary {
            helper_count: counts.get(&curve.curve_id).copied().unwrap_or(0) as usize,
            curve_id: curve.curve_id,
            curve_name: curve.curve_name,
            day_counter: curve.day_counter,
            config_date: curve.config_date,
        })
        .collect();

    Ok(summaries)
}

fn hydrate(conn: &Connection, curve: Curve) -> Result<CurveRecord> {
    let helpers = SqliteRepo::list_helpers(conn, curve.curve_id)?
        .into_iter()
        .map(|helper| {
            let configs = SqliteRepo::list_helper_configs(conn, helper.helper_id)?;
            Ok(HelperRecord { helper, configs })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CurveRecord { curve, helpers })
}
