//! SQLite repository for curves, helpers and helper configs

use crate::errors::{store_error, Result};
use chrono::NaiveDate;
use curvecat_core::model::{
    ConfigEntry, Curve, CurveId, CurveSpec, DayCounter, Helper, HelperConfig, HelperId,
    HelperKind, HelperSpec,
};
use curvecat_core::CcErrorKind;
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// SQLite repository for the curve tables
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert a curve row and return its store-assigned id
    pub fn insert_curve(conn: &Connection, spec: &CurveSpec) -> Result<CurveId> {
        conn.query_row(
            "INSERT INTO curves (curve_name, day_counter, enable_extrapolation, config_date)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING curve_id",
            rusqlite::params![
                spec.curve_name,
                spec.day_counter.as_str(),
                spec.enable_extrapolation,
                spec.config_date.format(DATE_FORMAT).to_string(),
            ],
            |row| row.get(0),
        )
        .map_err(|e| {
            store_error(CcErrorKind::CreateFailed, "insert_curve", e)
                .with_entity_id(spec.curve_name.clone())
        })
    }

    /// Insert a helper row linked to `curve_id` and return its id
    pub fn insert_helper(conn: &Connection, curve_id: CurveId, spec: &HelperSpec) -> Result<HelperId> {
        conn.query_row(
            "INSERT INTO helpers (curve_id, helper_name, type)
             VALUES (?1, ?2, ?3)
             RETURNING helper_id",
            rusqlite::params![curve_id, spec.helper_name, spec.helper_type.as_str()],
            |row| row.get(0),
        )
        .map_err(|e| {
            store_error(CcErrorKind::CreateFailed, "insert_helper", e)
                .with_entity_id(spec.helper_name.clone())
        })
    }

    /// Insert one config row for a helper
    pub fn insert_helper_config(
        conn: &Connection,
        helper_id: HelperId,
        entry: &ConfigEntry,
    ) -> Result<()> {
        conn.execute(
            "INSERT INTO helper_configs (helper_id, field, value) VALUES (?1, ?2, ?3)",
            rusqlite::params![helper_id, entry.field, entry.value],
        )
        .map_err(|e| {
            store_error(CcErrorKind::ConfigWriteFailed, "insert_helper_config", e)
                .with_entity_id(format!("{}:{}", helper_id, entry.field))
        })?;

        Ok(())
    }

    /// Ids of every helper owned by a curve, ascending
    pub fn helper_ids_for_curve(conn: &Connection, curve_id: CurveId) -> Result<Vec<HelperId>> {
        let read_error =
            |e: rusqlite::Error| store_error(CcErrorKind::Persistence, "helper_ids_for_curve", e);

        let mut stmt = conn
            .prepare("SELECT helper_id FROM helpers WHERE curve_id = ?1 ORDER BY helper_id")
            .map_err(read_error)?;

        let ids = stmt
            .query_map([curve_id], |row| row.get(0))
            .map_err(read_error)?
            .collect::<std::result::Result<Vec<HelperId>, _>>()
            .map_err(read_error)?;

        Ok(ids)
    }

    /// Delete all config rows of a helper, returning the number removed
    pub fn delete_helper_configs(conn: &Connection, helper_id: HelperId) -> Result<usize> {
        conn.execute(
            "DELETE FROM helper_configs WHERE helper_id = ?1",
            [helper_id],
        )
        .map_err(|e| {
            store_error(CcErrorKind::DeleteFailed, "delete_helper_configs", e)
                .with_entity_id(helper_id.to_string())
        })
    }

    /// Delete a helper row, returning the number removed (0 or 1)
    pub fn delete_helper_row(conn: &Connection, helper_id: HelperId) -> Result<usize> {
        conn.execute("DELETE FROM helpers WHERE helper_id = ?1", [helper_id])
            .map_err(|e| {
                store_error(CcErrorKind::DeleteFailed, "delete_helper_row", e)
                    .with_entity_id(helper_id.to_string())
            })
    }

    /// Delete a curve row, returning the number removed (0 or 1)
    pub fn delete_curve_row(conn: &Connection, curve_id: CurveId) -> Result<usize> {
        conn.execute("DELETE FROM curves WHERE curve_id = ?1", [curve_id])
            .map_err(|e| {
                store_error(CcErrorKind::DeleteFailed, "delete_curve_row", e)
                    .with_entity_id(curve_id.to_string())
            })
    }

    /// Get a curve row by id
    pub fn get_curve(conn: &Connection, curve_id: CurveId) -> Result<Option<Curve>> {
        conn.query_row(
            "SELECT curve_id, curve_name, day_counter, enable_extrapolation, config_date
             FROM curves WHERE curve_id = ?1",
            [curve_id],
            curve_from_row,
        )
        .optional()
        .map_err(|e| store_error(CcErrorKind::Persistence, "get_curve", e))
    }

    /// All curve rows ordered by name
    pub fn list_curves(conn: &Connection) -> Result<Vec<Curve>> {
        let read_error = |e: rusqlite::Error| store_error(CcErrorKind::Persistence, "list_curves", e);

        let mut stmt = conn
            .prepare(
                "SELECT curve_id, curve_name, day_counter, enable_extrapolation, config_date
                 FROM curves ORDER BY curve_name",
            )
            .map_err(read_error)?;

        let curves = stmt
            .query_map([], curve_from_row)
            .map_err(read_error)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(read_error)?;

        Ok(curves)
    }

    /// Get a helper row by id
    pub fn get_helper(conn: &Connection, helper_id: HelperId) -> Result<Option<Helper>> {
        conn.query_row(
            "SELECT helper_id, curve_id, helper_name, type FROM helpers WHERE helper_id = ?1",
            [helper_id],
            helper_from_row,
        )
        .optional()
        .map_err(|e| store_error(CcErrorKind::Persistence, "get_helper", e))
    }

    /// Helpers of a curve in creation order
    pub fn list_helpers(conn: &Connection, curve_id: CurveId) -> Result<Vec<Helper>> {
        let read_error = |e: rusqlite::Error| store_error(CcErrorKind::Persistence, "list_helpers", e);

        let mut stmt = conn
            .prepare(
                "SELECT helper_id, curve_id, helper_name, type
                 FROM helpers WHERE curve_id = ?1 ORDER BY helper_id",
            )
            .map_err(read_error)?;

        let helpers = stmt
            .query_map([curve_id], helper_from_row)
            .map_err(read_error)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(read_error)?;

        Ok(helpers)
    }

    /// Configs of a helper in insertion order
    pub fn list_helper_configs(conn: &Connection, helper_id: HelperId) -> Result<Vec<HelperConfig>> {
        let read_error = |e: rusqlite::Error| store_error(CcErrorKind::Persistence, "list_helper_configs", e);

        let mut stmt = conn
            .prepare(
                "SELECT helper_id, field, value
                 FROM helper_configs WHERE helper_id = ?1 ORDER BY rowid",
            )
            .map_err(read_error)?;

        let configs = stmt
            .query_map([helper_id], |row| {
                Ok(HelperConfig {
                    helper_id: row.get(0)?,
                    field: row.get(1)?,
                    value: row.get(2)?,
                })
            })
            .map_err(read_error)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(read_error)?;

        Ok(configs)
    }
}

fn curve_from_row(row: &Row<'_>) -> rusqlite::Result<Curve> {
    let day_counter: String = row.get(2)?;
    let config_date: String = row.get(4)?;

    Ok(Curve {
        curve_id: row.get(0)?,
        curve_name: row.get(1)?,
        day_counter: day_counter
            .parse::<DayCounter>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?,
        enable_extrapolation: row.get(3)?,
        config_date: NaiveDate::parse_from_str(&config_date, DATE_FORMAT)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?,
    })
}

fn helper_from_row(row: &Row<'_>) -> rusqlite::Result<Helper> {
    let helper_type: String = row.get(3)?;

    Ok(Helper {
        helper_id: row.get(0)?,
        curve_id: row.get(1)?,
        helper_name: row.get(2)?,
        helper_type: helper_type
            .parse::<HelperKind>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?,
    })
}
