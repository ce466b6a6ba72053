//! Curve write and erase commands with boundary logging.
//!
//! - `create_curve`: curve row plus every helper and helper config
//! - `attach_helper`: one more helper on an existing curve
//! - `delete_curve` / `delete_helper`: cascading deletion, children first
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for these operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

#![allow(clippy::result_large_err)]

use curvecat_core::errors::{CatalogError, CcError, CcErrorKind};
use curvecat_core::model::{CurveId, CurveSpec, DeletionReport, HelperId, HelperSpec};
use curvecat_core::rules::{validate_curve_creation, validate_helper_spec};
use curvecat_core::{log_op_end, log_op_error, log_op_start};
use curvecat_store::errors::{store_error, Result};
use curvecat_store::repo::SqliteRepo;
use rusqlite::{Connection, Transaction, TransactionBehavior};

/// Take the write lock up front so a busy store fails before any statement runs
fn begin_write<'c>(conn: &'c mut Connection, op: &str) -> Result<Transaction<'c>> {
    conn.transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|e| store_error(CcErrorKind::Persistence, op, e))
}

fn commit(tx: Transaction<'_>, op: &str) -> Result<()> {
    tx.commit()
        .map_err(|e| store_error(CcErrorKind::Persistence, op, e))
}

/// Create a curve together with its helpers and helper configs
///
/// Helpers are written in the given order, each followed by its configs in
/// order. Either everything is stored or nothing is.
///
/// ## Returns
///
/// The store-assigned curve id
///
/// ## Errors
///
/// - `InvalidInput`: empty names or duplicate helper/config names
/// - `CreateFailed`: the curve row was rejected (e.g. name already taken)
/// - `HelperCreationFailed`: a helper or one of its configs was rejected;
///   the source error is the underlying `CreateFailed`/`ConfigWriteFailed`
/// - `StoreUnavailable`: the store could not execute statements
pub fn create_curve(
    conn: &mut Connection,
    spec: &CurveSpec,
    helpers: &[HelperSpec],
) -> Result<CurveId> {
    log_op_start!(
        "create_curve",
        curve_name = spec.curve_name.as_str(),
        helper_count = helpers.len()
    );
    let start = std::time::Instant::now();

    let curve_id = create_curve_impl(conn, spec, helpers).map_err(|e| {
        log_op_error!(
            "create_curve",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            curve_name = spec.curve_name.as_str()
        );
        e
    })?;

    log_op_end!(
        "create_curve",
        duration_ms = start.elapsed().as_millis() as u64,
        curve_name = spec.curve_name.as_str(),
        curve_id = curve_id
    );

    Ok(curve_id)
}

fn create_curve_impl(
    conn: &mut Connection,
    spec: &CurveSpec,
    helpers: &[HelperSpec],
) -> Result<CurveId> {
    validate_curve_creation(spec, helpers)
        .map_err(|e| CcError::from(e).with_op("create_curve"))?;

    let tx = begin_write(conn, "create_curve")?;

    let curve_id = SqliteRepo::insert_curve(&tx, spec)?;

    for (index, helper) in helpers.iter().enumerate() {
        write_helper(&tx, curve_id, helper).map_err(|e| helper_failure(spec, index, helper, e))?;
    }

    // Dropping the transaction on any early return above rolls it back
    commit(tx, "create_curve")?;

    Ok(curve_id)
}

fn helper_failure(spec: &CurveSpec, index: usize, helper: &HelperSpec, err: CcError) -> CcError {
    if err.kind() == CcErrorKind::StoreUnavailable {
        return err;
    }
    CcError::new(CcErrorKind::HelperCreationFailed)
        .with_op("create_curve")
        .with_entity_id(helper.helper_name.clone())
        .with_helper_index(index)
        .with_message(format!(
            "Helper {} of curve {} could not be created",
            helper.helper_name, spec.curve_name
        ))
        .with_source(err)
}

/// Insert one helper row and its configs in order
fn write_helper(conn: &Connection, curve_id: CurveId, helper: &HelperSpec) -> Result<HelperId> {
    let helper_id = SqliteRepo::insert_helper(conn, curve_id, helper)?;
    for entry in &helper.configs {
        SqliteRepo::insert_helper_config(conn, helper_id, entry)?;
    }
    tracing::debug!(
        curve_id,
        helper_id,
        config_count = helper.configs.len(),
        "helper written"
    );
    Ok(helper_id)
}

/// Attach a helper (with its configs) to an existing curve
///
/// ## Errors
///
/// - `InvalidInput`: empty helper name or duplicate config fields
/// - `NotFound`: no curve with `curve_id`
/// - `CreateFailed`: the helper row was rejected (e.g. name taken in this curve)
/// - `ConfigWriteFailed`: a config row was rejected
pub fn attach_helper(
    conn: &mut Connection,
    curve_id: CurveId,
    helper: &HelperSpec,
) -> Result<HelperId> {
    log_op_start!(
        "attach_helper",
        curve_id = curve_id,
        helper_name = helper.helper_name.as_str()
    );
    let start = std::time::Instant::now();

    let helper_id = attach_helper_impl(conn, curve_id, helper).map_err(|e| {
        log_op_error!(
            "attach_helper",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "attach_helper",
        duration_ms = start.elapsed().as_millis() as u64,
        helper_id = helper_id
    );

    Ok(helper_id)
}

fn attach_helper_impl(
    conn: &mut Connection,
    curve_id: CurveId,
    helper: &HelperSpec,
) -> Result<HelperId> {
    validate_helper_spec(0, helper).map_err(|e| CcError::from(e).with_op("attach_helper"))?;

    let tx = begin_write(conn, "attach_helper")?;

    if SqliteRepo::get_curve(&tx, curve_id)?.is_none() {
        return Err(CcError::from(CatalogError::CurveIdNotFound { curve_id }).with_op("attach_helper"));
    }

    let helper_id = write_helper(&tx, curve_id, helper)?;

    commit(tx, "attach_helper")?;

    Ok(helper_id)
}

/// Delete a curve, its helpers and their configs
///
/// Deleting an id that does not exist succeeds with an empty report.
///
/// ## Errors
///
/// - `DeleteFailed`: a delete statement failed; nothing was removed
/// - `StoreUnavailable`: the store could not execute statements
pub fn delete_curve(conn: &mut Connection, curve_id: CurveId) -> Result<DeletionReport> {
    log_op_start!("delete_curve", curve_id = curve_id);
    let start = std::time::Instant::now();

    let report = delete_curve_impl(conn, curve_id).map_err(|e| {
        log_op_error!(
            "delete_curve",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            curve_id = curve_id
        );
        e
    })?;

    log_op_end!(
        "delete_curve",
        duration_ms = start.elapsed().as_millis() as u64,
        curve_id = curve_id,
        curves = report.curves,
        helpers = report.helpers,
        configs = report.configs
    );

    Ok(report)
}

fn delete_curve_impl(conn: &mut Connection, curve_id: CurveId) -> Result<DeletionReport> {
    let tx = begin_write(conn, "delete_curve")?;

    let mut report = DeletionReport::default();
    let helper_ids = SqliteRepo::helper_ids_for_curve(&tx, curve_id).map_err(|e| {
        if e.kind() == CcErrorKind::StoreUnavailable {
            e
        } else {
            CcError::new(CcErrorKind::DeleteFailed)
                .with_op("delete_curve")
                .with_entity_id(curve_id.to_string())
                .with_message("Could not enumerate helpers of curve")
                .with_source(e)
        }
    })?;
    for helper_id in helper_ids {
        report.absorb(erase_helper(&tx, helper_id)?);
    }
    report.curves = SqliteRepo::delete_curve_row(&tx, curve_id)?;

    commit(tx, "delete_curve")?;

    Ok(report)
}

/// Delete a helper and its configs
///
/// Deleting an id that does not exist succeeds with an empty report.
///
/// ## Errors
///
/// - `DeleteFailed`: a delete statement failed; nothing was removed
/// - `StoreUnavailable`: the store could not execute statements
pub fn delete_helper(conn: &mut Connection, helper_id: HelperId) -> Result<DeletionReport> {
    log_op_start!("delete_helper", helper_id = helper_id);
    let start = std::time::Instant::now();

    let report = delete_helper_impl(conn, helper_id).map_err(|e| {
        log_op_error!(
            "delete_helper",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            helper_id = helper_id
        );
        e
    })?;

    log_op_end!(
        "delete_helper",
        duration_ms = start.elapsed().as_millis() as u64,
        helper_id = helper_id,
        helpers = report.helpers,
        configs = report.configs
    );

    Ok(report)
}

fn delete_helper_impl(conn: &mut Connection, helper_id: HelperId) -> Result<DeletionReport> {
    let tx = begin_write(conn, "delete_helper")?;
    let report = erase_helper(&tx, helper_id)?;
    commit(tx, "delete_helper")?;
    Ok(report)
}

/// Configs first, then the helper row
fn erase_helper(conn: &Connection, helper_id: HelperId) -> Result<DeletionReport> {
    let configs = SqliteRepo::delete_helper_configs(conn, helper_id)?;
    let helpers = SqliteRepo::delete_helper_row(conn, helper_id)?;
    Ok(DeletionReport {
        curves: 0,
        helpers,
        configs,
    })
}
