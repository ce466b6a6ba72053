// Integration tests for cascading deletion of curves and helpers.

use chrono::NaiveDate;
use curvecat_core::model::{CurveSpec, DayCounter, DeletionReport, HelperKind, HelperSpec};
use curvecat_core::CcErrorKind;
use curvecat_engine::commands::curve::{create_curve, delete_curve, delete_helper};
use curvecat_store::db::open_catalog_in_memory;
use curvecat_store::repo::hydration::load_curve;
use curvecat_store::repo::resolver::{resolve_curve_id, resolve_helper_id};
use rusqlite::Connection;

fn count(conn: &Connection, sql: &str) -> i64 {
    conn.query_row(sql, [], |r| r.get(0)).unwrap()
}

fn seed(conn: &mut Connection, name: &str) -> i64 {
    create_curve(
        conn,
        &CurveSpec::new(
            name,
            DayCounter::Actual360,
            true,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        ),
        &[
            HelperSpec::new(format!("{name}-H1"), HelperKind::Deposit)
                .with_config("rate", "0.05")
                .with_config("tenor", "3M"),
            HelperSpec::new(format!("{name}-H2"), HelperKind::Swap).with_config("tenor", "5Y"),
        ],
    )
    .unwrap()
}

#[test]
fn test_delete_curve_removes_helpers_and_configs() {
    let mut conn = open_catalog_in_memory().unwrap();
    let curve_id = seed(&mut conn, "USD-OIS");

    let report = delete_curve(&mut conn, curve_id).unwrap();

    assert_eq!(
        report,
        DeletionReport {
            curves: 1,
            helpers: 2,
            configs: 3
        }
    );
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM curves"), 0);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM helpers"), 0);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM helper_configs"), 0);
    assert_eq!(resolve_curve_id(&conn, "USD-OIS"), None);
}

#[test]
fn test_delete_curve_leaves_other_curves_intact() {
    let mut conn = open_catalog_in_memory().unwrap();
    let usd = seed(&mut conn, "USD-OIS");
    let eur = seed(&mut conn, "EUR-ESTR");

    delete_curve(&mut conn, usd).unwrap();

    let remaining = load_curve(&conn, eur).unwrap().unwrap();
    assert_eq!(remaining.helpers.len(), 2);
    assert_eq!(remaining.helpers[0].configs.len(), 2);
    assert_eq!(
        count(
            &conn,
            &format!("SELECT COUNT(*) FROM helpers WHERE curve_id = {usd}")
        ),
        0
    );
}

#[test]
fn test_delete_absent_curve_succeeds_with_zero_rows() {
    let mut conn = open_catalog_in_memory().unwrap();
    seed(&mut conn, "USD-OIS");

    let report = delete_curve(&mut conn, 4242).unwrap();

    assert!(report.is_empty());
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM curves"), 1);
}

#[test]
fn test_delete_absent_helper_succeeds_with_zero_rows() {
    let mut conn = open_catalog_in_memory().unwrap();
    let report = delete_helper(&mut conn, 7).unwrap();
    assert!(report.is_empty());
}

#[test]
fn test_delete_helper_keeps_curve_and_siblings() {
    let mut conn = open_catalog_in_memory().unwrap();
    let curve_id = seed(&mut conn, "USD-OIS");
    let helper_id = resolve_helper_id(&conn, "USD-OIS-H1").unwrap();

    let report = delete_helper(&mut conn, helper_id).unwrap();

    assert_eq!(
        report,
        DeletionReport {
            curves: 0,
            helpers: 1,
            configs: 2
        }
    );
    let record = load_curve(&conn, curve_id).unwrap().unwrap();
    assert_eq!(record.helpers.len(), 1);
    assert_eq!(record.helpers[0].helper.helper_name, "USD-OIS-H2");
}

#[test]
fn test_failed_delete_rolls_back_cascade() {
    let mut conn = open_catalog_in_memory().unwrap();
    let curve_id = seed(&mut conn, "USD-OIS");
    conn.execute_batch(
        "CREATE TRIGGER inject_delete_failure BEFORE DELETE ON helpers
         WHEN OLD.helper_name = 'USD-OIS-H2'
         BEGIN SELECT RAISE(ABORT, 'injected delete failure'); END;",
    )
    .unwrap();

    let err = delete_curve(&mut conn, curve_id).unwrap_err();

    assert_eq!(err.kind(), CcErrorKind::DeleteFailed);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM curves"), 1);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM helpers"), 2);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM helper_configs"), 3);
}
