// Lifecycle events emitted at the engine boundary.

use chrono::NaiveDate;
use curvecat_core::logging_facility::init_test_capture;
use curvecat_core::model::{CurveSpec, DayCounter, HelperKind, HelperSpec};
use curvecat_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_CURVE_ID, FIELD_CURVE_NAME, FIELD_DURATION_MS,
    FIELD_ERR_CODE,
};
use curvecat_engine::commands::curve::{create_curve, delete_curve};
use curvecat_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use curvecat_engine::commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult};
use curvecat_store::db::open_catalog_in_memory;

fn spec(name: &str) -> CurveSpec {
    CurveSpec::new(
        name,
        DayCounter::Actual360,
        false,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    )
}

#[test]
fn test_create_curve_emits_start_and_end() {
    let capture = init_test_capture();
    let mut conn = open_catalog_in_memory().unwrap();
    let name = "LOG-CREATE-OK";

    create_curve(&mut conn, &spec(name), &[]).unwrap();

    let events: Vec<_> = capture
        .events_for_op("create_curve")
        .into_iter()
        .filter(|e| e.field(FIELD_CURVE_NAME) == Some(name))
        .collect();
    let kinds: Vec<_> = events.iter().filter_map(|e| e.event()).collect();
    assert_eq!(kinds, vec![EVENT_START, EVENT_END]);
    assert!(events[1].field(FIELD_DURATION_MS).is_some());
    assert!(events[1].field(FIELD_CURVE_ID).is_some());
}

#[test]
fn test_failed_create_emits_end_error_with_code() {
    let capture = init_test_capture();
    let mut conn = open_catalog_in_memory().unwrap();
    let name = "LOG-CREATE-FAIL";
    let dupes = vec![
        HelperSpec::new("H", HelperKind::Deposit),
        HelperSpec::new("H", HelperKind::Deposit),
    ];

    create_curve(&mut conn, &spec(name), &dupes).unwrap_err();

    let errors: Vec<_> = capture
        .events_for_op("create_curve")
        .into_iter()
        .filter(|e| e.field(FIELD_CURVE_NAME) == Some(name))
        .filter(|e| e.event() == Some(EVENT_END_ERROR))
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field(FIELD_ERR_CODE), Some("ERR_INVALID_INPUT"));
}

#[test]
fn test_delete_curve_logs_report() {
    let capture = init_test_capture();
    let mut conn = open_catalog_in_memory().unwrap();
    let curve_id = create_curve(&mut conn, &spec("LOG-DELETE"), &[]).unwrap();

    delete_curve(&mut conn, curve_id).unwrap();

    let curve_id_text = curve_id.to_string();
    let end = capture
        .events_for_op("delete_curve")
        .into_iter()
        .find(|e| {
            e.event() == Some(EVENT_END)
                && e.field(FIELD_CURVE_ID) == Some(curve_id_text.as_str())
                && e.field("curves") == Some("1")
        });
    assert!(end.is_some(), "delete_curve end event with report fields");
}

#[test]
fn test_engine_command_and_query_dispatch() {
    let capture = init_test_capture();
    let mut conn = open_catalog_in_memory().unwrap();

    let created = apply_engine_command(
        EngineCommand::CurveCreate {
            spec: spec("DISPATCH"),
            helpers: vec![HelperSpec::new("D1", HelperKind::TenorBasis)],
        },
        &mut conn,
    )
    .unwrap();
    let curve_id = match created {
        EngineCommandResult::CurveCreated { curve_id } => curve_id,
        other => panic!("unexpected result: {:?}", other),
    };

    let resolved = apply_engine_query(
        EngineQuery::CurveResolve {
            curve_name: "DISPATCH".to_string(),
        },
        &conn,
    )
    .unwrap();
    assert!(matches!(resolved, EngineQueryResult::CurveId(Some(id)) if id == curve_id));

    let missing = apply_engine_query(
        EngineQuery::CurveGetByName {
            curve_name: "NOPE".to_string(),
        },
        &conn,
    )
    .unwrap_err();
    assert_eq!(missing.code(), "ERR_NOT_FOUND");

    let deleted = apply_engine_command(EngineCommand::CurveDelete { curve_id }, &mut conn).unwrap();
    match deleted {
        EngineCommandResult::Deleted(report) => {
            assert_eq!((report.curves, report.helpers), (1, 1));
        }
        other => panic!("unexpected result: {:?}", other),
    }

    capture.assert_event_exists("curve_resolve", EVENT_START);
    capture.assert_event_exists("curve_get_by_name", EVENT_END_ERROR);
}
