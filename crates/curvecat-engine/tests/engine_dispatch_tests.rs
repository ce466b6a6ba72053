// Integration tests for the engine command and query dispatchers.

use chrono::NaiveDate;
use curvecat_core::model::{CurveId, CurveSpec, DayCounter, HelperKind, HelperSpec};
use curvecat_core::CcErrorKind;
use curvecat_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use curvecat_engine::commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult};
use curvecat_store::db::open_catalog_in_memory;
use curvecat_store::definition::parse_definition_str;
use rusqlite::Connection;

fn usd_ois() -> CurveSpec {
    CurveSpec::new(
        "USD-OIS",
        DayCounter::Actual360,
        true,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    )
}

fn create_usd_ois(conn: &mut Connection) -> CurveId {
    let cmd = EngineCommand::CurveCreate {
        spec: usd_ois(),
        helpers: vec![HelperSpec::new("H1", HelperKind::Deposit).with_config("rate", "0.05")],
    };
    match apply_engine_command(cmd, conn).unwrap() {
        EngineCommandResult::CurveCreated { curve_id } => curve_id,
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_helper_attach_dispatch() {
    let mut conn = open_catalog_in_memory().unwrap();
    let curve_id = create_usd_ois(&mut conn);

    let cmd = EngineCommand::HelperAttach {
        curve_id,
        helper: HelperSpec::new("H2", HelperKind::Ois).with_config("tenor", "5Y"),
    };
    let helper_id = match apply_engine_command(cmd, &mut conn).unwrap() {
        EngineCommandResult::HelperAttached { helper_id } => helper_id,
        other => panic!("unexpected result: {:?}", other),
    };

    let query = EngineQuery::HelperResolve {
        curve_id: Some(curve_id),
        helper_name: "H2".to_string(),
    };
    match apply_engine_query(query, &conn).unwrap() {
        EngineQueryResult::HelperId(resolved) => assert_eq!(resolved, Some(helper_id)),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_helper_attach_dispatch_unknown_curve() {
    let mut conn = open_catalog_in_memory().unwrap();

    let cmd = EngineCommand::HelperAttach {
        curve_id: 404,
        helper: HelperSpec::new("H1", HelperKind::Deposit),
    };
    let err = apply_engine_command(cmd, &mut conn).unwrap_err();
    assert_eq!(err.kind(), CcErrorKind::NotFound);
}

#[test]
fn test_definition_import_dispatch() {
    let mut conn = open_catalog_in_memory().unwrap();
    let definition = parse_definition_str(
        r#"
schema_version: 0
curves:
  - { curve_name: A, day_counter: Actual360, config_date: "2024-01-01" }
  - { curve_name: B, day_counter: Actual365Fixed, config_date: "2024-01-01" }
"#,
    )
    .unwrap();

    let cmd = EngineCommand::DefinitionImport { definition };
    let curve_ids = match apply_engine_command(cmd, &mut conn).unwrap() {
        EngineCommandResult::DefinitionImported { curve_ids } => curve_ids,
        other => panic!("unexpected result: {:?}", other),
    };
    assert_eq!(curve_ids.len(), 2);

    let query = EngineQuery::CurveResolve {
        curve_name: "B".to_string(),
    };
    match apply_engine_query(query, &conn).unwrap() {
        EngineQueryResult::CurveId(resolved) => assert_eq!(resolved, Some(curve_ids[1])),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_curve_get_dispatch() {
    let mut conn = open_catalog_in_memory().unwrap();
    let curve_id = create_usd_ois(&mut conn);

    match apply_engine_query(EngineQuery::CurveGet { curve_id }, &conn).unwrap() {
        EngineQueryResult::Curve(record) => {
            assert_eq!(record.curve.curve_name, "USD-OIS");
            assert_eq!(record.helpers.len(), 1);
            assert_eq!(record.helpers[0].config_value("rate"), Some("0.05"));
        }
        other => panic!("unexpected result: {:?}", other),
    }

    let missing = EngineQuery::CurveGet {
        curve_id: curve_id + 1,
    };
    let err = apply_engine_query(missing, &conn).unwrap_err();
    assert_eq!(err.kind(), CcErrorKind::NotFound);
    assert_eq!(err.op(), Some("curve_get"));
}

#[test]
fn test_resolve_dispatch_misses_are_none() {
    let conn = open_catalog_in_memory().unwrap();

    let query = EngineQuery::CurveResolve {
        curve_name: "NOPE".to_string(),
    };
    match apply_engine_query(query, &conn).unwrap() {
        EngineQueryResult::CurveId(resolved) => assert_eq!(resolved, None),
        other => panic!("unexpected result: {:?}", other),
    }

    let query = EngineQuery::HelperResolve {
        curve_id: None,
        helper_name: "NOPE".to_string(),
    };
    match apply_engine_query(query, &conn).unwrap() {
        EngineQueryResult::HelperId(resolved) => assert_eq!(resolved, None),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_ticker_dispatch() {
    let mut conn = open_catalog_in_memory().unwrap();

    let added = apply_engine_command(
        EngineCommand::TickersAdd {
            tickers: vec!["USSO1 Curncy".to_string(), "EUSWE1 Curncy".to_string()],
        },
        &mut conn,
    )
    .unwrap();
    assert_eq!(added, EngineCommandResult::TickersAdded { count: 2 });

    let removed = apply_engine_command(
        EngineCommand::TickersRemove {
            tickers: vec!["USSO1 Curncy".to_string(), "NOTREG Index".to_string()],
        },
        &mut conn,
    )
    .unwrap();
    assert_eq!(removed, EngineCommandResult::TickersRemoved { count: 1 });

    match apply_engine_query(EngineQuery::TickerList, &conn).unwrap() {
        EngineQueryResult::TickerList(tickers) => assert_eq!(tickers, vec!["EUSWE1 Curncy"]),
        other => panic!("unexpected result: {:?}", other),
    }
}
