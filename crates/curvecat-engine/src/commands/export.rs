//! Rendering of stored curves into curve builder documents.
//!
//! The builder reads upper-case keys: `NAME`, `TYPE`, `DAYCOUNTER`,
//! `ENABLEEXTRAPOLATION`, `CONFIGDATE` and `RATEHELPERS`. Each rate helper
//! carries its `TYPE` tag plus one upper-cased key per config field; write
//! validation keeps those keys distinct.

#![allow(clippy::result_large_err)]

use curvecat_core::model::{CurveRecord, HelperRecord};
use curvecat_core::rules::HELPER_TYPE_KEY;
use curvecat_core::{log_op_end, log_op_error, log_op_start};
use curvecat_store::errors::Result;
use curvecat_store::repo::hydration::load_all_curves;
use rusqlite::Connection;
use serde_json::{json, Map, Number, Value};

/// Curve construction method understood by the builder
pub const CURVE_TYPE: &str = "PIECEWISE";

/// Render one curve as a builder document
pub fn export_curve(record: &CurveRecord) -> Value {
    let helpers: Vec<Value> = record.helpers.iter().map(export_helper).collect();
    json!({
        "NAME": record.curve.curve_name,
        "TYPE": CURVE_TYPE,
        "DAYCOUNTER": record.curve.day_counter.builder_tag(),
        "ENABLEEXTRAPOLATION": record.curve.enable_extrapolation,
        "CONFIGDATE": record.curve.config_date.format("%Y-%m-%d").to_string(),
        "RATEHELPERS": helpers,
    })
}

fn export_helper(record: &HelperRecord) -> Value {
    let mut object = Map::new();
    object.insert(
        HELPER_TYPE_KEY.to_string(),
        Value::String(record.helper.helper_type.builder_tag().to_string()),
    );
    for config in &record.configs {
        object.insert(config.field.to_uppercase(), typed_value(&config.value));
    }
    Value::Object(object)
}

/// Config values are stored as text; numbers and booleans get their JSON type back
///
/// Zero-padded digit strings such as `007` are codes, not numbers, and stay text.
fn typed_value(raw: &str) -> Value {
    match raw {
        "true" | "True" | "TRUE" => return Value::Bool(true),
        "false" | "False" | "FALSE" => return Value::Bool(false),
        _ => {}
    }
    if is_zero_padded(raw) {
        return Value::String(raw.to_string());
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Value::Number(i.into());
    }
    if let Some(n) = raw.parse::<f64>().ok().and_then(Number::from_f64) {
        return Value::Number(n);
    }
    Value::String(raw.to_string())
}

fn is_zero_padded(raw: &str) -> bool {
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    digits.len() > 1 && digits.starts_with('0') && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Render every stored curve as `{ "CURVES": [...] }`, ordered by name
pub fn export_catalog(conn: &Connection) -> Result<Value> {
    log_op_start!("export_catalog");
    let start = std::time::Instant::now();

    let records = load_all_curves(conn).map_err(|e| {
        log_op_error!(
            "export_catalog",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    let curves: Vec<Value> = records.iter().map(export_curve).collect();

    log_op_end!(
        "export_catalog",
        duration_ms = start.elapsed().as_millis() as u64,
        curve_count = curves.len()
    );

    Ok(json!({ "CURVES": curves }))
}
