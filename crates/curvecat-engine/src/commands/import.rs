//! Bulk import of curve definition documents.
//!
//! Each curve goes through `create_curve`, so every curve is atomic on its
//! own. The batch is not: the first failing curve stops the import and the
//! curves created before it remain.

#![allow(clippy::result_large_err)]

use crate::commands::curve::create_curve;
use curvecat_core::model::CurveId;
use curvecat_core::{log_op_end, log_op_error, log_op_start};
use curvecat_store::definition::{parse_definition_file, DefinitionV0};
use curvecat_store::errors::Result;
use rusqlite::Connection;
use std::path::Path;

/// Create every curve of a parsed definition, in document order
///
/// ## Returns
///
/// Curve ids in document order
pub fn import_definitions(conn: &mut Connection, definition: &DefinitionV0) -> Result<Vec<CurveId>> {
    log_op_start!("import_definitions", curve_count = definition.curves.len());
    let start = std::time::Instant::now();

    let mut curve_ids = Vec::with_capacity(definition.curves.len());
    for curve in &definition.curves {
        match create_curve(conn, &curve.curve_spec(), &curve.helper_specs()) {
            Ok(curve_id) => curve_ids.push(curve_id),
            Err(e) => {
                log_op_error!(
                    "import_definitions",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    curve_name = curve.curve_name.as_str(),
                    imported = curve_ids.len()
                );
                return Err(e);
            }
        }
    }

    log_op_end!(
        "import_definitions",
        duration_ms = start.elapsed().as_millis() as u64,
        imported = curve_ids.len()
    );

    Ok(curve_ids)
}

/// Parse a definition file and import it
///
/// A file that fails to parse or validate imports nothing.
pub fn import_definition_file(conn: &mut Connection, path: &Path) -> Result<Vec<CurveId>> {
    let definition = parse_definition_file(path)?;
    import_definitions(conn, &definition)
}
