//! Engine-level write commands.
//!
//! `apply_engine_command` is the single dispatch point for every catalog
//! write, so front ends (CLI, services) do not need to know which module
//! owns an operation.

#![allow(clippy::result_large_err)]

use crate::commands::{curve, import, ticker};
use curvecat_core::model::{CurveId, CurveSpec, DeletionReport, HelperId, HelperSpec};
use curvecat_store::definition::DefinitionV0;
use curvecat_store::errors::Result;
use rusqlite::Connection;

/// Engine-level commands that write to the catalog.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Create a curve with its helpers and configs.
    CurveCreate {
        spec: CurveSpec,
        helpers: Vec<HelperSpec>,
    },
    /// Attach one helper to an existing curve.
    HelperAttach {
        curve_id: CurveId,
        helper: HelperSpec,
    },
    /// Delete a curve and everything it owns.
    CurveDelete { curve_id: CurveId },
    /// Delete a helper and its configs.
    HelperDelete { helper_id: HelperId },
    /// Import every curve of a definition document.
    DefinitionImport { definition: DefinitionV0 },
    /// Register tickers.
    TickersAdd { tickers: Vec<String> },
    /// Unregister tickers.
    TickersRemove { tickers: Vec<String> },
}

/// Result of applying an engine command.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommandResult {
    CurveCreated { curve_id: CurveId },
    HelperAttached { helper_id: HelperId },
    Deleted(DeletionReport),
    DefinitionImported { curve_ids: Vec<CurveId> },
    TickersAdded { count: usize },
    /// `count` excludes tickers that were not registered
    TickersRemoved { count: usize },
}

/// Apply an engine command.
pub fn apply_engine_command(cmd: EngineCommand, conn: &mut Connection) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::CurveCreate { spec, helpers } => {
            let curve_id = curve::create_curve(conn, &spec, &helpers)?;
            Ok(EngineCommandResult::CurveCreated { curve_id })
        }
        EngineCommand::HelperAttach { curve_id, helper } => {
            let helper_id = curve::attach_helper(conn, curve_id, &helper)?;
            Ok(EngineCommandResult::HelperAttached { helper_id })
        }
        EngineCommand::CurveDelete { curve_id } => {
            curve::delete_curve(conn, curve_id).map(EngineCommandResult::Deleted)
        }
        EngineCommand::HelperDelete { helper_id } => {
            curve::delete_helper(conn, helper_id).map(EngineCommandResult::Deleted)
        }
        EngineCommand::DefinitionImport { definition } => {
            let curve_ids = import::import_definitions(conn, &definition)?;
            Ok(EngineCommandResult::DefinitionImported { curve_ids })
        }
        EngineCommand::TickersAdd { tickers } => {
            ticker::add_tickers(conn, &tickers)?;
            Ok(EngineCommandResult::TickersAdded {
                count: tickers.len(),
            })
        }
        EngineCommand::TickersRemove { tickers } => {
            let count = ticker::remove_tickers(conn, &tickers)?;
            Ok(EngineCommandResult::TickersRemoved { count })
        }
    }
}
