//! Curve commands
//!
//! Usage:
//!   curvecat curve import <PATH>
//!   curvecat curve list
//!   curvecat curve show <NAME>
//!   curvecat curve export [NAME] [--output <PATH>]
//!   curvecat curve delete (--id <ID> | --name <NAME>)

use crate::commands::store::StoreArgs;
use clap::{ArgGroup, Args, Subcommand};
use curvecat_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use curvecat_engine::commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult};
use curvecat_store::definition::parse_definition_file;
use curvecat_store::repo::resolver::require_curve_id;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CurveArgs {
    #[command(subcommand)]
    pub command: CurveCommand,
}

#[derive(Debug, Subcommand)]
pub enum CurveCommand {
    /// Import curves from a definition file (YAML or JSON)
    Import {
        /// Path to the definition file
        path: PathBuf,
    },
    /// List curves with their helper counts
    List,
    /// Show one curve with its helpers and configs as JSON
    Show {
        /// Curve name
        name: String,
    },
    /// Export one curve, or the whole catalog, as curve builder JSON
    Export {
        /// Curve name (all curves when omitted)
        name: Option<String>,

        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Delete a curve with its helpers and configs
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").required(true).args(["id", "name"])))]
pub struct DeleteArgs {
    /// Curve id
    #[arg(long)]
    pub id: Option<i64>,

    /// Curve name
    #[arg(long)]
    pub name: Option<String>,
}

/// Execute curve command
pub fn execute(store: &StoreArgs, args: CurveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (_config, mut conn) = store.open()?;

    match args.command {
        CurveCommand::Import { path } => {
            println!("Importing {}...", path.display());
            let definition = parse_definition_file(&path)?;
            let result =
                apply_engine_command(EngineCommand::DefinitionImport { definition }, &mut conn)?;
            if let EngineCommandResult::DefinitionImported { curve_ids } = result {
                println!("✓ Imported {} curves", curve_ids.len());
            }
        }
        CurveCommand::List => {
            if let EngineQueryResult::CurveList(summaries) =
                apply_engine_query(EngineQuery::CurveList, &conn)?
            {
                for s in summaries {
                    println!(
                        "{}\t{}\t{}\t{}\t{} helpers",
                        s.curve_id, s.curve_name, s.day_counter, s.config_date, s.helper_count
                    );
                }
            }
        }
        CurveCommand::Show { name } => {
            if let EngineQueryResult::Curve(record) =
                apply_engine_query(EngineQuery::CurveGetByName { curve_name: name }, &conn)?
            {
                println!("{}", serde_json::to_string_pretty(&record)?);
            }
        }
        CurveCommand::Export { name, output } => {
            if let EngineQueryResult::Export(document) =
                apply_engine_query(EngineQuery::CurveExport { curve_name: name }, &conn)?
            {
                let rendered = serde_json::to_string_pretty(&document)?;
                match output {
                    Some(path) => {
                        std::fs::write(&path, rendered)?;
                        println!("✓ Exported to {}", path.display());
                    }
                    None => println!("{}", rendered),
                }
            }
        }
        CurveCommand::Delete(target) => {
            let curve_id = match (target.id, target.name) {
                (Some(id), _) => id,
                (None, Some(name)) => require_curve_id(&conn, &name)?,
                (None, None) => return Err("either --id or --name is required".into()),
            };
            let result = apply_engine_command(EngineCommand::CurveDelete { curve_id }, &mut conn)?;
            if let EngineCommandResult::Deleted(report) = result {
                println!(
                    "✓ Deleted {} curve(s), {} helper(s), {} config(s)",
                    report.curves, report.helpers, report.configs
                );
            }
        }
    }

    Ok(())
}
