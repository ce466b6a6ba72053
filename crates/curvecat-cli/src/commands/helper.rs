//! Helper commands
//!
//! Usage: curvecat helper delete (--id <ID> | --name <NAME> --curve <CURVE>)

use crate::commands::store::StoreArgs;
use clap::{ArgGroup, Args, Subcommand};
use curvecat_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use curvecat_store::repo::resolver::{require_curve_id, require_helper_id};

#[derive(Debug, Args)]
pub struct HelperArgs {
    #[command(subcommand)]
    pub command: HelperCommand,
}

#[derive(Debug, Subcommand)]
pub enum HelperCommand {
    /// Delete a helper and its configs
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").required(true).args(["id", "name"])))]
pub struct DeleteArgs {
    /// Helper id
    #[arg(long)]
    pub id: Option<i64>,

    /// Helper name
    #[arg(long, requires = "curve")]
    pub name: Option<String>,

    /// Name of the curve owning the helper
    #[arg(long)]
    pub curve: Option<String>,
}

/// Execute helper command
pub fn execute(store: &StoreArgs, args: HelperArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (_config, mut conn) = store.open()?;

    match args.command {
        HelperCommand::Delete(target) => {
            let helper_id = match (target.id, target.name, target.curve) {
                (Some(id), _, _) => id,
                (None, Some(name), Some(curve)) => {
                    let curve_id = require_curve_id(&conn, &curve)?;
                    require_helper_id(&conn, Some(curve_id), &name)?
                }
                _ => return Err("either --id or --name with --curve is required".into()),
            };
            let result =
                apply_engine_command(EngineCommand::HelperDelete { helper_id }, &mut conn)?;
            if let EngineCommandResult::Deleted(report) = result {
                println!(
                    "✓ Deleted {} helper(s), {} config(s)",
                    report.helpers, report.configs
                );
            }
        }
    }

    Ok(())
}
