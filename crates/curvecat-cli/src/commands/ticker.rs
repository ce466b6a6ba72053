//! Ticker registry commands
//!
//! Usage:
//!   curvecat ticker add <TICKER>...
//!   curvecat ticker remove <TICKER>...
//!   curvecat ticker list

use crate::commands::store::StoreArgs;
use clap::{Args, Subcommand};
use curvecat_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use curvecat_engine::commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult};

#[derive(Debug, Args)]
pub struct TickerArgs {
    #[command(subcommand)]
    pub command: TickerCommand,
}

#[derive(Debug, Subcommand)]
pub enum TickerCommand {
    /// Register tickers (stops at the first rejected ticker)
    Add {
        #[arg(required = true)]
        tickers: Vec<String>,
    },
    /// Unregister tickers
    Remove {
        #[arg(required = true)]
        tickers: Vec<String>,
    },
    /// List registered tickers
    List,
}

/// Execute ticker command
pub fn execute(store: &StoreArgs, args: TickerArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (_config, mut conn) = store.open()?;

    match args.command {
        TickerCommand::Add { tickers } => {
            if let EngineCommandResult::TickersAdded { count } =
                apply_engine_command(EngineCommand::TickersAdd { tickers }, &mut conn)?
            {
                println!("✓ Added {} ticker(s)", count);
            }
        }
        TickerCommand::Remove { tickers } => {
            let requested = tickers.len();
            if let EngineCommandResult::TickersRemoved { count } =
                apply_engine_command(EngineCommand::TickersRemove { tickers }, &mut conn)?
            {
                println!("✓ Removed {} ticker(s)", count);
                if count < requested {
                    println!("  {} ticker(s) were not registered", requested - count);
                }
            }
        }
        TickerCommand::List => {
            if let EngineQueryResult::TickerList(tickers) =
                apply_engine_query(EngineQuery::TickerList, &conn)?
            {
                for ticker in tickers {
                    println!("{}", ticker);
                }
            }
        }
    }

    Ok(())
}
