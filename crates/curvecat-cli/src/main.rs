//! curvecat CLI
//!
//! Command-line interface for the curve catalog

use clap::{Parser, Subcommand};
use curvecat_core::logging_facility::{init, Profile};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "curvecat")]
#[command(about = "curvecat - Yield curve catalog management", long_about = None)]
struct Cli {
    /// TOML store configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog database path (overrides --config and CURVECAT_DB)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Logging profile: development or production
    #[arg(long, global = true, default_value = "development")]
    log: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create or upgrade the catalog schema
    Migrate,
    /// Curve operations
    Curve(commands::curve::CurveArgs),
    /// Helper operations
    Helper(commands::helper::HelperArgs),
    /// Ticker registry operations
    Ticker(commands::ticker::TickerArgs),
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.log.parse::<Profile>() {
        Ok(profile) => init(profile),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }

    let store = commands::store::StoreArgs {
        config: cli.config,
        db: cli.db,
    };

    let result = match cli.command {
        Commands::Migrate => commands::migrate::execute(&store),
        Commands::Curve(args) => commands::curve::execute(&store, args),
        Commands::Helper(args) => commands::helper::execute(&store, args),
        Commands::Ticker(args) => commands::ticker::execute(&store, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
