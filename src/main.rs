//! Fightlink main entry point
//!
//! Two independent invocations: `scrape` runs the collection pipeline and
//! writes the intermediate JSON file; `load` reads that file into SQLite.

use anyhow::Context;
use clap::{Parser, Subcommand};
use fightlink::config::{load_config_with_hash, Config};
use fightlink::pipeline::run_scrape;
use fightlink::records::{read_merged, write_merged};
use fightlink::storage::{ProfileStore, SqliteStorage};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Fightlink: fighter profile collection pipeline
#[derive(Parser, Debug)]
#[command(name = "fightlink")]
#[command(version)]
#[command(about = "Scrape, merge, and load fighter profile links", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scrape the listing, resolve secondary profiles, write the merged JSON
    Scrape {
        /// Path to TOML configuration file
        #[arg(value_name = "CONFIG")]
        config: PathBuf,
    },

    /// Load the merged JSON file into the database
    Load {
        /// Path to TOML configuration file
        #[arg(value_name = "CONFIG")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Scrape { config } => {
            let config = load(&config)?;
            handle_scrape(&config).await
        }
        Commands::Load { config } => {
            let config = load(&config)?;
            handle_load(&config)
        }
    }
}

/// Loads and validates the configuration, logging its content hash
fn load(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);
    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("fightlink=info,warn"),
            1 => EnvFilter::new("fightlink=debug,info"),
            2 => EnvFilter::new("fightlink=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the scrape subcommand: pipeline -> intermediate JSON file
async fn handle_scrape(config: &Config) -> anyhow::Result<()> {
    let merged = run_scrape(config)
        .await
        .context("scrape pipeline failed")?;

    let path = Path::new(&config.output.merged_path);
    write_merged(path, &merged)
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!("Merged data saved to {}", path.display());
    Ok(())
}

/// Handles the load subcommand: intermediate JSON file -> database
fn handle_load(config: &Config) -> anyhow::Result<()> {
    let merged_path = Path::new(&config.output.merged_path);
    let records = read_merged(merged_path)
        .with_context(|| format!("failed to read {}", merged_path.display()))?;
    tracing::info!("Read {} records from {}", records.len(), merged_path.display());

    let mut storage = SqliteStorage::new(Path::new(&config.output.database_path))
        .context("failed to open database")?;
    let inserted = storage
        .replace_all(&records)
        .context("failed to load records")?;

    tracing::info!(
        "Loaded {} rows into {}",
        inserted,
        config.output.database_path
    );
    Ok(())
}
