//! CLI Adapter.

mod drivers;
mod show;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "dbconf")]
#[command(version)]
#[command(
    about = "Resolve per-environment database configuration for migrations",
    long_about = None
)]
struct Cli {
    /// Folder containing config/ and migrations/
    #[arg(short, long, default_value = "db", global = true)]
    path: PathBuf,
    /// Which config/<env>.toml to use
    #[arg(short, long, default_value = "development", global = true)]
    env: String,
    /// Emit debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved configuration
    #[clap(visible_alias = "s")]
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Verify the configuration resolves to a usable driver
    #[clap(visible_alias = "c")]
    Check,
    /// List the drivers known without overrides
    Drivers,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Show { json } => show::run_show(&cli.path, &cli.env, json),
        Commands::Check => show::run_check(&cli.path, &cli.env),
        Commands::Drivers => {
            drivers::run_drivers();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_writer(std::io::stderr).with_env_filter(filter).init();
}
