//! KeyLibrary - assign keyboard keys to labels from the terminal
//!
//! Without a subcommand this launches the terminal UI; subcommands give
//! headless access to the key catalog and key list validation.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

use keylibrary::app;
use keylibrary::cli::{CliResult, KeysArgs, ValidateArgs};
use keylibrary::config::Config;
use keylibrary::constants::{APP_NAME, LOG_FILE_NAME};
use keylibrary::logging::{self, LogTarget};

/// KeyLibrary - assign keyboard keys to labels and see which keys are taken
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Key list file (one key per line); overrides the config file
    #[arg(short, long, value_name = "FILE")]
    keys: Option<PathBuf>,

    /// Allow more than one label per key
    #[arg(short, long)]
    multi: bool,

    /// Config file to use instead of the platform default
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a key list file
    Validate(ValidateArgs),
    /// List the built-in key catalog
    Keys(KeysArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        if let Err(e) = logging::init(LogTarget::Stderr, cli.verbose) {
            eprintln!("Warning: {e:#}");
        }
        let result: CliResult<()> = match command {
            Command::Validate(args) => args.execute(),
            Command::Keys(args) => args.execute(),
        };
        if let Err(e) = result {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
        return Ok(());
    }

    let log_path = Config::config_dir()?.join(LOG_FILE_NAME);
    logging::init(LogTarget::File(&log_path), cli.verbose)?;
    info!("Starting {} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {e:#}");
            eprintln!("Warning: Failed to load config: {e:#}");
            Config::default()
        }),
    };

    // Command line flags take precedence over the config file
    if let Some(keys) = cli.keys {
        config.registry.keys_file = Some(keys);
    }
    if cli.multi {
        config.registry.allow_multi = true;
    }

    app::launch(config)
}
