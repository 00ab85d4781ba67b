//! keylayout-klc - convert macOS keyboard layouts into Windows KLC sources
//!
//! Reads an XML-based `.keylayout` file and writes the equivalent Microsoft
//! Keyboard Layout Creator source, ready to be built into a keyboard DLL.

use clap::{Parser, Subcommand};
use keylayout_klc::cli::{CliError, CliResult, ConfigArgs, ConvertArgs, InspectArgs};
use keylayout_klc::config::Config;
use keylayout_klc::constants::APP_BINARY_NAME;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Convert macOS .keylayout keyboard layouts into Windows .klc sources
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this configuration file instead of the default one
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a .keylayout file into a .klc file
    Convert(ConvertArgs),
    /// Show how a .keylayout file resolves
    Inspect(InspectArgs),
    /// Show or change the configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing (stdout is reserved for results)
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate configuration: {e}")))?,
    };

    match &cli.command {
        Command::Convert(args) => args.execute(&load_config(&config_path)?),
        Command::Inspect(args) => args.execute(&load_config(&config_path)?),
        Command::Config(args) => args.execute(&config_path),
    }
}

fn load_config(path: &Path) -> CliResult<Config> {
    Config::load_or_default(path)
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}
