//! Xat CLI - The command-line driver for the Xa scanner.
//!
//! This is the main entry point for the xat CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{run_check, CheckArgs},
    scan::{run_scan, ScanArgs},
};
use config::Config;
use error::{Result, XatError};

/// Xat - The Xa scanner driver
///
/// Xat provides utilities for scanning Xa source files into token
/// streams and checking them for lexical errors.
#[derive(Parser, Debug)]
#[command(name = "xat")]
#[command(author = "Xa Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for the Xa scanner", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "XAT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "XAT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "XAT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the xat CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a source file into a token stream
    ///
    /// Tokenizes the input file and prints one token per line, or a
    /// JSON array with --format json.
    Scan(ScanCommand),

    /// Check source files for lexical errors
    ///
    /// Scans each input file and reports a pass or fail line per file
    /// without printing the token streams.
    Check(CheckCommand),
}

/// Arguments for the scan subcommand.
#[derive(Parser, Debug)]
struct ScanCommand {
    /// Input file to scan
    input: PathBuf,

    /// Output format (text, json)
    #[arg(short, long)]
    format: Option<String>,

    /// Include byte offsets in the listing
    #[arg(long)]
    spans: bool,

    /// Drain over-long integer literals instead of splitting them
    #[arg(long)]
    corrected_literal_bounds: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input files to check
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

/// Main entry point for the xat CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
///
/// # Returns
/// * `Result<()>` - Success or an error
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Execute the selected command
    execute_command(cli.command, cli.verbose, config)
}

/// Initialize the logging system.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
///
/// # Returns
/// * `Result<()>` - Success or an error
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| XatError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// # Arguments
/// * `config_path` - Optional path to configuration file
///
/// # Returns
/// * `Result<Config>` - The loaded configuration or an error
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
///
/// # Arguments
/// * `command` - The command to execute
/// * `verbose` - Whether verbose output is enabled
/// * `config` - The application configuration
///
/// # Returns
/// * `Result<()>` - Success or an error
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Scan(args) => execute_scan(args, verbose, config),
        Commands::Check(args) => execute_check(args, verbose, config),
    }
}

/// Execute the scan command.
fn execute_scan(args: ScanCommand, verbose: bool, config: Config) -> Result<()> {
    let scan_args = ScanArgs {
        verbose,
        input: args.input,
        format: args.format,
        show_spans: args.spans,
        corrected_literal_bounds: args.corrected_literal_bounds,
    };
    run_scan(scan_args, config)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, verbose: bool, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        verbose,
        inputs: args.inputs,
    };
    run_check(check_args, config)
}
