//! Command line interface and chat surfaces for the doilink DOI resolver.
//!
//! This crate wraps the `doilink` library in the places people ask for a DOI:
//! - A `lookup` command that prints a resolved DOI for the terminal, or as the JSON a Slack or
//!   Discord message would carry
//! - A `serve` command running a Slack slash-command webhook
//!
//! # Usage
//!
//! ```bash
//! # Resolve a DOI and print it
//! doilink lookup 10.1145/3453483.3454092
//!
//! # Show the Discord embed for a DataCite DOI
//! doilink lookup 10.5061/dryad.8515 --surface discord
//!
//! # Answer Slack's `/doi` command on port 3000
//! SLACK_HOST=0.0.0.0 SLACK_PORT=3000 doilink serve
//! ```
//!
//! Endpoints can be overridden with a TOML file passed through `--config`, or placed at the
//! platform default location. Logging verbosity is controlled with `-v` or `RUST_LOG`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{path::PathBuf, sync::Arc};

use clap::{builder::ArgAction, Args, Parser, Subcommand, ValueEnum};
use console::style;
use doilink::{prelude::*, Config, Resolver};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod server;
pub mod surface;

use crate::{commands::*, error::*, surface::*};

/// Prefix for success messages
static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
static ERROR_PREFIX: &str = "✗ ";
/// Indentation for detail lines under a heading
static DETAIL_INDENT: &str = "   ";

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Resolve DOIs and present them in chat and on the terminal")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to a TOML file overriding the upstream endpoints. Defaults to the platform config
  /// directory when that file exists.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
///
/// `RUST_LOG` takes precedence when set. Logs go to stderr so JSON output stays clean.
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Entry point for the doilink CLI
///
/// # Errors
///
/// Returns [`DoilinkdError`] when the configuration cannot be loaded, a lookup fails, or the
/// server cannot bind its address.
#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let config = Config::load(cli.config.as_deref())?;
  debug!("Using configuration: {:?}", config);
  let resolver = Resolver::from_config(&config);

  match cli.command {
    Commands::Lookup(args) => lookup(&resolver, args).await,
    Commands::Serve(args) => serve(resolver, args).await,
  }
}
