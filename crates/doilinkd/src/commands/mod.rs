//! Subcommands of the CLI.

use super::*;

pub mod lookup;
pub mod serve;

pub use lookup::{lookup, LookupArgs};
pub use serve::{serve, ServeArgs};

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Resolve a DOI and print its metadata
  Lookup(LookupArgs),

  /// Run the Slack slash-command webhook server
  Serve(ServeArgs),
}
