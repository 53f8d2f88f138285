//! Error types for the doilink binary.

use thiserror::Error;

use super::*;

/// Result alias used throughout the binary.
pub type Result<T> = core::result::Result<T, DoilinkdError>;

/// Failures of the CLI and the webhook server.
#[derive(Error, Debug)]
pub enum DoilinkdError {
  /// Resolution or configuration failure from the library.
  #[error(transparent)]
  Doilink(#[from] DoilinkError),

  /// Binding or serving a socket failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// Rendering output as JSON failed.
  #[error(transparent)]
  Json(#[from] serde_json::Error),
}
