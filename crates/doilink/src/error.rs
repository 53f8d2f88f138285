//! Error types for the doilink library.
//!
//! Every failure during resolution aborts the whole call; there is no partial metadata. The
//! variants map onto the places a resolution can go wrong:
//! - An upstream service could not be reached or answered with a non-success status
//! - The registration agency lookup had nothing usable in it
//! - The agency is one we have no extractor for
//! - An upstream document lacked the structure an extractor relies on
//!
//! # Examples
//!
//! ```no_run
//! use doilink::{error::DoilinkError, Resolver};
//!
//! # async fn example() {
//! match Resolver::new().resolve("10.1234/unknown").await {
//!   Err(DoilinkError::UnsupportedAgency(agency)) => println!("no extractor for {agency}"),
//!   Err(DoilinkError::UpstreamUnavailable(e)) => println!("network error: {e}"),
//!   Err(e) => println!("other error: {e}"),
//!   Ok(paper) => println!("{}", paper.title),
//! }
//! # }
//! ```

use thiserror::Error;

/// Error type alias used for the [`doilink`](crate) crate.
pub type Result<T> = core::result::Result<T, DoilinkError>;

/// Errors that can occur while resolving a DOI.
#[derive(Error, Debug)]
pub enum DoilinkError {
  /// A request to an upstream service failed.
  ///
  /// Covers connection failures as well as any non-2xx status from the agency lookup, the
  /// Crossref or DataCite APIs, or a publisher landing page.
  #[error("upstream request failed: {0}")]
  UpstreamUnavailable(#[from] reqwest::Error),

  /// The registration agency lookup returned no usable record.
  ///
  /// The string describes what was missing, e.g. the lookup service's own status text for a DOI
  /// it does not know.
  #[error("agency lookup returned no usable record: {0}")]
  MalformedAgencyResponse(String),

  /// The DOI is registered with an agency that has no extractor.
  #[error("registration agency `{0}` is not supported")]
  UnsupportedAgency(String),

  /// An upstream document is missing an element the extractor depends on.
  #[error("malformed upstream content: {0}")]
  MalformedUpstreamContent(String),

  /// Reading a configuration file failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// A configuration file is not valid TOML for [`Config`](crate::Config).
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),
}
