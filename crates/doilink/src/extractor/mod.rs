//! Agency-specific metadata extractors.
//!
//! Each registration agency publishes its own schema. An [`Extractor`] knows one of them and turns
//! a DOI into a [`PaperMetadata`], fetching whatever upstream documents it needs along the way.
//!
//! - [`CrossrefExtractor`]: the Crossref works API, with inline JATS abstracts and a landing-page
//!   fallback for publishers that omit them
//! - [`DataciteExtractor`]: the DataCite JSON representation
//!
//! # Examples
//!
//! Implementing an extractor for testing or for another source:
//!
//! ```
//! use async_trait::async_trait;
//! use doilink::{error::Result, prelude::*, Author};
//!
//! struct Fixed;
//!
//! #[async_trait]
//! impl Extractor for Fixed {
//!   async fn extract(&self, doi: &str) -> Result<PaperMetadata> {
//!     Ok(PaperMetadata {
//!       reference_url: format!("https://doi.org/{doi}"),
//!       title:         "Fixed".to_string(),
//!       authors:       vec![Author::new("Ada Lovelace")],
//!       abstract_text: String::new(),
//!     })
//!   }
//! }
//! ```

use super::*;

mod crossref;
mod datacite;

pub use crossref::CrossrefExtractor;
pub use datacite::DataciteExtractor;

/// Converts one agency's record for a DOI into [`PaperMetadata`].
#[async_trait]
pub trait Extractor: Send + Sync {
  /// Fetches and normalizes the metadata for an agency-qualified DOI.
  ///
  /// # Errors
  ///
  /// Any failure aborts the extraction; implementations never return partial metadata.
  async fn extract(&self, doi: &str) -> Result<PaperMetadata>;
}

/// Fetches `url` as JSON and decodes it into `T`.
///
/// Network failures and non-success statuses are [`DoilinkError::UpstreamUnavailable`]; a body
/// that does not decode is [`DoilinkError::MalformedUpstreamContent`].
pub(crate) async fn fetch_json<T: DeserializeOwned>(
  client: &reqwest::Client,
  url: &str,
) -> Result<T> {
  let response = client
    .get(url)
    .header(reqwest::header::ACCEPT, "application/json")
    .send()
    .await?
    .error_for_status()?;
  debug!("{} responded with {}", url, response.status());

  let data = response.bytes().await?;
  trace!("Response from {}: {}", url, String::from_utf8_lossy(&data));

  serde_json::from_slice(&data)
    .map_err(|e| DoilinkError::MalformedUpstreamContent(format!("Failed to parse JSON: {e}")))
}

/// The first listed title, which both agencies treat as the primary one.
pub(crate) fn first_title(titles: impl IntoIterator<Item = String>, doi: &str) -> Result<String> {
  titles
    .into_iter()
    .next()
    .ok_or_else(|| DoilinkError::MalformedUpstreamContent(format!("no title listed for {doi}")))
}
