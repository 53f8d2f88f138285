//! Dispatch from a raw DOI to the extractor of its registration agency.
//!
//! A [`Resolver`] owns one HTTP client and a fixed table from [`Agency`] to [`Extractor`]. Each
//! call to [`Resolver::resolve`] is independent: it asks the agency lookup service who owns the
//! DOI, then hands the agency-qualified DOI to the registered extractor and returns its result
//! untouched.
//!
//! # Examples
//!
//! ```no_run
//! use doilink::{Config, Resolver};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = Resolver::from_config(&Config::load(None)?);
//!
//! let crossref = resolver.resolve("10.1145/3453483.3454092").await?;
//! let datacite = resolver.resolve("10.5061/dryad.8515").await?;
//! println!("{} / {}", crossref.title, datacite.title);
//! # Ok(())
//! # }
//! ```

use super::*;
use crate::extractor::{CrossrefExtractor, DataciteExtractor, Extractor};

/// Resolves DOIs into [`PaperMetadata`] through their registration agency.
pub struct Resolver {
  /// HTTP client shared with the built-in extractors
  client:     reqwest::Client,
  /// Base of the registration agency lookup service
  agency_url: String,
  /// Extractor registered for each supported agency
  extractors: HashMap<Agency, Box<dyn Extractor>>,
}

impl Resolver {
  /// Creates a resolver against the public production endpoints.
  pub fn new() -> Self { Self::from_config(&Config::default()) }

  /// Creates a resolver with the Crossref and DataCite extractors, using the endpoints in
  /// `config`.
  pub fn from_config(config: &Config) -> Self {
    let client = reqwest::Client::new();
    let mut extractors: HashMap<Agency, Box<dyn Extractor>> = HashMap::new();
    extractors.insert(Agency::Crossref, Box::new(CrossrefExtractor::new(client.clone(), config)));
    extractors.insert(Agency::DataCite, Box::new(DataciteExtractor::new(client.clone(), config)));

    Self { client, agency_url: config.agency_url.clone(), extractors }
  }

  /// Replaces the extractor used for `agency`.
  pub fn with_extractor(mut self, agency: Agency, extractor: impl Extractor + 'static) -> Self {
    self.extractors.insert(agency, Box::new(extractor));
    self
  }

  /// Agencies that currently have an extractor.
  pub fn agencies(&self) -> impl Iterator<Item = &Agency> { self.extractors.keys() }

  /// Asks the lookup service which agency owns `doi`.
  pub async fn lookup_agency(&self, doi: &str) -> Result<AgencyRecord> {
    agency::lookup_agency(&self.client, &self.agency_url, doi).await
  }

  /// Resolves `doi` into normalized metadata.
  ///
  /// # Errors
  ///
  /// - [`DoilinkError::UpstreamUnavailable`] or [`DoilinkError::MalformedAgencyResponse`] from
  ///   the agency lookup
  /// - [`DoilinkError::UnsupportedAgency`] if the owning agency has no extractor, in which case
  ///   no extractor runs
  /// - Whatever the extractor fails with, unchanged
  pub async fn resolve(&self, doi: &str) -> Result<PaperMetadata> {
    let record = self.lookup_agency(doi).await?;
    let agency = Agency::from_str(&record.agency)?;
    let extractor = self
      .extractors
      .get(&agency)
      .ok_or_else(|| DoilinkError::UnsupportedAgency(record.agency.clone()))?;

    debug!("Resolving {} through {}", record.doi, agency);
    extractor.extract(&record.doi).await
  }
}

impl Default for Resolver {
  fn default() -> Self { Self::new() }
}

impl std::fmt::Debug for Resolver {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Resolver")
      .field("agency_url", &self.agency_url)
      .field("agencies", &self.extractors.keys().collect::<Vec<_>>())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
  };

  use mockito::{Server, ServerGuard};

  use super::*;

  /// Extractor that counts its calls and echoes the DOI it was given.
  #[derive(Clone, Default)]
  struct CountingExtractor {
    calls: Arc<AtomicUsize>,
    seen:  Arc<std::sync::Mutex<Vec<String>>>,
  }

  #[async_trait]
  impl Extractor for CountingExtractor {
    async fn extract(&self, doi: &str) -> Result<PaperMetadata> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      self.seen.lock().unwrap().push(doi.to_string());
      Ok(PaperMetadata {
        reference_url: format!("https://doi.org/{doi}"),
        title:         "Counted".to_string(),
        authors:       Vec::new(),
        abstract_text: String::new(),
      })
    }
  }

  /// Extractor that always fails with malformed content.
  struct FailingExtractor;

  #[async_trait]
  impl Extractor for FailingExtractor {
    async fn extract(&self, _doi: &str) -> Result<PaperMetadata> {
      Err(DoilinkError::MalformedUpstreamContent("broken".to_string()))
    }
  }

  async fn agency_server(doi: &str, body: &str) -> ServerGuard {
    let mut server = Server::new_async().await;
    server
      .mock("GET", format!("/doiRA/{doi}").as_str())
      .with_status(200)
      .with_header("content-type", "application/json")
      .with_body(body)
      .create_async()
      .await;
    server
  }

  #[traced_test]
  #[tokio::test]
  async fn test_dispatches_to_registered_agency_only() {
    let server =
      agency_server("10.5061/DRYAD.8515", r#"[{"DOI": "10.5061/dryad.8515", "RA": "DataCite"}]"#)
        .await;
    let crossref = CountingExtractor::default();
    let datacite = CountingExtractor::default();
    let resolver = Resolver::from_config(&Config::with_base_url(&server.url()))
      .with_extractor(Agency::Crossref, crossref.clone())
      .with_extractor(Agency::DataCite, datacite.clone());

    let paper = resolver.resolve("10.5061/DRYAD.8515").await.unwrap();

    assert_eq!(paper.reference_url, "https://doi.org/10.5061/dryad.8515");
    assert_eq!(datacite.calls.load(Ordering::SeqCst), 1);
    assert_eq!(crossref.calls.load(Ordering::SeqCst), 0);
    // The agency-normalized DOI is what reaches the extractor
    assert_eq!(datacite.seen.lock().unwrap().as_slice(), ["10.5061/dryad.8515"]);
  }

  #[tokio::test]
  async fn test_unsupported_agency_never_extracts() {
    let server =
      agency_server("10.1392/onix", r#"[{"DOI": "10.1392/onix", "RA": "mEDRA"}]"#).await;
    let crossref = CountingExtractor::default();
    let datacite = CountingExtractor::default();
    let resolver = Resolver::from_config(&Config::with_base_url(&server.url()))
      .with_extractor(Agency::Crossref, crossref.clone())
      .with_extractor(Agency::DataCite, datacite.clone());

    let result = resolver.resolve("10.1392/onix").await;

    assert!(matches!(result, Err(DoilinkError::UnsupportedAgency(name)) if name == "mEDRA"));
    assert_eq!(crossref.calls.load(Ordering::SeqCst), 0);
    assert_eq!(datacite.calls.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn test_extractor_errors_pass_through() {
    let server =
      agency_server("10.1145/1/2", r#"[{"DOI": "10.1145/1/2", "RA": "Crossref"}]"#).await;
    let resolver = Resolver::from_config(&Config::with_base_url(&server.url()))
      .with_extractor(Agency::Crossref, FailingExtractor);

    let result = resolver.resolve("10.1145/1/2").await;
    assert!(matches!(result, Err(DoilinkError::MalformedUpstreamContent(m)) if m == "broken"));
  }

  #[tokio::test]
  async fn test_missing_agency_record() {
    let server = agency_server("10.1/none", "[]").await;
    let resolver = Resolver::from_config(&Config::with_base_url(&server.url()));

    let result = resolver.resolve("10.1/none").await;
    assert!(matches!(result, Err(DoilinkError::MalformedAgencyResponse(_))));
  }

  #[test]
  fn test_default_agencies() {
    let resolver = Resolver::new();
    let mut agencies = resolver.agencies().map(ToString::to_string).collect::<Vec<_>>();
    agencies.sort();
    assert_eq!(agencies, ["Crossref", "DataCite"]);
  }
}
