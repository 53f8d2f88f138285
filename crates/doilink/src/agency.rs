//! Registration agency lookup.
//!
//! Every DOI is maintained by one registration agency, and each agency exposes its own metadata
//! schema. The `doiRA` service answers which agency owns a DOI, which is all the
//! [`Resolver`](crate::Resolver) needs to pick an extractor.
//!
//! ```
//! use std::str::FromStr;
//!
//! use doilink::{error::DoilinkError, Agency};
//!
//! assert_eq!(Agency::from_str("DataCite").unwrap(), Agency::DataCite);
//! assert!(matches!(Agency::from_str("mEDRA"), Err(DoilinkError::UnsupportedAgency(_))));
//! ```

use super::*;

/// Registration agencies with a metadata extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Agency {
  /// Crossref, the agency for most journal and conference DOIs
  Crossref,
  /// DataCite, the agency for most dataset and repository DOIs
  DataCite,
}

impl FromStr for Agency {
  type Err = DoilinkError;

  /// Matches the agency names reported by the `doiRA` service exactly.
  fn from_str(s: &str) -> Result<Self> {
    match s {
      "Crossref" => Ok(Self::Crossref),
      "DataCite" => Ok(Self::DataCite),
      other => Err(DoilinkError::UnsupportedAgency(other.to_string())),
    }
  }
}

impl Display for Agency {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Crossref => write!(f, "Crossref"),
      Self::DataCite => write!(f, "DataCite"),
    }
  }
}

/// One entry of the `doiRA` response as it comes over the wire.
#[derive(Debug, Deserialize)]
struct RawAgencyRecord {
  /// The DOI as normalized by the lookup service
  #[serde(rename = "DOI")]
  doi:    String,
  /// Agency name, absent for DOIs the service does not know
  #[serde(rename = "RA")]
  agency: Option<String>,
  /// Lookup status, e.g. `"DOI does not exist"`
  status: Option<String>,
}

/// The owning agency of a DOI along with the DOI as the agency knows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgencyRecord {
  /// Agency-qualified DOI to hand to the extractor
  pub doi:    String,
  /// Agency name, verbatim from the lookup service
  pub agency: String,
}

/// Queries `{agency_url}/{doi}` for the agency that owns `doi`.
///
/// # Errors
///
/// - [`DoilinkError::UpstreamUnavailable`] if the request fails or returns a non-success status
/// - [`DoilinkError::MalformedAgencyResponse`] if the body holds no record with an agency
pub async fn lookup_agency(
  client: &reqwest::Client,
  agency_url: &str,
  doi: &str,
) -> Result<AgencyRecord> {
  let url = config::endpoint(agency_url, doi);
  debug!("Looking up registration agency via: {}", url);

  let response = client
    .get(&url)
    .header(reqwest::header::ACCEPT, "application/json")
    .send()
    .await?
    .error_for_status()?;
  let data = response.bytes().await?;

  trace!("Agency lookup response: {}", String::from_utf8_lossy(&data));

  let records: Vec<RawAgencyRecord> = serde_json::from_slice(&data)
    .map_err(|e| DoilinkError::MalformedAgencyResponse(format!("Failed to parse JSON: {e}")))?;

  let record = records
    .into_iter()
    .next()
    .ok_or_else(|| DoilinkError::MalformedAgencyResponse("no agency records".to_string()))?;

  match record.agency {
    Some(agency) => Ok(AgencyRecord { doi: record.doi, agency }),
    None => Err(DoilinkError::MalformedAgencyResponse(format!(
      "no agency for {}: {}",
      record.doi,
      record.status.as_deref().unwrap_or("no status given")
    ))),
  }
}
