//! Extractor for DOIs registered with DataCite.
//!
//! Uses the DataCite JSON representation
//! (<https://api.datacite.org/application/vnd.datacite.datacite+json/{doi}>), whose `id` is the
//! canonical `https://doi.org/...` URL of the work.

use super::*;

/// Description type marking the abstract among a record's descriptions.
const ABSTRACT_DESCRIPTION_TYPE: &str = "Abstract";

/// Identifier scheme that links a creator to an ORCID.
const ORCID_SCHEME: &str = "ORCID";

/// Abstract used when no description is typed as an abstract.
const MISSING_ABSTRACT: &str = "N/A";

/// The subset of a DataCite record needed for [`PaperMetadata`].
#[derive(Debug, Deserialize)]
struct DataciteWork {
  /// Canonical DOI URL
  id:           String,
  /// Titles, the first being the primary one
  #[serde(default)]
  titles:       Vec<DataciteTitle>,
  /// Creators in record order
  #[serde(default)]
  creators:     Vec<DataciteCreator>,
  /// Free-text descriptions of various types
  #[serde(default)]
  descriptions: Vec<DataciteDescription>,
}

/// A title entry.
#[derive(Debug, Deserialize)]
struct DataciteTitle {
  /// The title text
  title: String,
}

/// A creator entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DataciteCreator {
  /// Full name, typically `Family, Given` or an organisation
  name:             Option<String>,
  /// Given (first) name
  given_name:       Option<String>,
  /// Family (last) name
  family_name:      Option<String>,
  /// Persistent identifiers for the creator
  #[serde(default)]
  name_identifiers: Vec<DataciteNameIdentifier>,
}

/// A persistent identifier attached to a creator.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DataciteNameIdentifier {
  /// The identifier value, bare or as a URL
  name_identifier:        String,
  /// Scheme of the identifier, e.g. `ORCID` or `ISNI`
  name_identifier_scheme: Option<String>,
}

/// A description entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DataciteDescription {
  /// The description text
  description:      Option<String>,
  /// Kind of description, e.g. `Abstract` or `SeriesInformation`
  description_type: Option<String>,
}

impl DataciteCreator {
  /// Converts the entry into an [`Author`], identified by its first ORCID if it has one.
  fn into_author(self) -> Author {
    let name = Author::compose_name(
      self.given_name.as_deref(),
      self.family_name.as_deref(),
      self.name.as_deref(),
    );

    match self
      .name_identifiers
      .iter()
      .find(|id| id.name_identifier_scheme.as_deref() == Some(ORCID_SCHEME))
    {
      Some(orcid) => Author::with_orcid(name, &orcid.name_identifier),
      None => Author::new(name),
    }
  }
}

/// The first description typed as an abstract, or `"N/A"`.
fn select_abstract(descriptions: Vec<DataciteDescription>) -> String {
  descriptions
    .into_iter()
    .find(|d| d.description_type.as_deref() == Some(ABSTRACT_DESCRIPTION_TYPE))
    .map(|d| d.description.unwrap_or_default())
    .unwrap_or_else(|| MISSING_ABSTRACT.to_string())
}

/// Extractor for the DataCite REST API.
#[derive(Debug, Clone)]
pub struct DataciteExtractor {
  /// Shared HTTP client
  client:    reqwest::Client,
  /// Base of the JSON representation endpoint
  works_url: String,
}

impl DataciteExtractor {
  /// Creates an extractor using the DataCite endpoint from `config`.
  pub fn new(client: reqwest::Client, config: &Config) -> Self {
    Self { client, works_url: config.datacite_url.clone() }
  }
}

#[async_trait]
impl Extractor for DataciteExtractor {
  async fn extract(&self, doi: &str) -> Result<PaperMetadata> {
    let url = config::endpoint(&self.works_url, doi);
    debug!("Fetching from DataCite via: {}", url);

    let work: DataciteWork = fetch_json(&self.client, &url).await?;

    Ok(PaperMetadata {
      title:         first_title(work.titles.into_iter().map(|t| t.title), doi)?,
      authors:       work.creators.into_iter().map(DataciteCreator::into_author).collect(),
      abstract_text: select_abstract(work.descriptions),
      reference_url: work.id,
    })
  }
}

#[cfg(test)]
mod tests {
  use mockito::Server;
  use serde_json::json;

  use super::*;

  const DOI: &str = "10.5061/dryad.8515";

  fn descriptions(value: serde_json::Value) -> Vec<DataciteDescription> {
    serde_json::from_value(value).unwrap()
  }

  #[test]
  fn test_select_abstract_skips_other_types() {
    let descriptions = descriptions(json!([
      {"descriptionType": "SeriesInformation", "description": "Series 4"},
      {"descriptionType": "Abstract", "description": "X"},
      {"descriptionType": "Abstract", "description": "Y"}
    ]));
    assert_eq!(select_abstract(descriptions), "X");
  }

  #[test]
  fn test_select_abstract_missing() {
    let descriptions = descriptions(json!([{"descriptionType": "Methods", "description": "M"}]));
    assert_eq!(select_abstract(descriptions), "N/A");
    assert_eq!(select_abstract(Vec::new()), "N/A");
  }

  #[test]
  fn test_creator_uses_first_orcid() {
    let creator: DataciteCreator = serde_json::from_value(json!({
      "name": "Lovelace, Ada",
      "givenName": "Ada",
      "familyName": "Lovelace",
      "nameIdentifiers": [
        {"nameIdentifier": "0000-0000-0000-0001", "nameIdentifierScheme": "ISNI"},
        {"nameIdentifier": "0000-0001-2345-6789", "nameIdentifierScheme": "ORCID"},
        {"nameIdentifier": "https://orcid.org/0000-0009-9999-9999", "nameIdentifierScheme": "ORCID"}
      ]
    }))
    .unwrap();

    assert_eq!(creator.into_author(), Author::with_orcid("Ada Lovelace", "0000-0001-2345-6789"));
  }

  #[test]
  fn test_organisation_creator() {
    let creator: DataciteCreator =
      serde_json::from_value(json!({"name": "Dryad Digital Repository", "nameIdentifiers": []}))
        .unwrap();
    assert_eq!(creator.into_author(), Author::new("Dryad Digital Repository"));
  }

  #[traced_test]
  #[tokio::test]
  async fn test_extract() {
    let mut server = Server::new_async().await;
    let mock = server
      .mock("GET", "/application/vnd.datacite.datacite+json/10.5061/dryad.8515")
      .match_header("accept", "application/json")
      .with_status(200)
      .with_header("content-type", "application/json")
      .with_body(
        json!({
          "id": "https://doi.org/10.5061/dryad.8515",
          "titles": [{"title": "Data from: A Study"}, {"title": "Subtitle", "titleType": "Subtitle"}],
          "creators": [
            {
              "givenName": "Ada",
              "familyName": "Lovelace",
              "nameIdentifiers": [
                {"nameIdentifier": "https://orcid.org/0000-0001-2345-6789", "nameIdentifierScheme": "ORCID"}
              ]
            },
            {"givenName": "Charles", "familyName": "Babbage"}
          ],
          "descriptions": [
            {"descriptionType": "SeriesInformation", "description": "Series"},
            {"descriptionType": "Abstract", "description": "X"}
          ]
        })
        .to_string(),
      )
      .create_async()
      .await;

    let extractor =
      DataciteExtractor::new(reqwest::Client::new(), &Config::with_base_url(&server.url()));
    let paper = extractor.extract(DOI).await.unwrap();

    mock.assert_async().await;
    assert_eq!(paper, PaperMetadata {
      reference_url: "https://doi.org/10.5061/dryad.8515".to_string(),
      title:         "Data from: A Study".to_string(),
      authors:       vec![
        Author::with_orcid("Ada Lovelace", "https://orcid.org/0000-0001-2345-6789"),
        Author::new("Charles Babbage"),
      ],
      abstract_text: "X".to_string(),
    });
  }

  #[tokio::test]
  async fn test_extract_unavailable() {
    let mut server = Server::new_async().await;
    server
      .mock("GET", "/application/vnd.datacite.datacite+json/10.5061/dryad.8515")
      .with_status(500)
      .create_async()
      .await;

    let extractor =
      DataciteExtractor::new(reqwest::Client::new(), &Config::with_base_url(&server.url()));
    assert!(matches!(extractor.extract(DOI).await, Err(DoilinkError::UpstreamUnavailable(_))));
  }
}
