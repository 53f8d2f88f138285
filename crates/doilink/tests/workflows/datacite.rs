use super::*;

const DOI: &str = "10.5281/zenodo.1234";

#[traced_test]
#[tokio::test]
async fn test_datacite_resolution() -> TestResult<()> {
  let mut server = mock_agency(DOI, "DataCite").await;
  let work = server
    .mock("GET", "/application/vnd.datacite.datacite+json/10.5281/zenodo.1234")
    .match_header("accept", "application/json")
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(
      json!({
        "id": "https://doi.org/10.5281/zenodo.1234",
        "titles": [{"title": "Sample Dataset"}],
        "creators": [{
          "name": "Lovelace, Ada",
          "givenName": "Ada",
          "familyName": "Lovelace",
          "nameIdentifiers": [{"nameIdentifier": "0000-0001-2345-6789", "nameIdentifierScheme": "ORCID"}]
        }],
        "descriptions": [{"descriptionType": "Other", "description": "Not the abstract"}]
      })
      .to_string(),
    )
    .expect(1)
    .create_async()
    .await;

  let paper = resolver_for(&server).resolve(DOI).await?;

  work.assert_async().await;
  assert_eq!(paper.title, "Sample Dataset");
  assert_eq!(paper.abstract_text, "N/A");
  assert_eq!(paper.authors, vec![Author::with_orcid("Ada Lovelace", "0000-0001-2345-6789")]);
  assert_eq!(paper.author_label(), "Author");
  assert_eq!(paper.render_authors(&Markdown), "[Ada Lovelace](https://orcid.org/0000-0001-2345-6789)");
  assert_eq!(paper.render_title(&Markdown), "**Sample Dataset**");
  Ok(())
}

#[tokio::test]
async fn test_unsupported_agency() {
  let server = mock_agency("10.11501/3140078", "JaLC").await;

  let result = resolver_for(&server).resolve("10.11501/3140078").await;
  assert!(matches!(result, Err(DoilinkError::UnsupportedAgency(agency)) if agency == "JaLC"));
}
