use super::*;

const DOI: &str = "10.1145/3453483.3454092";

fn acm_work(publisher: &str) -> String {
  json!({
    "status": "ok",
    "message": {
      "URL": "http://dx.doi.org/10.1145/3453483.3454092",
      "DOI": DOI,
      "title": ["Specification-guided component-based synthesis from effectful libraries"],
      "publisher": publisher,
      "author": [
        {"given": "Ashish", "family": "Mishra", "ORCID": "http://orcid.org/0000-0002-3484-2192"},
        {"given": "Suresh", "family": "Jagannathan"}
      ]
    }
  })
  .to_string()
}

#[traced_test]
#[tokio::test]
async fn test_acm_publisher_name_is_matched_exactly() -> TestResult<()> {
  let mut server = mock_agency(DOI, "Crossref").await;
  let work = server
    .mock("GET", "/works/10.1145%2F3453483.3454092")
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(acm_work("Association for Computing Machinery (ACM)"))
    .expect(1)
    .create_async()
    .await;
  let landing = server.mock("GET", "/10.1145/3453483.3454092").expect(0).create_async().await;

  let paper = resolver_for(&server).resolve(DOI).await?;

  work.assert_async().await;
  landing.assert_async().await;
  assert_eq!(paper.abstract_text, "");
  assert_eq!(paper.author_label(), "Authors");
  assert_eq!(
    paper.render_authors(&Markdown),
    "[Ashish Mishra](http://orcid.org/0000-0002-3484-2192), Suresh Jagannathan"
  );
  assert_eq!(
    paper.render_reference(&Markdown),
    "[http://dx.doi.org/10.1145/3453483.3454092](http://dx.doi.org/10.1145/3453483.3454092)"
  );
  Ok(())
}

#[tokio::test]
async fn test_acm_abstract_is_scraped() -> TestResult<()> {
  let mut server = mock_agency(DOI, "Crossref").await;
  server
    .mock("GET", "/works/10.1145%2F3453483.3454092")
    .with_status(200)
    .with_body(acm_work("ACM"))
    .create_async()
    .await;
  let landing = server
    .mock("GET", "/10.1145/3453483.3454092")
    .match_header("user-agent", Matcher::Regex("^[A-Za-z0-9]{16}$".to_string()))
    .with_status(200)
    .with_header("content-type", "text/html; charset=utf-8")
    .with_body(
      r#"<!DOCTYPE html><html><body><section>
        <div class="abstractSection abstractInFull">
          <p>Mainstream programming languages provide libraries.</p>
          <p>We present a synthesis procedure.</p>
        </div>
      </section></body></html>"#,
    )
    .expect(1)
    .create_async()
    .await;

  let paper = resolver_for(&server).resolve(DOI).await?;

  landing.assert_async().await;
  assert_eq!(
    paper.abstract_text,
    "Mainstream programming languages provide libraries.\n\nWe present a synthesis procedure."
  );
  Ok(())
}

#[tokio::test]
async fn test_crossref_outage() {
  let mut server = mock_agency(DOI, "Crossref").await;
  server.mock("GET", "/works/10.1145%2F3453483.3454092").with_status(502).create_async().await;

  let result = resolver_for(&server).resolve(DOI).await;
  assert!(matches!(result, Err(DoilinkError::UpstreamUnavailable(_))));
}

#[ignore = "Reaches the live doi.org and Crossref services."]
#[tokio::test]
async fn test_live_crossref_resolution() -> TestResult<()> {
  let paper = doilink::resolve(DOI).await?;
  assert!(!paper.title.is_empty());
  assert!(!paper.authors.is_empty());
  Ok(())
}
