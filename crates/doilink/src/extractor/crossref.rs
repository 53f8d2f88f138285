//! Extractor for DOIs registered with Crossref.
//!
//! Metadata comes from the Crossref works API (<https://api.crossref.org/works>). The abstract is
//! resolved by the first strategy that applies:
//!
//! 1. The work carries an inline abstract, which is JATS-flavoured XML. The text of the top-level
//!    `<jats:p>` (or plain `<p>`) elements is used, or `"N/A"` if there are none.
//! 2. The publisher is known to leave abstracts out of its deposits. The abstract is scraped from
//!    the DOI landing page instead.
//! 3. Otherwise there is no abstract and it is left empty.
//!
//! Publisher names are matched exactly, so `"Association for Computing Machinery (ACM)"` does not
//! trigger the `"ACM"` fallback.

use quick_xml::{events::Event, Reader};
use scraper::{Html, Selector};

use super::*;

/// XML tags that may hold an inline abstract, in priority order.
const INLINE_ABSTRACT_TAGS: [&str; 2] = ["jats:p", "p"];

/// Abstract used when inline markup has none of the [`INLINE_ABSTRACT_TAGS`].
const MISSING_ABSTRACT: &str = "N/A";

/// CSS selector for the landing-page element holding an ACM abstract.
const ACM_ABSTRACT_SECTION: &str = ".abstractSection";

/// Separator between abstract paragraphs.
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Length of the random `User-Agent` sent to publisher landing pages.
const USER_AGENT_LENGTH: usize = 16;

lazy_static! {
  /// Characters a random `User-Agent` is drawn from.
  static ref USER_AGENT_ALPHABET: Vec<char> =
    ('A'..='Z').chain('a'..='z').chain('0'..='9').collect();
}

/// Ways to recover an abstract the Crossref record does not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AbstractFallback {
  /// Scrape `.abstractSection` from the ACM Digital Library landing page
  AcmLandingPage,
}

/// Publishers whose deposits omit abstracts, keyed by the exact `publisher` value.
const ABSTRACT_FALLBACKS: &[(&str, AbstractFallback)] = &[("ACM", AbstractFallback::AcmLandingPage)];

/// Envelope of a works API response.
#[derive(Debug, Deserialize)]
struct WorkMessage {
  /// The work itself
  message: Work,
}

/// The subset of a Crossref work needed for [`PaperMetadata`].
#[derive(Debug, Deserialize)]
struct Work {
  /// Landing URL for the work, usually `https://dx.doi.org/...`
  #[serde(rename = "URL")]
  url:             String,
  /// Titles, the first being the primary one
  #[serde(default)]
  title:           Vec<String>,
  /// Contributors in deposit order; absent for some works
  #[serde(default)]
  author:          Vec<CrossrefAuthor>,
  /// Inline abstract markup, if deposited
  #[serde(rename = "abstract")]
  abstract_markup: Option<String>,
  /// Publisher name as deposited
  publisher:       Option<String>,
}

/// A contributor entry from a Crossref work.
#[derive(Debug, Deserialize)]
struct CrossrefAuthor {
  /// Given (first) name
  given:  Option<String>,
  /// Family (last) name
  family: Option<String>,
  /// Literal name, used by organisational contributors
  name:   Option<String>,
  /// ORCID, either bare or as a URL
  #[serde(rename = "ORCID")]
  orcid:  Option<String>,
}

impl CrossrefAuthor {
  /// Converts the entry into an [`Author`], identified when it carries an ORCID.
  fn into_author(self) -> Author {
    let name =
      Author::compose_name(self.given.as_deref(), self.family.as_deref(), self.name.as_deref());
    match self.orcid {
      Some(orcid) => Author::with_orcid(name, &orcid),
      None => Author::new(name),
    }
  }
}

/// Extractor for the Crossref works API.
#[derive(Debug, Clone)]
pub struct CrossrefExtractor {
  /// Shared HTTP client
  client:      reqwest::Client,
  /// Base of the works API
  works_url:   String,
  /// Base of the DOI resolver used to reach landing pages
  landing_url: String,
}

impl CrossrefExtractor {
  /// Creates an extractor using the Crossref and landing-page endpoints from `config`.
  pub fn new(client: reqwest::Client, config: &Config) -> Self {
    Self {
      client,
      works_url: config.crossref_url.clone(),
      landing_url: config.landing_url.clone(),
    }
  }

  /// Picks and runs the abstract strategy for `work`.
  async fn resolve_abstract(&self, doi: &str, work: &Work) -> Result<String> {
    if let Some(markup) = &work.abstract_markup {
      debug!("Using inline abstract for {}", doi);
      return parse_inline_abstract(markup);
    }

    match work.publisher.as_deref().and_then(abstract_fallback) {
      Some(AbstractFallback::AcmLandingPage) => {
        debug!("No inline abstract for {}, scraping the ACM landing page", doi);
        self.fetch_acm_abstract(doi).await
      },
      None => Ok(String::new()),
    }
  }

  /// Fetches the landing page for `doi` and scrapes the ACM abstract section from it.
  async fn fetch_acm_abstract(&self, doi: &str) -> Result<String> {
    let url = config::endpoint(&self.landing_url, doi);
    let html = self
      .client
      .get(&url)
      .header(reqwest::header::USER_AGENT, random_user_agent())
      .send()
      .await?
      .error_for_status()?
      .text()
      .await?;
    trace!("Landing page for {}: {} bytes", doi, html.len());

    parse_acm_abstract(&html)
  }
}

#[async_trait]
impl Extractor for CrossrefExtractor {
  async fn extract(&self, doi: &str) -> Result<PaperMetadata> {
    let url = config::endpoint(&self.works_url, &urlencoding::encode(doi));
    debug!("Fetching from Crossref via: {}", url);

    let WorkMessage { message: work } = fetch_json(&self.client, &url).await?;
    let abstract_text = self.resolve_abstract(doi, &work).await?;

    Ok(PaperMetadata {
      title: first_title(work.title, doi)?,
      authors: work.author.into_iter().map(CrossrefAuthor::into_author).collect(),
      reference_url: work.url,
      abstract_text,
    })
  }
}

/// Looks up the fallback registered for an exact publisher name.
fn abstract_fallback(publisher: &str) -> Option<AbstractFallback> {
  ABSTRACT_FALLBACKS.iter().find(|(name, _)| *name == publisher).map(|(_, fallback)| *fallback)
}

/// A fresh random identifier so landing pages do not see a fixed bot signature.
fn random_user_agent() -> String { nanoid::nanoid!(USER_AGENT_LENGTH, &USER_AGENT_ALPHABET[..]) }

/// Extracts abstract text from inline Crossref markup.
///
/// The first tag of [`INLINE_ABSTRACT_TAGS`] that occurs at the top level wins; the text of each
/// of its occurrences becomes one paragraph.
fn parse_inline_abstract(markup: &str) -> Result<String> {
  for tag in INLINE_ABSTRACT_TAGS {
    let paragraphs = top_level_text(markup, tag)?;
    if !paragraphs.is_empty() {
      return Ok(paragraphs.join(PARAGRAPH_SEPARATOR));
    }
  }
  Ok(MISSING_ABSTRACT.to_string())
}

/// Collects the trimmed text content of every top-level `tag` element in `markup`.
fn top_level_text(markup: &str, tag: &str) -> Result<Vec<String>> {
  let mut reader = Reader::from_str(markup);
  let mut depth = 0usize;
  let mut current: Option<String> = None;
  let mut found = Vec::new();

  loop {
    let event = reader.read_event().map_err(|e| {
      DoilinkError::MalformedUpstreamContent(format!("Invalid abstract markup: {e}"))
    })?;

    match event {
      Event::Start(e) => {
        if depth == 0 && e.name().as_ref() == tag.as_bytes() {
          current = Some(String::new());
        }
        depth += 1;
      },
      Event::End(_) => {
        depth = depth.saturating_sub(1);
        if depth == 0 {
          if let Some(text) = current.take() {
            found.push(text.trim().to_string());
          }
        }
      },
      Event::Empty(e) =>
        if depth == 0 && e.name().as_ref() == tag.as_bytes() {
          found.push(String::new());
        },
      Event::Text(e) =>
        if let Some(text) = current.as_mut() {
          text.push_str(&unescape_lenient(&String::from_utf8_lossy(&e)));
        },
      Event::CData(e) =>
        if let Some(text) = current.as_mut() {
          text.push_str(&String::from_utf8_lossy(&e));
        },
      Event::Eof =>
        if depth == 0 && current.is_none() {
          break;
        } else {
          return Err(DoilinkError::MalformedUpstreamContent(format!(
            "Abstract markup ends inside an open element: {markup}"
          )));
        },
      _ => (),
    }
  }

  Ok(found)
}

/// Resolves each entity reference in `raw` on its own. References XML does not define (e.g.
/// `&nbsp;`) and stray ampersands are kept verbatim.
fn unescape_lenient(raw: &str) -> String {
  let mut unescaped = String::with_capacity(raw.len());
  let mut rest = raw;

  while let Some(start) = rest.find('&') {
    unescaped.push_str(&rest[..start]);
    rest = &rest[start..];

    match rest[1..].find([';', '&']).map(|i| i + 1) {
      Some(end) if rest.as_bytes()[end] == b';' => {
        let reference = &rest[..=end];
        match quick_xml::escape::unescape(reference) {
          Ok(resolved) => unescaped.push_str(&resolved),
          Err(_) => unescaped.push_str(reference),
        }
        rest = &rest[end + 1..];
      },
      _ => {
        unescaped.push('&');
        rest = &rest[1..];
      },
    }
  }

  unescaped.push_str(rest);
  unescaped
}

/// Extracts the abstract paragraphs from an ACM Digital Library landing page.
fn parse_acm_abstract(html: &str) -> Result<String> {
  let section_selector = selector(ACM_ABSTRACT_SECTION)?;
  let paragraph_selector = selector("p")?;

  let document = Html::parse_document(html);
  let section = document.select(&section_selector).next().ok_or_else(|| {
    DoilinkError::MalformedUpstreamContent(format!(
      "Landing page has no `{ACM_ABSTRACT_SECTION}` element"
    ))
  })?;

  Ok(
    section
      .select(&paragraph_selector)
      .map(|paragraph| paragraph.text().collect::<String>())
      .collect::<Vec<_>>()
      .join(PARAGRAPH_SEPARATOR),
  )
}

/// Parses a CSS selector.
fn selector(css: &str) -> Result<Selector> {
  Selector::parse(css)
    .map_err(|e| DoilinkError::MalformedUpstreamContent(format!("Invalid selector {css}: {e:?}")))
}
