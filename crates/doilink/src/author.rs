//! Contributors to a resolved work.
//!
//! An [`Author`] is either a plain display name or a name tied to an ORCID. Identified authors
//! render through [`TextTransformer::hyperlink`], plain ones render as their bare name.
//!
//! ```
//! use doilink::Author;
//!
//! let author = Author::with_orcid("Ada Lovelace", "0000-0001-2345-6789");
//! assert_eq!(author.identifier_url(), Some("https://orcid.org/0000-0001-2345-6789"));
//!
//! // Values that are not a bare ORCID are kept as they are
//! let author = Author::with_orcid("Ada Lovelace", "http://orcid.org/0000-0001-2345-6789");
//! assert_eq!(author.identifier_url(), Some("http://orcid.org/0000-0001-2345-6789"));
//! ```

use super::*;

lazy_static! {
  /// A bare ORCID such as `0000-0001-2345-6789` or `0000-0002-1694-233X`.
  static ref ORCID_ID: Regex =
    Regex::new(r"^[0-9]{4}-[0-9]{4}-[0-9]{4}-(?:[0-9]{4}|[0-9]{3}X)$").unwrap();
}

/// Base URL for the canonical form of an ORCID.
const ORCID_BASE_URL: &str = "https://orcid.org/";

/// Name used when an upstream record carries no usable name parts at all.
const UNKNOWN_AUTHOR: &str = "Unknown";

/// A contributor to a work, in upstream order within [`PaperMetadata`](crate::PaperMetadata).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Author {
  /// An author known only by name.
  Plain {
    /// Display name
    name: String,
  },
  /// An author with a persistent researcher identifier.
  Identified {
    /// Display name
    name:           String,
    /// Canonical URL of the identifier, e.g. `https://orcid.org/0000-0001-2345-6789`
    identifier_url: String,
  },
}

impl Author {
  /// Creates an author known only by name.
  pub fn new(name: impl Into<String>) -> Self { Self::Plain { name: name.into() } }

  /// Creates an author identified by an ORCID.
  ///
  /// A bare ORCID is turned into its `https://orcid.org/` URL, anything else is assumed to be a
  /// URL already.
  pub fn with_orcid(name: impl Into<String>, orcid: &str) -> Self {
    let identifier_url = if ORCID_ID.is_match(orcid) {
      format!("{ORCID_BASE_URL}{orcid}")
    } else {
      orcid.to_string()
    };
    Self::Identified { name: name.into(), identifier_url }
  }

  /// Builds a display name from upstream name parts.
  ///
  /// Given and family names are joined by a single space. When neither is present the literal
  /// `fallback` name is used, and when that is missing too the author is `"Unknown"`.
  pub fn compose_name(
    given: Option<&str>,
    family: Option<&str>,
    fallback: Option<&str>,
  ) -> String {
    match (given, family) {
      (Some(given), Some(family)) => format!("{given} {family}"),
      (Some(part), None) | (None, Some(part)) => part.to_string(),
      (None, None) => fallback.unwrap_or(UNKNOWN_AUTHOR).to_string(),
    }
  }

  /// The author's display name without any markup.
  pub fn name(&self) -> &str {
    match self {
      Self::Plain { name } | Self::Identified { name, .. } => name,
    }
  }

  /// The identifier URL, if this author has one.
  pub fn identifier_url(&self) -> Option<&str> {
    match self {
      Self::Plain { .. } => None,
      Self::Identified { identifier_url, .. } => Some(identifier_url),
    }
  }

  /// Renders the display name for a surface.
  pub fn display_name<T: TextTransformer + ?Sized>(&self, transformer: &T) -> String {
    match self {
      Self::Plain { name } => name.clone(),
      Self::Identified { name, identifier_url } => transformer.hyperlink(name, identifier_url),
    }
  }
}
