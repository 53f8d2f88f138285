//! The normalized record every extractor produces.
//!
//! Whatever the upstream schema, a resolution ends in a [`PaperMetadata`]. The record itself is
//! plain data; presentation goes through the `render_*` methods, which take the consuming
//! surface's [`TextTransformer`].
//!
//! # Examples
//!
//! ```
//! use doilink::{Author, PaperMetadata, TextTransformer};
//!
//! struct Slack;
//!
//! impl TextTransformer for Slack {
//!   fn bold(&self, text: &str) -> String { format!("*{text}*") }
//!
//!   fn hyperlink(&self, text: &str, url: &str) -> String { format!("<{url}|{text}>") }
//! }
//!
//! let paper = PaperMetadata {
//!   reference_url: "https://doi.org/10.1145/3453483.3454092".to_string(),
//!   title:         "A Paper".to_string(),
//!   authors:       vec![Author::new("Ada Lovelace")],
//!   abstract_text: String::new(),
//! };
//!
//! assert_eq!(paper.render_title(&Slack), "*A Paper*");
//! assert_eq!(paper.author_label(), "Author");
//! ```

use super::*;

/// Bibliographic metadata for a resolved DOI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperMetadata {
  /// Canonical URL identifying the work
  pub reference_url: String,
  /// The work's (first listed) title
  pub title:         String,
  /// Contributors in upstream order
  pub authors:       Vec<Author>,
  /// Abstract text; empty when the source has none, `"N/A"` when a source had an abstract field
  /// without any recognizable content
  pub abstract_text: String,
}

impl PaperMetadata {
  /// Renders the reference URL as a link to itself.
  pub fn render_reference<T: TextTransformer + ?Sized>(&self, transformer: &T) -> String {
    transformer.hyperlink(&self.reference_url, &self.reference_url)
  }

  /// Renders the title in bold.
  pub fn render_title<T: TextTransformer + ?Sized>(&self, transformer: &T) -> String {
    transformer.bold(&self.title)
  }

  /// Renders every author's display name, separated by `", "`.
  pub fn render_authors<T: TextTransformer + ?Sized>(&self, transformer: &T) -> String {
    self.authors.iter().map(|author| author.display_name(transformer)).collect::<Vec<_>>().join(", ")
  }

  /// Heading for the author list: singular for exactly one author, plural otherwise.
  pub fn author_label(&self) -> &'static str {
    if self.authors.len() == 1 {
      "Author"
    } else {
      "Authors"
    }
  }

  /// Whether there is any abstract text to show.
  pub fn has_abstract(&self) -> bool { !self.abstract_text.is_empty() }
}
