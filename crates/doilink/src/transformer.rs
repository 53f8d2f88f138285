//! The rendering capability supplied by each consuming surface.
//!
//! The metadata model never decides how emphasis or links look. A chat integration, a terminal,
//! or anything else presenting a [`PaperMetadata`](crate::PaperMetadata) implements
//! [`TextTransformer`] for its own markup and hands it to the `render_*` methods.
//!
//! # Examples
//!
//! ```
//! use doilink::{Author, TextTransformer};
//!
//! struct Html;
//!
//! impl TextTransformer for Html {
//!   fn bold(&self, text: &str) -> String { format!("<b>{text}</b>") }
//!
//!   fn hyperlink(&self, text: &str, url: &str) -> String { format!("<a href=\"{url}\">{text}</a>") }
//! }
//!
//! let author = Author::with_orcid("Ada Lovelace", "0000-0001-2345-6789");
//! assert_eq!(
//!   author.display_name(&Html),
//!   "<a href=\"https://orcid.org/0000-0001-2345-6789\">Ada Lovelace</a>"
//! );
//! ```

/// Surface-specific encoding of emphasis and masked links.
pub trait TextTransformer {
  /// Formats the content as bold text.
  fn bold(&self, text: &str) -> String;

  /// Formats the content as a link to `url` that displays as `text`.
  fn hyperlink(&self, text: &str, url: &str) -> String;
}
