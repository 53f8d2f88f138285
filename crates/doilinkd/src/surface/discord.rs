//! Discord markdown rendering and embeds.

use serde_json::{json, Value};

use super::*;

/// Longest value Discord accepts for an embed field.
pub const FIELD_LIMIT: usize = 1024;

/// Embed accent colour.
const EMBED_COLOUR: u32 = 0x3498DB;

/// `**bold**` and `[text](url)` masked links.
pub struct DiscordTransformer;

impl TextTransformer for DiscordTransformer {
  fn bold(&self, text: &str) -> String { format!("**{text}**") }

  fn hyperlink(&self, text: &str, url: &str) -> String { format!("[{text}]({url})") }
}

/// Builds the embed object for a resolved DOI. Author and abstract fields are left out when
/// there is nothing to show, since Discord rejects empty field values.
pub fn embed(paper: &PaperMetadata) -> Value {
  let transformer = DiscordTransformer;
  let mut fields = vec![field("Reference", &paper.render_reference(&transformer))];
  if !paper.authors.is_empty() {
    fields.push(field(paper.author_label(), &paper.render_authors(&transformer)));
  }
  if paper.has_abstract() {
    fields.push(field("Abstract", &snip(&paper.abstract_text, FIELD_LIMIT)));
  }

  json!({
    "title": paper.render_title(&transformer),
    "color": EMBED_COLOUR,
    "fields": fields,
  })
}

/// A non-inline embed field.
fn field(name: &str, value: &str) -> Value { json!({ "name": name, "value": value }) }
