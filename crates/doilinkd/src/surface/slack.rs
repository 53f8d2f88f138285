//! Slack `mrkdwn` rendering and slash-command responses.

use serde_json::{json, Value};

use super::*;

/// Longest abstract shown in a Slack section.
pub const ABSTRACT_LIMIT: usize = 350;

/// `*bold*` and `<url|text>` links.
pub struct SlackTransformer;

impl TextTransformer for SlackTransformer {
  fn bold(&self, text: &str) -> String { format!("*{text}*") }

  fn hyperlink(&self, text: &str, url: &str) -> String { format!("<{url}|{text}>") }
}

/// Builds the in-channel Block Kit response for a resolved DOI.
pub fn message(paper: &PaperMetadata) -> Value {
  let transformer = SlackTransformer;
  json!({
    "response_type": "in_channel",
    "blocks": [
      {
        "type": "header",
        "text": { "type": "plain_text", "text": paper.title }
      },
      { "type": "divider" },
      section("Reference", &paper.render_reference(&transformer), &transformer),
      section(paper.author_label(), &paper.render_authors(&transformer), &transformer),
      section("Abstract", &snip(&paper.abstract_text, ABSTRACT_LIMIT), &transformer),
      { "type": "divider" }
    ]
  })
}

/// A `mrkdwn` section with a bold heading line.
fn section(heading: &str, body: &str, transformer: &SlackTransformer) -> Value {
  json!({
    "type": "section",
    "text": { "type": "mrkdwn", "text": format!("{}\n{}", transformer.bold(heading), body) }
  })
}
