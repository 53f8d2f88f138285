//! Presentation surfaces for resolved metadata.
//!
//! Each surface brings its own [`TextTransformer`] and knows the field limits of the platform it
//! renders for:
//! - [`terminal`]: styled text for the CLI
//! - [`slack`]: `mrkdwn` and Block Kit messages
//! - [`discord`]: Discord markdown and embeds

use super::*;

pub mod discord;
pub mod slack;
pub mod terminal;

/// Reply for any resolution failure, whatever the cause.
pub const FAILURE_MESSAGE: &str = "An error has occurred reading the DOI!";

/// Marker appended to shortened text.
const ELLIPSIS: &str = "...";

/// Output formats understood by `lookup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Surface {
  /// Styled text for a terminal
  Terminal,
  /// The Slack slash-command response body
  Slack,
  /// The Discord embed object
  Discord,
  /// The raw metadata record
  Json,
}

/// Shortens `text` to at most `limit` characters, breaking at a word where possible.
///
/// Text that fits is returned unchanged. Otherwise it is cut at the last space that still leaves
/// room for `"..."`, or mid-word when there is no such space.
pub fn snip(text: &str, limit: usize) -> String {
  if text.chars().count() <= limit {
    return text.to_string();
  }

  let keep = limit.saturating_sub(ELLIPSIS.len());
  let byte_at = |chars: usize| text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i);

  // A space sitting exactly at `keep` still works as the break point
  let cut = text[..byte_at(keep + 1)].rfind(' ').unwrap_or_else(|| byte_at(keep));
  format!("{}{ELLIPSIS}", &text[..cut])
}
