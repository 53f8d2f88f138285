//! Terminal rendering with `console` styles.

use super::*;

/// Bold via ANSI styling; links as the text followed by the underlined URL.
pub struct TerminalTransformer;

impl TextTransformer for TerminalTransformer {
  fn bold(&self, text: &str) -> String { style(text).bold().to_string() }

  fn hyperlink(&self, text: &str, url: &str) -> String {
    let styled = style(url).blue().underlined();
    if text == url {
      styled.to_string()
    } else {
      format!("{text} <{styled}>")
    }
  }
}

/// Renders `paper` as a block of labelled lines.
pub fn render(paper: &PaperMetadata) -> String {
  let transformer = TerminalTransformer;
  let mut lines = vec![
    format!("{}{}", style(SUCCESS_PREFIX).green(), paper.render_title(&transformer)),
    detail("Reference", &paper.render_reference(&transformer)),
    detail(paper.author_label(), &paper.render_authors(&transformer)),
  ];
  if paper.has_abstract() {
    lines.push(detail("Abstract", &paper.abstract_text));
  }
  lines.join("\n")
}

/// One indented `Label: value` line.
fn detail(label: &str, value: &str) -> String {
  format!("{DETAIL_INDENT}{} {}", style(format!("{label}:")).green().bold(), value)
}
