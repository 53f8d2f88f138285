//! Module for the "lookup" command, resolving one DOI and printing it for a chosen surface.

use super::*;

/// Arguments that can be used for the [`Commands::Lookup`]
#[derive(Args, Clone)]
pub struct LookupArgs {
  /// The DOI to resolve, e.g. "10.1145/3453483.3454092"
  pub doi: String,

  /// How to present the result
  #[arg(long, short, value_enum, default_value_t = Surface::Terminal)]
  pub surface: Surface,
}

/// Function for the [`Commands::Lookup`] in the CLI.
pub async fn lookup(resolver: &Resolver, args: LookupArgs) -> Result<()> {
  let LookupArgs { doi, surface } = args;

  let paper = match resolver.resolve(&doi).await {
    Ok(paper) => paper,
    Err(e) => {
      eprintln!("{}{}", style(ERROR_PREFIX).red(), FAILURE_MESSAGE);
      return Err(e.into());
    },
  };

  println!("{}", render(&paper, surface)?);
  Ok(())
}

/// Renders `paper` the way `surface` would present it.
fn render(paper: &PaperMetadata, surface: Surface) -> Result<String> {
  Ok(match surface {
    Surface::Terminal => terminal::render(paper),
    Surface::Slack => serde_json::to_string_pretty(&slack::message(paper))?,
    Surface::Discord => serde_json::to_string_pretty(&discord::embed(paper))?,
    Surface::Json => serde_json::to_string_pretty(paper)?,
  })
}
