//! Slack slash-command webhook.
//!
//! Slack posts the command as a form with the DOI in its `text` field. A resolved DOI is answered
//! with an in-channel Block Kit message; any failure is logged and answered with
//! [`FAILURE_MESSAGE`] as plain text, still with a `200` so Slack shows it to the user.

use axum::{
  extract::{Form, State},
  response::{IntoResponse, Response},
  routing::post,
  Json, Router,
};
use serde::Deserialize;

use super::*;

/// The fields of a slash-command payload that are used.
#[derive(Debug, Deserialize)]
pub struct SlashCommand {
  /// Everything the user typed after the command name
  #[serde(default)]
  pub text: String,
}

/// Builds the webhook router with a single `POST /doi` route.
pub fn router(resolver: Arc<Resolver>) -> Router {
  Router::new().route("/doi", post(doi_command)).with_state(resolver)
}

/// Handles one `/doi` invocation.
async fn doi_command(
  State(resolver): State<Arc<Resolver>>,
  Form(command): Form<SlashCommand>,
) -> Response {
  let doi = command.text.trim();
  debug!("Received /doi command for {:?}", doi);

  match resolver.resolve(doi).await {
    Ok(paper) => Json(slack::message(&paper)).into_response(),
    Err(e) => {
      error!("Failed to resolve {:?}: {}", doi, e);
      FAILURE_MESSAGE.into_response()
    },
  }
}
