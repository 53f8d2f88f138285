//! Module for the "serve" command, running the Slack slash-command webhook.

use super::*;

/// Arguments that can be used for the [`Commands::Serve`]
#[derive(Args, Clone)]
pub struct ServeArgs {
  /// Address to bind
  #[arg(long, env = "SLACK_HOST", default_value = "127.0.0.1")]
  pub host: String,

  /// Port to bind
  #[arg(long, env = "SLACK_PORT", default_value_t = 3000)]
  pub port: u16,
}

/// Function for the [`Commands::Serve`] in the CLI.
///
/// Runs until interrupted with Ctrl-C.
pub async fn serve(resolver: Resolver, args: ServeArgs) -> Result<()> {
  let ServeArgs { host, port } = args;

  let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
  let address = listener.local_addr()?;
  info!("Server is running on http://{}", address);
  println!("{}Listening for Slack commands on http://{}/doi", style(SUCCESS_PREFIX).green(), address);

  axum::serve(listener, server::router(Arc::new(resolver)))
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  info!("Server stopped");
  Ok(())
}

/// Resolves once the process receives Ctrl-C.
async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    error!("Failed to listen for shutdown signal: {}", e);
    std::future::pending::<()>().await;
  }
}
