//! Command dispatch.

pub mod ask;
pub mod chat;
pub mod session;

use anyhow::Result;
use prospect_client::ClientConfig;

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        None => chat::handle(None).await,
        Some(Command::Chat { api_url }) => chat::handle(api_url).await,
        Some(Command::Ask { question, api_url }) => ask::handle(&question, api_url).await,
        Some(Command::Session { action }) => session::handle(action),
    }
}

/// Service configuration: env first, then the `--api-url` override.
fn client_config(api_url: Option<String>) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(url) = api_url {
        config.base_url = url;
    }
    config
}
