//! CLI command implementations.

pub mod learn;
pub mod stats;

use clap::Args;

/// Options shared by every command that talks to the game server.
#[derive(Args, Debug)]
pub struct ServerArgs {
    /// Base URL of the game server API
    #[arg(long)]
    pub base_url: String,

    /// API key sent as the x-api-key header
    #[arg(long)]
    pub api_key: Option<String>,
}

impl ServerArgs {
    pub(crate) fn build_client(&self) -> anyhow::Result<crate::adapters::HttpGameClient> {
        let mut client = crate::adapters::HttpGameClient::new(self.base_url.trim_end_matches('/'))?;
        if let Some(key) = &self.api_key {
            client = client.with_api_key(key);
        }
        Ok(client)
    }
}
