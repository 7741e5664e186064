//! Channel details command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::render;
use crate::youtube::{VideoProvider, YoutubeDataApi};
use anyhow::Result;

/// Run the channel command.
pub async fn run_channel(channel_id: &str, settings: Settings) -> Result<()> {
    let provider = YoutubeDataApi::new(settings.api_key()?);

    let spinner = Output::spinner("Fetching channel details...");
    let channel = provider.fetch_channel(channel_id).await;
    spinner.finish_and_clear();

    match channel {
        Ok(Some(channel)) => {
            println!("{}", render::format_channel(&channel));
        }
        Ok(None) => {
            Output::warning("No channel found.");
        }
        Err(e) => {
            Output::error(&format!("Fetch failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
