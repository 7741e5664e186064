//! Video info command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::render;
use crate::youtube::{extract_video_id, VideoProvider, YoutubeDataApi};
use anyhow::Result;

/// Run the video command.
pub async fn run_video(video_id: &str, settings: Settings) -> Result<()> {
    let video_id = extract_video_id(video_id)
        .ok_or_else(|| anyhow::anyhow!("Invalid video ID or URL: {}", video_id))?;
    let provider = YoutubeDataApi::new(settings.api_key()?);

    let spinner = Output::spinner("Fetching video info...");
    let video = provider.fetch_video(&video_id).await;
    spinner.finish_and_clear();

    match video {
        Ok(Some(video)) => {
            println!("{}", render::format_video(&video));
        }
        Ok(None) => {
            Output::warning("No video found.");
        }
        Err(e) => {
            Output::error(&format!("Fetch failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
