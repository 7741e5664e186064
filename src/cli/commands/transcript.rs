//! Transcript command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::render;
use crate::youtube::{extract_video_id, VideoProvider, YoutubeDataApi};
use anyhow::Result;

/// Run the transcript command.
pub async fn run_transcript(video_id: &str, settings: Settings) -> Result<()> {
    let video_id = extract_video_id(video_id)
        .ok_or_else(|| anyhow::anyhow!("Invalid video ID or URL: {}", video_id))?;
    let provider = YoutubeDataApi::new(settings.api_key()?);

    let spinner = Output::spinner("Fetching transcript...");
    let transcript = provider.fetch_transcript(&video_id).await;
    spinner.finish_and_clear();

    match transcript {
        Ok(Some(transcript)) => {
            println!("{}", render::format_transcript(&transcript));
        }
        Ok(None) => {
            Output::warning("No transcript available for this video.");
        }
        Err(e) => {
            Output::error(&format!("Fetch failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
