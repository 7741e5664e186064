//! Related videos command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::render;
use crate::youtube::{extract_video_id, VideoProvider, YoutubeDataApi};
use anyhow::Result;

/// Run the related command.
pub async fn run_related(video_id: &str, max_results: usize, settings: Settings) -> Result<()> {
    let video_id = extract_video_id(video_id)
        .ok_or_else(|| anyhow::anyhow!("Invalid video ID or URL: {}", video_id))?;
    let provider = YoutubeDataApi::new(settings.api_key()?);

    let spinner = Output::spinner("Fetching related videos...");
    let videos = provider.fetch_related(&video_id, max_results).await;
    spinner.finish_and_clear();

    match videos {
        Ok(videos) if videos.is_empty() => {
            Output::warning("No related videos found.");
        }
        Ok(videos) => {
            Output::success(&format!("Found {} related videos", videos.len()));
            println!();
            println!("{}", render::format_video_list(&videos));
        }
        Err(e) => {
            Output::error(&format!("Fetch failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
