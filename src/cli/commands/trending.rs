//! Trending videos command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::render;
use crate::youtube::{VideoProvider, YoutubeDataApi};
use anyhow::Result;

/// Run the trending command.
pub async fn run_trending(
    region: Option<String>,
    max_results: usize,
    settings: Settings,
) -> Result<()> {
    let region = region.unwrap_or_else(|| settings.youtube.region.clone());
    let provider = YoutubeDataApi::new(settings.api_key()?);

    let spinner = Output::spinner(&format!("Fetching trending videos for {}...", region));
    let videos = provider.fetch_trending(&region, max_results).await;
    spinner.finish_and_clear();

    match videos {
        Ok(videos) if videos.is_empty() => {
            Output::warning("No trending videos found.");
        }
        Ok(videos) => {
            Output::success(&format!("Trending in {} ({} videos)", region, videos.len()));
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
