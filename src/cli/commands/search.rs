//! Search command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::render;
use crate::youtube::{VideoProvider, YoutubeDataApi};
use anyhow::Result;

/// Run the search command.
pub async fn run_search(query: &str, max_results: usize, settings: Settings) -> Result<()> {
    let provider = YoutubeDataApi::new(settings.api_key()?);

    let spinner = Output::spinner("Searching YouTube...");
    let videos = provider.search_videos(query, max_results).await;
    spinner.finish_and_clear();

    match videos {
        Ok(videos) if videos.is_empty() => {
            Output::warning("No videos found.");
        }
        Ok(videos) => {
            Output::success(&format!("Found {} videos", videos.len()));
            println!();
            println!("{}", render::format_video_list(&videos));
        }
        Err(e) => {
            Output::error(&format!("Search failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
