//! Comments command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::render;
use crate::youtube::{extract_video_id, VideoProvider, YoutubeDataApi};
use anyhow::Result;

/// Run the comments command.
pub async fn run_comments(video_id: &str, max_results: usize, settings: Settings) -> Result<()> {
    let video_id = extract_video_id(video_id)
        .ok_or_else(|| anyhow::anyhow!("Invalid video ID or URL: {}", video_id))?;
    let provider = YoutubeDataApi::new(settings.api_key()?);

    let spinner = Output::spinner("Fetching comments...");
    let comments = provider.fetch_comments(&video_id, max_results).await;
    spinner.finish_and_clear();

    match comments {
        Ok(comments) if comments.is_empty() => {
            Output::warning("No comments found or comments are disabled.");
        }
        Ok(comments) => {
            Output::success(&format!("Found {} comments", comments.len()));
            println!();
            println!("{}", render::format_comment_list(&comments));
        }
        Err(e) => {
            Output::error(&format!("Fetch failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
