//! Summary command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::summary::build_summary;
use crate::youtube::{extract_video_id, YoutubeDataApi};
use anyhow::Result;

/// Run the summary command.
pub async fn run_summary(video_id: &str, no_comments: bool, settings: Settings) -> Result<()> {
    let video_id = extract_video_id(video_id)
        .ok_or_else(|| anyhow::anyhow!("Invalid video ID or URL: {}", video_id))?;
    let provider = YoutubeDataApi::new(settings.api_key()?);

    let spinner = Output::spinner("Building summary...");
    let summary = build_summary(&provider, &video_id, !no_comments).await;
    spinner.finish_and_clear();

    match summary {
        Ok(Some(summary)) => {
            println!("{}", summary);
        }
        Ok(None) => {
            Output::warning("No video found.");
        }
        Err(e) => {
            Output::error(&format!("Summary failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
