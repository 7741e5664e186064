//! Quiz command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::render;
use crate::study;
use crate::youtube::{extract_video_id, VideoProvider, YoutubeDataApi};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Run the quiz command.
pub async fn run_quiz(
    video_id: &str,
    seed: Option<u64>,
    json: bool,
    settings: Settings,
) -> Result<()> {
    let video_id = extract_video_id(video_id)
        .ok_or_else(|| anyhow::anyhow!("Invalid video ID or URL: {}", video_id))?;
    let provider = YoutubeDataApi::new(settings.api_key()?);

    let spinner = Output::spinner("Fetching video...");
    let video = match provider.fetch_video(&video_id).await {
        Ok(Some(video)) => video,
        Ok(None) => {
            spinner.finish_and_clear();
            Output::warning("No video found.");
            return Ok(());
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Fetch failed: {}", e));
            return Err(e.into());
        }
    };

    spinner.set_message("Fetching transcript...");
    let transcript = match provider.fetch_transcript(&video_id).await {
        Ok(transcript) => transcript,
        Err(e) => {
            tracing::warn!("Transcript fetch failed: {}", e);
            None
        }
    };
    spinner.finish_and_clear();

    if transcript.is_none() {
        Output::warning("No transcript available; generating questions from metadata only.");
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let questions = study::generate_quiz(&video, transcript.as_ref(), &mut rng);

    if json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
    } else {
        println!("{}", render::format_quiz(&video.title, &questions));
    }

    Ok(())
}
