//! Flash cards command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::render;
use crate::study::{self, CardCategory, CardDifficulty};
use crate::youtube::{extract_video_id, VideoProvider, YoutubeDataApi};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Run the flashcards command.
#[allow(clippy::too_many_arguments)]
pub async fn run_flashcards(
    video_id: &str,
    max_cards: Option<usize>,
    categories: &[CardCategory],
    difficulty: Option<CardDifficulty>,
    seed: Option<u64>,
    json: bool,
    settings: Settings,
) -> Result<()> {
    let video_id = extract_video_id(video_id)
        .ok_or_else(|| anyhow::anyhow!("Invalid video ID or URL: {}", video_id))?;
    let provider = YoutubeDataApi::new(settings.api_key()?);
    let max_cards = max_cards.unwrap_or(settings.study.default_max_cards);

    let spinner = Output::spinner("Fetching transcript...");
    let transcript = provider.fetch_transcript(&video_id).await;
    spinner.finish_and_clear();

    let transcript = match transcript {
        Ok(Some(transcript)) => transcript,
        Ok(None) => {
            Output::warning("No transcript available for this video.");
            return Ok(());
        }
        Err(e) => {
            Output::error(&format!("Fetch failed: {}", e));
            return Err(e.into());
        }
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let cards = study::generate_flashcards(&transcript, max_cards, &mut rng)?;
    let cards = study::filter_flashcards(
        cards,
        (!categories.is_empty()).then_some(categories),
        difficulty,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
    } else {
        println!("{}", render::format_flashcards(&cards));
    }

    Ok(())
}
