//! Composite video summary.
//!
//! Pulls metadata, transcript, and top comments together into one readable
//! report. The three fetches run concurrently; transcript and comment
//! failures degrade to their absence sections instead of failing the whole
//! summary.

use crate::error::Result;
use crate::render;
use crate::youtube::{Comment, Transcript, VideoMetadata, VideoProvider};
use futures::future;
use tracing::warn;

/// Number of top comments included when comments are requested.
const SUMMARY_COMMENT_COUNT: usize = 5;

/// Transcript preview length in characters.
const TRANSCRIPT_PREVIEW_CHARS: usize = 500;

/// Build a summary for the video, or `None` when the video does not exist.
pub async fn build_summary(
    provider: &dyn VideoProvider,
    video_id: &str,
    include_comments: bool,
) -> Result<Option<String>> {
    let (video, transcript, comments) = future::join3(
        provider.fetch_video(video_id),
        provider.fetch_transcript(video_id),
        fetch_top_comments(provider, video_id, include_comments),
    )
    .await;

    let Some(video) = video? else {
        return Ok(None);
    };

    let transcript = transcript.unwrap_or_else(|e| {
        warn!("Transcript fetch failed for {}: {}", video_id, e);
        None
    });
    let comments = comments.unwrap_or_else(|e| {
        warn!("Comment fetch failed for {}: {}", video_id, e);
        Vec::new()
    });

    Ok(Some(render_summary(&video, transcript.as_ref(), &comments)))
}

async fn fetch_top_comments(
    provider: &dyn VideoProvider,
    video_id: &str,
    include: bool,
) -> Result<Vec<Comment>> {
    if !include {
        return Ok(Vec::new());
    }
    provider.fetch_comments(video_id, SUMMARY_COMMENT_COUNT).await
}

/// Render the summary sections. Pure; exercised directly by tests.
pub fn render_summary(
    video: &VideoMetadata,
    transcript: Option<&Transcript>,
    comments: &[Comment],
) -> String {
    let mut sections = vec![
        "=== Video Summary ===".to_string(),
        format!("Title: {}", video.title),
        format!("Channel: {}", video.channel_title),
        format!(
            "Duration: {}",
            video.duration.as_deref().unwrap_or("Unknown")
        ),
        format!("Views: {}", render::count_or_unknown(video.view_count)),
        format!("Likes: {}", render::count_or_unknown(video.like_count)),
        format!("URL: {}", video.url()),
    ];

    if !video.description.is_empty() {
        sections.push("\n=== Description ===".to_string());
        sections.push(video.description.clone());
    }

    sections.push("\n=== Transcript Summary ===".to_string());
    match transcript {
        Some(transcript) => {
            sections.push(preview(&transcript.full_text, TRANSCRIPT_PREVIEW_CHARS));
        }
        None => sections.push("No transcript available for this video.".to_string()),
    }

    if !comments.is_empty() {
        sections.push("\n=== Top Comments ===".to_string());
        sections.push(render::format_comment_list(comments));
    }

    sections.join("\n")
}

/// First `max_chars` characters with an ellipsis when truncated.
fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}
