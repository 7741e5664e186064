//! YouTube data access for pugg.
//!
//! Typed metadata models, the [`VideoProvider`] capability trait, and the
//! Data API v3 implementation. Absence of a video, channel, or transcript is
//! a value (`None` or an empty list), not an error; `Err` is reserved for
//! transport, parse, and configuration failures.

mod api;
mod ids;
mod transcript;

pub use api::YoutubeDataApi;
pub use ids::{extract_video_id, watch_url};

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for a single YouTube video.
///
/// Search and related-video listings come without statistics or duration;
/// those fields stay `None` and render as unknown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub id: String,
    pub title: String,
    pub channel_id: String,
    pub channel_title: String,
    /// Full description text; empty when the video has none.
    pub description: String,
    pub published_at: Option<DateTime<Utc>>,
    /// ISO 8601 duration as reported by the API (e.g. "PT4M13S").
    pub duration: Option<String>,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub comment_count: Option<u64>,
    pub tags: Vec<String>,
}

impl VideoMetadata {
    /// Canonical watch URL for this video.
    pub fn url(&self) -> String {
        ids::watch_url(&self.id)
    }
}

/// Metadata for a YouTube channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelMetadata {
    pub id: String,
    pub title: String,
    pub description: String,
    pub subscriber_count: Option<u64>,
    pub video_count: Option<u64>,
    pub view_count: Option<u64>,
    pub published_at: Option<DateTime<Utc>>,
}

/// A top-level comment on a video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub like_count: u64,
    pub published_at: Option<DateTime<Utc>>,
}

/// A single timed unit of transcript text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    pub start_seconds: f64,
    pub duration_seconds: f64,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, start_seconds: f64, duration_seconds: f64) -> Self {
        Self {
            text: text.into(),
            start_seconds,
            duration_seconds,
        }
    }

    /// End time of this segment in seconds.
    pub fn end_seconds(&self) -> f64 {
        self.start_seconds + self.duration_seconds
    }
}

/// A complete transcript for one video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub video_id: String,
    pub segments: Vec<TranscriptSegment>,
    /// All segment texts joined by single spaces, in transcript order.
    pub full_text: String,
    pub duration_seconds: f64,
}

impl Transcript {
    /// Create a transcript, computing the full text and total duration.
    pub fn new(video_id: String, segments: Vec<TranscriptSegment>) -> Self {
        let full_text = segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let duration_seconds = segments.last().map(|s| s.end_seconds()).unwrap_or(0.0);

        Self {
            video_id,
            segments,
            full_text,
            duration_seconds,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Capability interface to the YouTube backend.
///
/// Swapped out for a canned implementation in tests; everything above this
/// trait is independent of how the data is fetched.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Fetch full metadata for one video, or `None` if it does not exist.
    async fn fetch_video(&self, video_id: &str) -> Result<Option<VideoMetadata>>;

    /// Fetch metadata for one channel, or `None` if it does not exist.
    async fn fetch_channel(&self, channel_id: &str) -> Result<Option<ChannelMetadata>>;

    /// Search for videos matching a query.
    async fn search_videos(&self, query: &str, max_results: usize) -> Result<Vec<VideoMetadata>>;

    /// Fetch top-level comments for a video. Disabled comments surface as an
    /// API error, which callers render as absence.
    async fn fetch_comments(&self, video_id: &str, max_results: usize) -> Result<Vec<Comment>>;

    /// Fetch the most popular videos for a region.
    async fn fetch_trending(&self, region: &str, max_results: usize)
        -> Result<Vec<VideoMetadata>>;

    /// Fetch videos related to the given video.
    async fn fetch_related(&self, video_id: &str, max_results: usize)
        -> Result<Vec<VideoMetadata>>;

    /// Fetch the transcript for a video, or `None` when captions are
    /// disabled or missing.
    async fn fetch_transcript(&self, video_id: &str) -> Result<Option<Transcript>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_full_text() {
        let transcript = Transcript::new(
            "abc12345678".to_string(),
            vec![
                TranscriptSegment::new("Hello world.", 0.0, 2.0),
                TranscriptSegment::new("Second segment here.", 2.0, 3.5),
            ],
        );

        assert_eq!(transcript.full_text, "Hello world. Second segment here.");
        assert_eq!(transcript.duration_seconds, 5.5);
        assert!(!transcript.is_empty());
    }

    #[test]
    fn test_empty_transcript() {
        let transcript = Transcript::new("abc12345678".to_string(), vec![]);
        assert_eq!(transcript.full_text, "");
        assert_eq!(transcript.duration_seconds, 0.0);
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_video_url() {
        let video = VideoMetadata {
            id: "dQw4w9WgXcQ".to_string(),
            title: "Test".to_string(),
            channel_id: "UCtest".to_string(),
            channel_title: "Channel".to_string(),
            description: String::new(),
            published_at: None,
            duration: None,
            view_count: None,
            like_count: None,
            comment_count: None,
            tags: vec![],
        };
        assert_eq!(video.url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }
}
