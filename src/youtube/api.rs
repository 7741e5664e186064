//! YouTube Data API v3 client.
//!
//! Decodes the raw API payloads into the typed models in [`super`]. The API
//! reports counters as JSON strings; for resources fetched with a
//! `statistics` part a missing counter becomes zero, while search-shaped
//! results carry no statistics at all and keep `None`.

use super::{transcript, ChannelMetadata, Comment, Transcript, VideoMetadata, VideoProvider};
use crate::error::{PuggError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Per-page caps imposed by the Data API.
const MAX_COMMENTS_PER_PAGE: usize = 100;
const MAX_TRENDING_RESULTS: usize = 50;
const MAX_RELATED_RESULTS: usize = 25;

/// Client for the YouTube Data API v3.
pub struct YoutubeDataApi {
    client: reqwest::Client,
    api_key: String,
}

impl YoutubeDataApi {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Issue a GET against an API resource and decode the payload.
    async fn get<T: DeserializeOwned>(&self, resource: &str, params: &[(&str, String)]) -> Result<T> {
        let url = format!("{}/{}", API_BASE, resource);
        debug!("GET {}", resource);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PuggError::Api(format!(
                "{} request failed ({}): {}",
                resource,
                status,
                api_error_message(&body)
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl VideoProvider for YoutubeDataApi {
    async fn fetch_video(&self, video_id: &str) -> Result<Option<VideoMetadata>> {
        let params = [
            ("part", "snippet,statistics,contentDetails".to_string()),
            ("id", video_id.to_string()),
        ];
        let response: ListResponse<VideoItem> = self.get("videos", &params).await?;
        response.items.into_iter().next().map(map_video).transpose()
    }

    async fn fetch_channel(&self, channel_id: &str) -> Result<Option<ChannelMetadata>> {
        let params = [
            ("part", "snippet,statistics".to_string()),
            ("id", channel_id.to_string()),
        ];
        let response: ListResponse<ChannelItem> = self.get("channels", &params).await?;
        response
            .items
            .into_iter()
            .next()
            .map(map_channel)
            .transpose()
    }

    async fn search_videos(&self, query: &str, max_results: usize) -> Result<Vec<VideoMetadata>> {
        let params = [
            ("part", "snippet".to_string()),
            ("q", query.to_string()),
            ("type", "video".to_string()),
            ("maxResults", max_results.to_string()),
        ];
        let response: ListResponse<SearchItem> = self.get("search", &params).await?;
        collect_search_items(response.items)
    }

    async fn fetch_comments(&self, video_id: &str, max_results: usize) -> Result<Vec<Comment>> {
        let mut comments = Vec::new();
        let mut page_token: Option<String> = None;
        let per_page = max_results.min(MAX_COMMENTS_PER_PAGE);

        loop {
            let mut params = vec![
                ("part", "snippet".to_string()),
                ("videoId", video_id.to_string()),
                ("maxResults", per_page.to_string()),
                ("textFormat", "plainText".to_string()),
            ];
            if let Some(token) = &page_token {
                params.push(("pageToken", token.clone()));
            }

            let response: ListResponse<CommentThreadItem> =
                self.get("commentThreads", &params).await?;

            for item in response.items {
                comments.push(map_comment(item)?);
                if comments.len() >= max_results {
                    return Ok(comments);
                }
            }

            match response.next_page_token {
                Some(token) => page_token = Some(token),
                None => return Ok(comments),
            }
        }
    }

    async fn fetch_trending(
        &self,
        region: &str,
        max_results: usize,
    ) -> Result<Vec<VideoMetadata>> {
        let params = [
            ("part", "snippet,statistics".to_string()),
            ("chart", "mostPopular".to_string()),
            ("regionCode", region.to_string()),
            ("maxResults", max_results.min(MAX_TRENDING_RESULTS).to_string()),
        ];
        let response: ListResponse<VideoItem> = self.get("videos", &params).await?;
        response.items.into_iter().map(map_video).collect()
    }

    async fn fetch_related(
        &self,
        video_id: &str,
        max_results: usize,
    ) -> Result<Vec<VideoMetadata>> {
        let params = [
            ("part", "snippet".to_string()),
            ("relatedToVideoId", video_id.to_string()),
            ("type", "video".to_string()),
            ("maxResults", max_results.min(MAX_RELATED_RESULTS).to_string()),
        ];
        let response: ListResponse<SearchItem> = self.get("search", &params).await?;
        collect_search_items(response.items)
    }

    async fn fetch_transcript(&self, video_id: &str) -> Result<Option<Transcript>> {
        transcript::fetch(&self.client, video_id).await
    }
}

/// Pull the human-readable message out of an API error payload.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")?
                .get("message")?
                .as_str()
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| {
            let preview: String = body.chars().take(200).collect();
            if preview.is_empty() {
                "no error details".to_string()
            } else {
                preview
            }
        })
}

// Wire types. All leaf fields are optional; required ones are enforced when
// the typed models are constructed.

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    id: String,
    #[serde(default)]
    snippet: Snippet,
    #[serde(default)]
    statistics: Statistics,
    #[serde(rename = "contentDetails", default)]
    content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
struct ChannelItem {
    id: String,
    #[serde(default)]
    snippet: Snippet,
    #[serde(default)]
    statistics: Statistics,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    #[serde(default)]
    snippet: Snippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Snippet {
    title: Option<String>,
    description: Option<String>,
    channel_id: Option<String>,
    channel_title: Option<String>,
    published_at: Option<DateTime<Utc>>,
    tags: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Statistics {
    view_count: Option<String>,
    like_count: Option<String>,
    comment_count: Option<String>,
    subscriber_count: Option<String>,
    video_count: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentDetails {
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentThreadItem {
    snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CommentSnippet {
    author_display_name: Option<String>,
    text_display: Option<String>,
    like_count: Option<u64>,
    published_at: Option<DateTime<Utc>>,
}

fn require(value: Option<String>, field: &'static str) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(PuggError::MissingField(field))
}

fn parse_count(value: Option<&String>) -> u64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0)
}

fn map_video(item: VideoItem) -> Result<VideoMetadata> {
    let snippet = item.snippet;
    let stats = item.statistics;
    Ok(VideoMetadata {
        id: item.id,
        title: require(snippet.title, "snippet.title")?,
        channel_id: snippet.channel_id.unwrap_or_default(),
        channel_title: require(snippet.channel_title, "snippet.channelTitle")?,
        description: snippet.description.unwrap_or_default(),
        published_at: snippet.published_at,
        duration: item.content_details.duration,
        view_count: Some(parse_count(stats.view_count.as_ref())),
        like_count: Some(parse_count(stats.like_count.as_ref())),
        comment_count: Some(parse_count(stats.comment_count.as_ref())),
        tags: snippet.tags.unwrap_or_default(),
    })
}

fn map_channel(item: ChannelItem) -> Result<ChannelMetadata> {
    let snippet = item.snippet;
    let stats = item.statistics;
    Ok(ChannelMetadata {
        id: item.id,
        title: require(snippet.title, "snippet.title")?,
        description: snippet.description.unwrap_or_default(),
        subscriber_count: Some(parse_count(stats.subscriber_count.as_ref())),
        video_count: Some(parse_count(stats.video_count.as_ref())),
        view_count: Some(parse_count(stats.view_count.as_ref())),
        published_at: snippet.published_at,
    })
}

/// Search results carry no statistics or duration; items without a video ID
/// (channels, playlists) are skipped.
fn collect_search_items(items: Vec<SearchItem>) -> Result<Vec<VideoMetadata>> {
    items
        .into_iter()
        .filter_map(|item| {
            let id = item.id.video_id?;
            Some(map_search_video(id, item.snippet))
        })
        .collect()
}

fn map_search_video(id: String, snippet: Snippet) -> Result<VideoMetadata> {
    Ok(VideoMetadata {
        id,
        title: require(snippet.title, "snippet.title")?,
        channel_id: snippet.channel_id.unwrap_or_default(),
        channel_title: require(snippet.channel_title, "snippet.channelTitle")?,
        description: snippet.description.unwrap_or_default(),
        published_at: snippet.published_at,
        duration: None,
        view_count: None,
        like_count: None,
        comment_count: None,
        tags: vec![],
    })
}

fn map_comment(item: CommentThreadItem) -> Result<Comment> {
    let snippet = item.snippet.top_level_comment.snippet;
    Ok(Comment {
        author: require(snippet.author_display_name, "authorDisplayName")?,
        text: require(snippet.text_display, "textDisplay")?,
        like_count: snippet.like_count.unwrap_or(0),
        published_at: snippet.published_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_video() {
        let item: VideoItem = serde_json::from_str(
            r#"{
                "id": "dQw4w9WgXcQ",
                "snippet": {
                    "title": "Test Video",
                    "description": "A description.",
                    "channelId": "UCtest",
                    "channelTitle": "Test Channel",
                    "publishedAt": "2023-06-01T12:00:00Z",
                    "tags": ["one", "two"]
                },
                "statistics": {"viewCount": "1000", "likeCount": "100"},
                "contentDetails": {"duration": "PT4M13S"}
            }"#,
        )
        .unwrap();

        let video = map_video(item).unwrap();
        assert_eq!(video.id, "dQw4w9WgXcQ");
        assert_eq!(video.title, "Test Video");
        assert_eq!(video.channel_title, "Test Channel");
        assert_eq!(video.view_count, Some(1000));
        assert_eq!(video.like_count, Some(100));
        // Counters missing from a statistics part default to zero.
        assert_eq!(video.comment_count, Some(0));
        assert_eq!(video.duration.as_deref(), Some("PT4M13S"));
        assert_eq!(video.tags, vec!["one", "two"]);
    }

    #[test]
    fn test_map_video_missing_title() {
        let item: VideoItem = serde_json::from_str(
            r#"{"id": "x", "snippet": {"channelTitle": "C"}}"#,
        )
        .unwrap();

        let err = map_video(item).unwrap_err();
        assert!(matches!(err, PuggError::MissingField("snippet.title")));
    }

    #[test]
    fn test_search_items_skip_non_videos() {
        let response: ListResponse<SearchItem> = serde_json::from_str(
            r#"{
                "items": [
                    {
                        "id": {"videoId": "dQw4w9WgXcQ"},
                        "snippet": {"title": "Hit", "channelTitle": "C"}
                    },
                    {
                        "id": {"channelId": "UCsomething"},
                        "snippet": {"title": "A channel", "channelTitle": "C"}
                    }
                ]
            }"#,
        )
        .unwrap();

        let videos = collect_search_items(response.items).unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, "dQw4w9WgXcQ");
        assert_eq!(videos[0].view_count, None);
        assert_eq!(videos[0].duration, None);
    }

    #[test]
    fn test_map_comment() {
        let item: CommentThreadItem = serde_json::from_str(
            r#"{
                "snippet": {
                    "topLevelComment": {
                        "snippet": {
                            "authorDisplayName": "viewer1",
                            "textDisplay": "Great video!",
                            "likeCount": 12,
                            "publishedAt": "2024-01-15T08:30:00Z"
                        }
                    }
                }
            }"#,
        )
        .unwrap();

        let comment = map_comment(item).unwrap();
        assert_eq!(comment.author, "viewer1");
        assert_eq!(comment.text, "Great video!");
        assert_eq!(comment.like_count, 12);
    }

    #[test]
    fn test_api_error_message() {
        let body = r#"{"error": {"code": 403, "message": "quota exceeded"}}"#;
        assert_eq!(api_error_message(body), "quota exceeded");
        assert_eq!(api_error_message("plain text failure"), "plain text failure");
        assert_eq!(api_error_message(""), "no error details");
    }
}
