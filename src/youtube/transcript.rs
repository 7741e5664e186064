//! Caption fetching via the public timedtext endpoint.
//!
//! Captions are not exposed through the Data API without OAuth, so this
//! walks the same path the watch page does: read the caption track list
//! embedded in the page HTML, pick a track, and fetch it in json3 format.

use super::{ids, Transcript, TranscriptSegment};
use crate::error::Result;
use serde::Deserialize;
use tracing::debug;

const CAPTION_TRACKS_KEY: &str = r#""captionTracks":"#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    #[serde(default)]
    language_code: String,
    /// "asr" marks an auto-generated track.
    kind: Option<String>,
}

/// Fetch the transcript for a video, or `None` when no caption track exists.
pub(super) async fn fetch(client: &reqwest::Client, video_id: &str) -> Result<Option<Transcript>> {
    let page = client
        .get(ids::watch_url(video_id))
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let tracks = parse_tracks(&page);
    let Some(track) = pick_track(&tracks) else {
        debug!("No caption tracks for {}", video_id);
        return Ok(None);
    };

    // The base URL already carries query parameters.
    let url = format!("{}&fmt=json3", track.base_url);
    let body = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let segments = parse_json3(&body)?;
    if segments.is_empty() {
        return Ok(None);
    }
    Ok(Some(Transcript::new(video_id.to_string(), segments)))
}

/// Extract the caption track list from the watch page HTML.
///
/// The stream deserializer reads exactly one JSON value and ignores whatever
/// follows, so the surrounding player response does not need to be parsed.
fn parse_tracks(page: &str) -> Vec<CaptionTrack> {
    let Some(start) = page.find(CAPTION_TRACKS_KEY) else {
        return Vec::new();
    };
    let json = &page[start + CAPTION_TRACKS_KEY.len()..];

    let mut stream = serde_json::Deserializer::from_str(json).into_iter::<Vec<CaptionTrack>>();
    match stream.next() {
        Some(Ok(tracks)) => tracks,
        _ => Vec::new(),
    }
}

/// Prefer a manually created English track, then auto-generated English,
/// then whatever comes first.
fn pick_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    let is_english = |track: &&CaptionTrack| track.language_code.starts_with("en");

    tracks
        .iter()
        .find(|track| is_english(track) && track.kind.as_deref() != Some("asr"))
        .or_else(|| tracks.iter().find(is_english))
        .or_else(|| tracks.first())
}

#[derive(Debug, Deserialize)]
struct TimedText {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TimedTextEvent {
    #[serde(rename = "tStartMs")]
    t_start_ms: u64,
    #[serde(rename = "dDurationMs")]
    d_duration_ms: u64,
    segs: Vec<TimedTextSeg>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TimedTextSeg {
    utf8: String,
}

/// Decode a json3 caption payload into transcript segments.
///
/// Events without text (timing markers, pure newlines) are dropped.
fn parse_json3(body: &str) -> Result<Vec<TranscriptSegment>> {
    let timed: TimedText = serde_json::from_str(body)?;

    Ok(timed
        .events
        .into_iter()
        .filter_map(|event| {
            let joined: String = event.segs.iter().map(|seg| seg.utf8.as_str()).collect();
            let text = joined.replace('\n', " ").trim().to_string();
            if text.is_empty() {
                return None;
            }
            Some(TranscriptSegment::new(
                text,
                event.t_start_ms as f64 / 1000.0,
                event.d_duration_ms as f64 / 1000.0,
            ))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tracks() {
        let page = r#"<html>stuff"captionTracks":[{"baseUrl":"https://www.youtube.com/api/timedtext?v=abc","name":{"runs":[{"text":"English"}]},"languageCode":"en","kind":"asr"},{"baseUrl":"https://www.youtube.com/api/timedtext?v=abc&lang=fr","languageCode":"fr"}],"audioTracks":[]}more</html>"#;

        let tracks = parse_tracks(page);
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].language_code, "en");
        assert_eq!(tracks[0].kind.as_deref(), Some("asr"));
        assert_eq!(tracks[1].language_code, "fr");
    }

    #[test]
    fn test_parse_tracks_absent() {
        assert!(parse_tracks("<html>no captions here</html>").is_empty());
    }

    #[test]
    fn test_pick_track_prefers_manual_english() {
        let tracks = vec![
            CaptionTrack {
                base_url: "asr".to_string(),
                language_code: "en".to_string(),
                kind: Some("asr".to_string()),
            },
            CaptionTrack {
                base_url: "manual".to_string(),
                language_code: "en-GB".to_string(),
                kind: None,
            },
        ];
        assert_eq!(pick_track(&tracks).map(|t| t.base_url.as_str()), Some("manual"));
    }

    #[test]
    fn test_pick_track_falls_back_to_first() {
        let tracks = vec![CaptionTrack {
            base_url: "fr".to_string(),
            language_code: "fr".to_string(),
            kind: None,
        }];
        assert_eq!(pick_track(&tracks).map(|t| t.base_url.as_str()), Some("fr"));
        assert!(pick_track(&[]).is_none());
    }

    #[test]
    fn test_parse_json3() {
        let body = r#"{
            "events": [
                {"tStartMs": 0, "dDurationMs": 2000, "segs": [{"utf8": "Hello "}, {"utf8": "world"}]},
                {"tStartMs": 1500, "dDurationMs": 0, "segs": [{"utf8": "\n"}]},
                {"tStartMs": 2000, "dDurationMs": 3500, "segs": [{"utf8": "Second line"}]},
                {"tStartMs": 6000, "dDurationMs": 1000}
            ]
        }"#;

        let segments = parse_json3(body).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "Hello world");
        assert_eq!(segments[0].start_seconds, 0.0);
        assert_eq!(segments[0].duration_seconds, 2.0);
        assert_eq!(segments[1].text, "Second line");
        assert_eq!(segments[1].start_seconds, 2.0);
    }
}
