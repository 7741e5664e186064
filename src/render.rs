//! Text rendering for videos, channels, comments, transcripts, and study
//! material.
//!
//! Output is plain text with one field per line; list items are joined with
//! a `---` separator line. Counts the API did not supply (search-shaped
//! results) render as "Unknown".

use crate::study::{Flashcard, Question};
use crate::youtube::{ChannelMetadata, Comment, Transcript, VideoMetadata};
use chrono::{DateTime, Utc};

/// Separator between items in a rendered list.
const LIST_SEPARATOR: &str = "\n---\n";

/// Render full video details.
pub fn format_video(video: &VideoMetadata) -> String {
    let mut lines = vec![
        format!("Title: {}", video.title),
        format!("Channel: {}", video.channel_title),
        format!(
            "Duration: {}",
            video.duration.as_deref().unwrap_or("Unknown")
        ),
        format!(
            "Description: {}",
            description_or_placeholder(&video.description)
        ),
        format!("Views: {}", count_or_unknown(video.view_count)),
        format!("Likes: {}", count_or_unknown(video.like_count)),
        format!("Comments: {}", count_or_unknown(video.comment_count)),
        format!("URL: {}", video.url()),
        format!("Published: {}", date_or_unknown(video.published_at)),
    ];
    if !video.tags.is_empty() {
        lines.push(format!("Tags: {}", video.tags.join(", ")));
    }
    lines.join("\n")
}

pub fn format_video_list(videos: &[VideoMetadata]) -> String {
    videos
        .iter()
        .map(format_video)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Render channel details.
pub fn format_channel(channel: &ChannelMetadata) -> String {
    [
        format!("Channel Name: {}", channel.title),
        format!("Subscribers: {}", count_or_unknown(channel.subscriber_count)),
        format!("Total Videos: {}", count_or_unknown(channel.video_count)),
        format!("Total Views: {}", count_or_unknown(channel.view_count)),
        format!(
            "Description: {}",
            description_or_placeholder(&channel.description)
        ),
        format!("Created: {}", date_or_unknown(channel.published_at)),
    ]
    .join("\n")
}

/// Render a single comment.
pub fn format_comment(comment: &Comment) -> String {
    [
        format!("Author: {}", comment.author),
        format!("Comment: {}", comment.text),
        format!("Likes: {}", comment.like_count),
        format!("Posted: {}", date_or_unknown(comment.published_at)),
    ]
    .join("\n")
}

pub fn format_comment_list(comments: &[Comment]) -> String {
    comments
        .iter()
        .map(format_comment)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Render a transcript with one timestamped line per segment.
pub fn format_transcript(transcript: &Transcript) -> String {
    transcript
        .segments
        .iter()
        .map(|segment| {
            format!(
                "[{}] {}",
                format_timestamp(segment.start_seconds),
                segment.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a quiz with lettered options and an answer key at the end.
pub fn format_quiz(title: &str, questions: &[Question]) -> String {
    let mut out = format!("=== Quiz: {} ===\n", title);

    for (i, question) in questions.iter().enumerate() {
        out.push_str(&format!("\n{}. ", i + 1));
        match question {
            Question::MultipleChoice {
                question, options, ..
            } => {
                out.push_str(question);
                out.push('\n');
                for (j, option) in options.iter().enumerate() {
                    out.push_str(&format!("   {}. {}\n", option_letter(j), option));
                }
            }
            Question::TrueFalse { question, .. } => {
                out.push_str(&format!("True or False: {}\n", question));
            }
            Question::FillBlank { question, .. } => {
                out.push_str(&format!("Fill in the blank: {}\n", question));
            }
        }
    }

    out.push_str("\n=== Answer Key ===\n");
    for (i, question) in questions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, question.answer()));
    }

    out
}

/// Render a flash-card deck, one block per card.
pub fn format_flashcards(cards: &[Flashcard]) -> String {
    if cards.is_empty() {
        return "No flash cards could be generated.".to_string();
    }

    let mut out = format!("=== Flash Cards ({}) ===\n", cards.len());
    for (i, card) in cards.iter().enumerate() {
        out.push_str(&format!(
            "\nCard {} [{} | {} | {}]\nFront: {}\nBack: {}\n",
            i + 1,
            card.category,
            card.difficulty,
            card.timestamp.as_deref().unwrap_or("--:--"),
            card.front,
            card.back
        ));
    }
    out
}

pub(crate) fn count_or_unknown(value: Option<u64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

fn date_or_unknown(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

fn description_or_placeholder(description: &str) -> &str {
    if description.is_empty() {
        "No description available"
    } else {
        description
    }
}

/// Format seconds as MM:SS, or HH:MM:SS from one hour up.
fn format_timestamp(seconds: f64) -> String {
    let total = seconds as u64;
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}

fn option_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study::{CardCategory, Flashcard};
    use crate::youtube::TranscriptSegment;

    fn video() -> VideoMetadata {
        VideoMetadata {
            id: "dQw4w9WgXcQ".to_string(),
            title: "Test Video".to_string(),
            channel_id: "UCtest".to_string(),
            channel_title: "Test Channel".to_string(),
            description: String::new(),
            published_at: None,
            duration: Some("PT4M13S".to_string()),
            view_count: Some(1000),
            like_count: None,
            comment_count: None,
            tags: vec![],
        }
    }

    #[test]
    fn test_format_video() {
        let rendered = format_video(&video());
        assert!(rendered.contains("Title: Test Video"));
        assert!(rendered.contains("Channel: Test Channel"));
        assert!(rendered.contains("Description: No description available"));
        assert!(rendered.contains("Views: 1000"));
        assert!(rendered.contains("Likes: Unknown"));
        assert!(rendered.contains("URL: https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(!rendered.contains("Tags:"));
    }

    #[test]
    fn test_format_video_list_separator() {
        let rendered = format_video_list(&[video(), video()]);
        assert_eq!(rendered.matches("\n---\n").count(), 1);
    }

    #[test]
    fn test_format_transcript_timestamps() {
        let transcript = Transcript::new(
            "abc12345678".to_string(),
            vec![
                TranscriptSegment::new("First line", 65.0, 5.0),
                TranscriptSegment::new("Much later", 3665.0, 5.0),
            ],
        );
        let rendered = format_transcript(&transcript);
        assert!(rendered.contains("[01:05] First line"));
        assert!(rendered.contains("[01:01:05] Much later"));
    }

    #[test]
    fn test_format_quiz() {
        let questions = vec![
            Question::MultipleChoice {
                question: "Pick one.".to_string(),
                options: vec![
                    "a".to_string(),
                    "b".to_string(),
                    "c".to_string(),
                    "d".to_string(),
                ],
                correct_answer: "b".to_string(),
            },
            Question::TrueFalse {
                question: "The sky is blue.".to_string(),
                correct_answer: "True".to_string(),
            },
            Question::FillBlank {
                question: "The _____ is blue".to_string(),
                correct_answer: "sky".to_string(),
            },
        ];

        let rendered = format_quiz("Test Video", &questions);
        assert!(rendered.starts_with("=== Quiz: Test Video ==="));
        assert!(rendered.contains("   A. a"));
        assert!(rendered.contains("   D. d"));
        assert!(rendered.contains("2. True or False: The sky is blue."));
        assert!(rendered.contains("3. Fill in the blank: The _____ is blue"));
        assert!(rendered.contains("=== Answer Key ==="));
        assert!(rendered.contains("1. b"));
        assert!(rendered.contains("3. sky"));
    }

    #[test]
    fn test_format_flashcards() {
        let cards = vec![Flashcard::new(
            "front text".to_string(),
            "back text".to_string(),
            Some("00:30".to_string()),
            CardCategory::Definition,
        )];

        let rendered = format_flashcards(&cards);
        assert!(rendered.starts_with("=== Flash Cards (1) ==="));
        assert!(rendered.contains("Card 1 [Definition | Hard | 00:30]"));
        assert!(rendered.contains("Front: front text"));
        assert!(rendered.contains("Back: back text"));

        assert_eq!(format_flashcards(&[]), "No flash cards could be generated.");
    }

    #[test]
    fn test_format_comment() {
        let comment = Comment {
            author: "viewer1".to_string(),
            text: "Nice one".to_string(),
            like_count: 3,
            published_at: None,
        };
        let rendered = format_comment(&comment);
        assert!(rendered.contains("Author: viewer1"));
        assert!(rendered.contains("Comment: Nice one"));
        assert!(rendered.contains("Likes: 3"));
        assert!(rendered.contains("Posted: Unknown"));
    }
}
