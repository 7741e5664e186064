//! Flash-card generation.
//!
//! Derives a deck of up to `max_cards` cards from a transcript, cycling
//! through three templates. Card `i` takes its timestamp from segment `i`
//! when one exists and its template from `i mod 3`.

use super::sentences::{blank_out_word, extract_sentences};
use crate::error::{PuggError, Result};
use crate::youtube::Transcript;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Word-count floor (exclusive) for card sentences.
const CARD_MIN_WORDS: usize = 5;

/// Card template category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardCategory {
    #[serde(rename = "Fill in the blank")]
    FillInTheBlank,
    #[serde(rename = "Q&A")]
    QuestionAnswer,
    #[serde(rename = "Definition")]
    Definition,
}

impl CardCategory {
    /// Fixed difficulty pairing for each template.
    pub fn difficulty(self) -> CardDifficulty {
        match self {
            CardCategory::FillInTheBlank => CardDifficulty::Medium,
            CardCategory::QuestionAnswer => CardDifficulty::Easy,
            CardCategory::Definition => CardDifficulty::Hard,
        }
    }
}

impl std::fmt::Display for CardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardCategory::FillInTheBlank => write!(f, "Fill in the blank"),
            CardCategory::QuestionAnswer => write!(f, "Q&A"),
            CardCategory::Definition => write!(f, "Definition"),
        }
    }
}

impl std::str::FromStr for CardCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fill in the blank" | "fill-in-the-blank" | "fill_blank" | "blank" => {
                Ok(CardCategory::FillInTheBlank)
            }
            "q&a" | "qa" | "q-and-a" => Ok(CardCategory::QuestionAnswer),
            "definition" | "define" => Ok(CardCategory::Definition),
            _ => Err(format!("Unknown card category: {}", s)),
        }
    }
}

/// Card difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardDifficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for CardDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardDifficulty::Easy => write!(f, "Easy"),
            CardDifficulty::Medium => write!(f, "Medium"),
            CardDifficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl std::str::FromStr for CardDifficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(CardDifficulty::Easy),
            "medium" => Ok(CardDifficulty::Medium),
            "hard" => Ok(CardDifficulty::Hard),
            _ => Err(format!("Unknown difficulty: {}", s)),
        }
    }
}

/// A single flash card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
    /// Start time of the segment sharing this card's index, as `MM:SS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub category: CardCategory,
    pub difficulty: CardDifficulty,
}

impl Flashcard {
    /// Create a card; difficulty follows the category pairing.
    pub fn new(
        front: String,
        back: String,
        timestamp: Option<String>,
        category: CardCategory,
    ) -> Self {
        Self {
            front,
            back,
            timestamp,
            difficulty: category.difficulty(),
            category,
        }
    }
}

/// Derive at most `max_cards` cards from the transcript.
///
/// Sentences are extracted per segment, in order, so segment boundaries
/// double as sentence breaks (caption tracks often omit terminal
/// punctuation). The fill-in-the-blank and Q&A templates skip sentences of
/// five or fewer words without producing a replacement card, so the deck
/// may come up short of `max_cards`.
pub fn generate_flashcards<R: Rng>(
    transcript: &Transcript,
    max_cards: usize,
    rng: &mut R,
) -> Result<Vec<Flashcard>> {
    if transcript.segments.is_empty() {
        return Err(PuggError::EmptyTranscript);
    }

    let sentences: Vec<String> = transcript
        .segments
        .iter()
        .flat_map(|segment| extract_sentences(&segment.text, CARD_MIN_WORDS, None))
        .collect();

    let count = max_cards.min(sentences.len());
    let mut cards = Vec::with_capacity(count);

    for (i, sentence) in sentences.iter().take(count).enumerate() {
        let timestamp = transcript
            .segments
            .get(i)
            .map(|segment| format_timestamp(segment.start_seconds));

        let card = match i % 3 {
            0 => fill_blank_card(sentence, timestamp, rng),
            1 => question_answer_card(sentence, timestamp),
            _ => Some(definition_card(sentence, timestamp)),
        };

        if let Some(card) = card {
            cards.push(card);
        }
    }

    Ok(cards)
}

/// Restrict a deck to the given categories and difficulty.
///
/// A plain predicate over already-generated cards; nothing is regenerated
/// to make up for filtered-out cards.
pub fn filter_flashcards(
    cards: Vec<Flashcard>,
    categories: Option<&[CardCategory]>,
    difficulty: Option<CardDifficulty>,
) -> Vec<Flashcard> {
    cards
        .into_iter()
        .filter(|card| categories.map_or(true, |wanted| wanted.contains(&card.category)))
        .filter(|card| difficulty.map_or(true, |wanted| card.difficulty == wanted))
        .collect()
}

fn fill_blank_card<R: Rng>(
    sentence: &str,
    timestamp: Option<String>,
    rng: &mut R,
) -> Option<Flashcard> {
    let (front, word) = blank_out_word(sentence, rng)?;
    Some(Flashcard::new(
        front,
        format!("Answer: {}\nContext: {}", word, sentence),
        timestamp,
        CardCategory::FillInTheBlank,
    ))
}

fn question_answer_card(sentence: &str, timestamp: Option<String>) -> Option<Flashcard> {
    if sentence.split_whitespace().count() <= CARD_MIN_WORDS {
        return None;
    }
    Some(Flashcard::new(
        format!("What is the significance of: '{}'?", sentence),
        format!("Explanation: {}", sentence),
        timestamp,
        CardCategory::QuestionAnswer,
    ))
}

fn definition_card(sentence: &str, timestamp: Option<String>) -> Flashcard {
    let front = format!(
        "Define or explain the concept mentioned at {}:",
        timestamp.as_deref().unwrap_or("unknown time")
    );
    Flashcard::new(
        front,
        format!("Concept: {}", sentence),
        timestamp,
        CardCategory::Definition,
    )
}

/// Format seconds as a zero-padded MM:SS timestamp.
///
/// Minutes are not rolled over into hours; 3900 seconds reads "65:00".
fn format_timestamp(seconds: f64) -> String {
    let mins = (seconds / 60.0) as u32;
    let secs = (seconds % 60.0) as u32;
    format!("{:02}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube::TranscriptSegment;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn transcript(segments: &[(&str, f64)]) -> Transcript {
        Transcript::new(
            "abc12345678".to_string(),
            segments
                .iter()
                .map(|(text, start)| TranscriptSegment::new(*text, *start, 5.0))
                .collect(),
        )
    }

    #[test]
    fn test_template_cycle_and_timestamps() {
        let transcript = transcript(&[
            ("This is a short test sentence here", 0.0),
            ("Another slightly longer example sentence for testing", 65.0),
        ]);
        let mut rng = StdRng::seed_from_u64(7);

        let cards = generate_flashcards(&transcript, 2, &mut rng).unwrap();
        assert_eq!(cards.len(), 2);

        assert_eq!(cards[0].category, CardCategory::FillInTheBlank);
        assert_eq!(cards[0].difficulty, CardDifficulty::Medium);
        assert_eq!(cards[0].timestamp.as_deref(), Some("00:00"));
        assert!(cards[0].front.contains("_____"));
        assert!(cards[0].back.starts_with("Answer: "));
        assert!(cards[0].back.contains("\nContext: "));

        assert_eq!(cards[1].category, CardCategory::QuestionAnswer);
        assert_eq!(cards[1].difficulty, CardDifficulty::Easy);
        assert_eq!(cards[1].timestamp.as_deref(), Some("01:05"));
        assert!(cards[1].front.starts_with("What is the significance of:"));
    }

    #[test]
    fn test_deck_size_bounds() {
        let transcript = transcript(&[
            ("The first segment has exactly seven words", 0.0),
            ("The second segment also has seven words", 10.0),
            ("The third segment rounds out the set", 20.0),
        ]);

        let mut rng = StdRng::seed_from_u64(1);
        let cards = generate_flashcards(&transcript, 2, &mut rng).unwrap();
        assert!(cards.len() <= 2);

        // Never more cards than derivable sentences, whatever the request.
        let mut rng = StdRng::seed_from_u64(1);
        let cards = generate_flashcards(&transcript, 50, &mut rng).unwrap();
        assert!(cards.len() <= 3);
    }

    #[test]
    fn test_empty_transcript_fails() {
        let transcript = Transcript::new("abc12345678".to_string(), vec![]);
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(
            generate_flashcards(&transcript, 5, &mut rng),
            Err(PuggError::EmptyTranscript)
        ));
    }

    #[test]
    fn test_short_segments_produce_no_cards() {
        let transcript = transcript(&[("Too short here", 0.0), ("Also very short", 5.0)]);
        let mut rng = StdRng::seed_from_u64(1);

        let cards = generate_flashcards(&transcript, 5, &mut rng).unwrap();
        assert!(cards.is_empty());
    }

    #[test]
    fn test_definition_card_without_timestamp() {
        // One segment splitting into three sentences leaves cards 1 and 2
        // without a matching segment.
        let transcript = transcript(&[(
            "The first sentence is long enough to pass. The second sentence is also long enough. The third sentence rounds out the trio nicely.",
            30.0,
        )]);
        let mut rng = StdRng::seed_from_u64(3);

        let cards = generate_flashcards(&transcript, 3, &mut rng).unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].timestamp.as_deref(), Some("00:30"));
        assert_eq!(cards[1].timestamp, None);
        assert_eq!(cards[2].timestamp, None);

        assert_eq!(cards[2].category, CardCategory::Definition);
        assert!(cards[2].front.contains("unknown time"));
        assert!(cards[2].back.starts_with("Concept: "));
    }

    fn six_sentence_transcript() -> Transcript {
        transcript(&[
            ("The first sentence has more than five words", 0.0),
            ("The second sentence has more than five words", 10.0),
            ("The third sentence has more than five words", 20.0),
            ("The fourth sentence has more than five words", 30.0),
            ("The fifth sentence has more than five words", 40.0),
            ("The sixth sentence has more than five words", 50.0),
        ])
    }

    #[test]
    fn test_filter_by_difficulty_easy_is_qa_only() {
        let mut rng = StdRng::seed_from_u64(4);
        let cards = generate_flashcards(&six_sentence_transcript(), 6, &mut rng).unwrap();
        assert_eq!(cards.len(), 6);

        let easy = filter_flashcards(cards, None, Some(CardDifficulty::Easy));
        assert_eq!(easy.len(), 2);
        assert!(easy
            .iter()
            .all(|card| card.category == CardCategory::QuestionAnswer));
    }

    #[test]
    fn test_filter_by_category() {
        let mut rng = StdRng::seed_from_u64(4);
        let cards = generate_flashcards(&six_sentence_transcript(), 6, &mut rng).unwrap();

        let definitions = filter_flashcards(cards, Some(&[CardCategory::Definition]), None);
        assert_eq!(definitions.len(), 2);
        assert!(definitions
            .iter()
            .all(|card| card.difficulty == CardDifficulty::Hard));
    }

    #[test]
    fn test_filter_combination_never_regenerates() {
        let mut rng = StdRng::seed_from_u64(4);
        let cards = generate_flashcards(&six_sentence_transcript(), 6, &mut rng).unwrap();

        // Q&A cards are Easy, so asking for Hard Q&A yields nothing.
        let none = filter_flashcards(
            cards,
            Some(&[CardCategory::QuestionAnswer]),
            Some(CardDifficulty::Hard),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "00:00");
        assert_eq!(format_timestamp(65.0), "01:05");
        assert_eq!(format_timestamp(59.9), "00:59");
        // No rollover into hours.
        assert_eq!(format_timestamp(3900.0), "65:00");
    }

    #[test]
    fn test_category_parsing_and_display() {
        assert_eq!("qa".parse::<CardCategory>(), Ok(CardCategory::QuestionAnswer));
        assert_eq!(
            "Fill-in-the-blank".parse::<CardCategory>(),
            Ok(CardCategory::FillInTheBlank)
        );
        assert!("mystery".parse::<CardCategory>().is_err());

        assert_eq!(CardCategory::QuestionAnswer.to_string(), "Q&A");
        assert_eq!("HARD".parse::<CardDifficulty>(), Ok(CardDifficulty::Hard));
    }

    #[test]
    fn test_card_serialization_names() {
        let card = Flashcard::new(
            "front".to_string(),
            "back".to_string(),
            Some("00:10".to_string()),
            CardCategory::FillInTheBlank,
        );
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["category"], "Fill in the blank");
        assert_eq!(json["difficulty"], "Medium");
        assert_eq!(json["timestamp"], "00:10");
    }
}
