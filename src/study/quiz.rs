//! Quiz generation.
//!
//! Builds a fixed-size quiz from video metadata and an optional transcript.
//! Question order is deterministic (title, channel, statistics, transcript,
//! description, filler); option order within multiple-choice questions is
//! shuffled with the caller's RNG.

use super::sentences::{blank_out_word, extract_sentences};
use crate::youtube::{Transcript, VideoMetadata};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A quiz always contains exactly this many questions.
pub const QUIZ_SIZE: usize = 10;

/// Word-count window (exclusive bounds) for transcript sentences.
const TRANSCRIPT_MIN_WORDS: usize = 5;
const TRANSCRIPT_MAX_WORDS: usize = 15;

/// Word-count floor (exclusive) for description sentences.
const DESCRIPTION_MIN_WORDS: usize = 5;

const WRONG_TITLES: [&str; 3] = ["Video Title", "Untitled Video", "No Title Available"];
const WRONG_CHANNELS: [&str; 3] = ["Unknown Creator", "YouTube User", "Anonymous"];
const WRONG_CONTENT_TYPES: [&str; 3] = ["Audio Only", "Image Slideshow", "Text Document"];

/// A single quiz question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
    /// Four options, one correct; option order is shuffled.
    MultipleChoice {
        question: String,
        options: Vec<String>,
        correct_answer: String,
    },
    /// A statement judged "True" or "False".
    TrueFalse {
        question: String,
        correct_answer: String,
    },
    /// A prompt containing exactly one `_____` marker.
    FillBlank {
        question: String,
        correct_answer: String,
    },
}

impl Question {
    /// The prompt shown to the player.
    pub fn prompt(&self) -> &str {
        match self {
            Question::MultipleChoice { question, .. }
            | Question::TrueFalse { question, .. }
            | Question::FillBlank { question, .. } => question,
        }
    }

    /// The expected answer.
    pub fn answer(&self) -> &str {
        match self {
            Question::MultipleChoice { correct_answer, .. }
            | Question::TrueFalse { correct_answer, .. }
            | Question::FillBlank { correct_answer, .. } => correct_answer,
        }
    }
}

/// Generate a quiz of exactly [`QUIZ_SIZE`] questions.
///
/// Metadata questions come first, then transcript- and description-derived
/// ones; a generic filler question pads the quiz to size when fewer were
/// derivable. Passing a seeded RNG makes the output reproducible.
pub fn generate_quiz<R: Rng>(
    video: &VideoMetadata,
    transcript: Option<&Transcript>,
    rng: &mut R,
) -> Vec<Question> {
    let mut questions = Vec::with_capacity(QUIZ_SIZE);

    questions.push(multiple_choice(
        "What is the title of this video?",
        &video.title,
        &WRONG_TITLES,
        rng,
    ));

    questions.push(multiple_choice(
        "Which channel uploaded this video?",
        &video.channel_title,
        &WRONG_CHANNELS,
        rng,
    ));

    let views = video.view_count.unwrap_or(0);
    if views > 0 {
        // True by construction.
        questions.push(true_false(
            format!("This video has more than {} views.", views / 2),
            true,
        ));
    }

    if video.like_count.unwrap_or(0) > 0 {
        // Always false, independent of the actual counts.
        questions.push(true_false(
            "The video has received more likes than views.".to_string(),
            false,
        ));
    }

    if let Some(transcript) = transcript {
        push_transcript_questions(&mut questions, transcript, rng);
    }

    if !video.description.is_empty() {
        let sentences = extract_sentences(&video.description, DESCRIPTION_MIN_WORDS, None);
        if let Some(sentence) = sentences.choose(rng) {
            questions.push(true_false(
                format!("The video description mentions: \"{}\"", sentence),
                true,
            ));
        }
    }

    while questions.len() < QUIZ_SIZE {
        questions.push(multiple_choice(
            "What type of content is this video?",
            "Video Content",
            &WRONG_CONTENT_TYPES,
            rng,
        ));
    }
    questions.truncate(QUIZ_SIZE);

    questions
}

fn push_transcript_questions<R: Rng>(
    questions: &mut Vec<Question>,
    transcript: &Transcript,
    rng: &mut R,
) {
    let sentences = extract_sentences(
        &transcript.full_text,
        TRANSCRIPT_MIN_WORDS,
        Some(TRANSCRIPT_MAX_WORDS),
    );

    if let Some(sentence) = sentences.choose(rng) {
        if let Some((blanked, word)) = blank_out_word(sentence, rng) {
            questions.push(Question::FillBlank {
                question: blanked,
                correct_answer: word,
            });
        }
    }

    if sentences.len() >= 4 {
        if let Some(correct) = sentences.choose(rng).cloned() {
            let others: Vec<String> = sentences
                .iter()
                .filter(|s| **s != correct)
                .cloned()
                .collect();

            // Three distinct decoys are needed after dropping duplicates of
            // the answer.
            if others.len() >= 3 {
                let mut options: Vec<String> = others.choose_multiple(rng, 3).cloned().collect();
                options.push(correct.clone());
                options.shuffle(rng);

                questions.push(Question::MultipleChoice {
                    question: "Which of the following statements appears in the video?".to_string(),
                    options,
                    correct_answer: correct,
                });
            }
        }
    }
}

fn multiple_choice<R: Rng>(
    question: &str,
    correct: &str,
    wrong: &[&str; 3],
    rng: &mut R,
) -> Question {
    let mut options = vec![correct.to_string()];
    options.extend(wrong.iter().map(|w| w.to_string()));
    options.shuffle(rng);

    Question::MultipleChoice {
        question: question.to_string(),
        options,
        correct_answer: correct.to_string(),
    }
}

fn true_false(question: String, answer: bool) -> Question {
    Question::TrueFalse {
        question,
        correct_answer: if answer { "True" } else { "False" }.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study::BLANK;
    use crate::youtube::TranscriptSegment;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn video(view_count: u64, like_count: u64, description: &str) -> VideoMetadata {
        VideoMetadata {
            id: "abc12345678".to_string(),
            title: "T".to_string(),
            channel_id: "UCtest".to_string(),
            channel_title: "C".to_string(),
            description: description.to_string(),
            published_at: None,
            duration: None,
            view_count: Some(view_count),
            like_count: Some(like_count),
            comment_count: Some(0),
            tags: vec![],
        }
    }

    fn transcript(texts: &[&str]) -> Transcript {
        Transcript::new(
            "abc12345678".to_string(),
            texts
                .iter()
                .enumerate()
                .map(|(i, text)| TranscriptSegment::new(*text, i as f64 * 10.0, 10.0))
                .collect(),
        )
    }

    #[test]
    fn test_metadata_only_quiz() {
        let video = video(100, 10, "");
        let mut rng = StdRng::seed_from_u64(7);

        let quiz = generate_quiz(&video, None, &mut rng);
        assert_eq!(quiz.len(), QUIZ_SIZE);

        assert_eq!(quiz[0].prompt(), "What is the title of this video?");
        assert_eq!(quiz[0].answer(), "T");

        assert_eq!(quiz[1].prompt(), "Which channel uploaded this video?");
        assert_eq!(quiz[1].answer(), "C");

        assert_eq!(quiz[2].prompt(), "This video has more than 50 views.");
        assert_eq!(quiz[2].answer(), "True");

        assert_eq!(quiz[3].prompt(), "The video has received more likes than views.");
        assert_eq!(quiz[3].answer(), "False");

        // The remaining six are the filler question.
        for question in &quiz[4..] {
            assert_eq!(question.prompt(), "What type of content is this video?");
            assert_eq!(question.answer(), "Video Content");
        }
    }

    #[test]
    fn test_zero_counts_skip_statistics_questions() {
        let video = video(0, 0, "");
        let mut rng = StdRng::seed_from_u64(7);

        let quiz = generate_quiz(&video, None, &mut rng);
        assert_eq!(quiz.len(), QUIZ_SIZE);

        for question in &quiz[2..] {
            assert_eq!(question.prompt(), "What type of content is this video?");
        }
    }

    #[test]
    fn test_multiple_choice_shape() {
        let video = video(5000, 200, "A description that easily has more than five words in it.");
        let transcript = transcript(&[
            "The first statement in this video is here.",
            "The second statement is a little different.",
            "The third statement rounds out the group.",
            "The fourth statement finishes the set nicely.",
        ]);
        let mut rng = StdRng::seed_from_u64(11);

        let quiz = generate_quiz(&video, Some(&transcript), &mut rng);
        assert_eq!(quiz.len(), QUIZ_SIZE);

        for question in &quiz {
            if let Question::MultipleChoice {
                options,
                correct_answer,
                ..
            } = question
            {
                assert_eq!(options.len(), 4);
                assert_eq!(
                    options.iter().filter(|o| *o == correct_answer).count(),
                    1
                );
            }
        }
    }

    #[test]
    fn test_fill_blank_reconstruction() {
        // A single candidate sentence pins down what the blank came from.
        let transcript = transcript(&["The quick brown fox jumps over the lazy dog today."]);
        let video = video(0, 0, "");
        let mut rng = StdRng::seed_from_u64(5);

        let quiz = generate_quiz(&video, Some(&transcript), &mut rng);
        let blank = quiz
            .iter()
            .find_map(|q| match q {
                Question::FillBlank {
                    question,
                    correct_answer,
                } => Some((question.clone(), correct_answer.clone())),
                _ => None,
            })
            .expect("quiz should contain a fill-in-the-blank question");

        assert!(blank.0.contains(BLANK));
        assert_eq!(
            blank.0.replace(BLANK, &blank.1),
            "The quick brown fox jumps over the lazy dog today"
        );
    }

    #[test]
    fn test_statement_question_requires_four_sentences() {
        let video = video(0, 0, "");
        let statement = "Which of the following statements appears in the video?";

        let three = transcript(&[
            "The first statement in this video is here.",
            "The second statement is a little different.",
            "The third statement rounds out the group.",
        ]);
        let mut rng = StdRng::seed_from_u64(2);
        let quiz = generate_quiz(&video, Some(&three), &mut rng);
        assert!(quiz.iter().all(|q| q.prompt() != statement));

        let four = transcript(&[
            "The first statement in this video is here.",
            "The second statement is a little different.",
            "The third statement rounds out the group.",
            "The fourth statement finishes the set nicely.",
        ]);
        let mut rng = StdRng::seed_from_u64(2);
        let quiz = generate_quiz(&video, Some(&four), &mut rng);

        let question = quiz
            .iter()
            .find(|q| q.prompt() == statement)
            .expect("quiz should contain the statement question");
        if let Question::MultipleChoice {
            options,
            correct_answer,
            ..
        } = question
        {
            assert_eq!(options.len(), 4);
            assert!(options.contains(correct_answer));
            assert!(four.full_text.contains(correct_answer.as_str()));
        } else {
            panic!("statement question should be multiple choice");
        }
    }

    #[test]
    fn test_description_question() {
        let video = video(0, 0, "Short intro. This description sentence has plenty of words to pass.");
        let mut rng = StdRng::seed_from_u64(9);

        let quiz = generate_quiz(&video, None, &mut rng);
        let question = quiz
            .iter()
            .find(|q| q.prompt().starts_with("The video description mentions:"))
            .expect("quiz should contain a description question");

        assert_eq!(question.answer(), "True");
        assert!(question
            .prompt()
            .contains("This description sentence has plenty of words to pass"));
    }

    #[test]
    fn test_seed_reproducibility() {
        let video = video(1234, 56, "A description that easily has more than five words in it.");
        let transcript = transcript(&[
            "The first statement in this video is here.",
            "The second statement is a little different.",
            "The third statement rounds out the group.",
            "The fourth statement finishes the set nicely.",
        ]);

        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let quiz_a = generate_quiz(&video, Some(&transcript), &mut rng_a);
        let quiz_b = generate_quiz(&video, Some(&transcript), &mut rng_b);

        assert_eq!(
            serde_json::to_string(&quiz_a).unwrap(),
            serde_json::to_string(&quiz_b).unwrap()
        );
    }

    #[test]
    fn test_question_serialization_tags() {
        let question = Question::TrueFalse {
            question: "Statement.".to_string(),
            correct_answer: "True".to_string(),
        };
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["type"], "true_false");
        assert_eq!(json["correct_answer"], "True");
    }
}
