//! Sentence extraction and blank-removal primitives.
//!
//! Shared by the quiz and flash-card generators. Splitting is plain
//! punctuation splitting on `.`, `!`, and `?`; no locale-aware boundary
//! detection is attempted.

use rand::Rng;

/// Marker substituted for the removed word in fill-in-the-blank prompts.
pub const BLANK: &str = "_____";

/// Split raw text into candidate sentences and keep those whose word count
/// falls inside the window.
///
/// `min_words` is an exclusive lower bound; `max_words`, when given, is an
/// exclusive upper bound. Pieces are trimmed, and empty pieces from
/// consecutive terminators are dropped.
pub fn extract_sentences(text: &str, min_words: usize, max_words: Option<usize>) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .filter(|piece| {
            let words = piece.split_whitespace().count();
            words > min_words && max_words.map_or(true, |max| words < max)
        })
        .map(str::to_string)
        .collect()
}

/// Remove one word from a sentence, chosen uniformly from the interior
/// positions `[2, len - 2]`, and substitute [`BLANK`].
///
/// Returns the blanked sentence and the removed word, or `None` when the
/// sentence has five or fewer words.
pub fn blank_out_word<R: Rng>(sentence: &str, rng: &mut R) -> Option<(String, String)> {
    let mut words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() <= 5 {
        return None;
    }

    let index = rng.gen_range(2..=words.len() - 2);
    let removed = words[index].to_string();
    words[index] = BLANK;

    Some((words.join(" "), removed))
}
