//! Study-material derivation from video metadata and transcripts.
//!
//! Two sibling generators share the same sentence primitives: a fixed-size
//! quiz of mixed question types and a categorized flash-card deck. Both are
//! pure, single-pass transformations; the only randomness comes from the
//! RNG handle the caller passes in, so a fixed seed reproduces the output.

mod flashcards;
mod quiz;
mod sentences;

pub use flashcards::{
    filter_flashcards, generate_flashcards, CardCategory, CardDifficulty, Flashcard,
};
pub use quiz::{generate_quiz, Question, QUIZ_SIZE};
pub use sentences::{blank_out_word, extract_sentences, BLANK};
