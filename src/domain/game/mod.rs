//! Game domain module.
//!
//! Holds the game aggregate, its word value objects, and the per-letter
//! scoring rule used to evaluate guesses.

mod aggregate;
mod errors;
mod scoring;
mod word;

pub use aggregate::{Game, GuessOutcome};
pub use errors::GameError;
pub use scoring::{is_solved, score, LetterValidity};
pub use word::{Guess, TargetWord, WordLength, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
