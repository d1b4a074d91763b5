//! Per-letter guess feedback.
//!
//! Each position is scored on its own: an exact match is `Correct`, a letter
//! found anywhere else in the target is `WrongPlace`, anything else is
//! `Wrong`. Repeated letters are not budgeted, so a guess with two `a`s
//! against a target with one `a` can earn two `WrongPlace` marks.

use serde::{Deserialize, Serialize};

/// Feedback for a single guessed letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LetterValidity {
    Correct,
    WrongPlace,
    Wrong,
}

/// Scores `guess` against `target`, one entry per target position.
///
/// Positions the guess does not reach are `Wrong`; guess letters past the
/// end of the target are ignored.
pub fn score(target: &str, guess: &str) -> Vec<LetterValidity> {
    let target: Vec<char> = target.chars().collect();
    let mut guess = guess.chars();

    target
        .iter()
        .map(|expected| match guess.next() {
            Some(letter) if letter == *expected => LetterValidity::Correct,
            Some(letter) if target.contains(&letter) => LetterValidity::WrongPlace,
            _ => LetterValidity::Wrong,
        })
        .collect()
}

/// True when every position is `Correct`.
pub fn is_solved(validity: &[LetterValidity]) -> bool {
    !validity.is_empty() && validity.iter().all(|v| *v == LetterValidity::Correct)
}
