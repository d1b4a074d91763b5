//! Game aggregate entity.
//!
//! A game is one play-through against a single target word. It is created
//! with an attempt budget of `word length + 1` and mutated only by
//! [`Game::submit_guess`].

use crate::domain::foundation::{
    DomainError, ErrorCode, GameId, GameStatus, StateMachine, Timestamp,
};
use serde::{Deserialize, Serialize};

use super::scoring::{is_solved, score, LetterValidity};
use super::word::{Guess, TargetWord};

/// Game aggregate - one word-guessing session.
///
/// # Invariants
///
/// - `attempts.len() <= max_attempts`
/// - once `status` is terminal, `attempts` and `status` never change
/// - every accepted guess has the same char length as `target_word`
///
/// Serialized field names match the stored record layout
/// (`gameId`, `targetWord`, `attempts`, `maxAttempts`, `status`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Unique identifier for this game.
    #[serde(rename = "gameId")]
    id: GameId,

    /// Lowercase word the player is trying to find.
    target_word: String,

    /// Submitted guesses, oldest first.
    attempts: Vec<String>,

    /// Attempt budget fixed at creation.
    max_attempts: u32,

    /// Current status.
    status: GameStatus,

    /// When the game was created.
    created_at: Timestamp,

    /// When the game was last updated.
    updated_at: Timestamp,
}

/// Result of scoring one guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub validity: Vec<LetterValidity>,
    pub remaining_attempts: u32,
    pub status: GameStatus,
}

impl Game {
    /// Create a new active game with no attempts.
    pub fn new(id: GameId, target: TargetWord) -> Self {
        let max_attempts = target.length().max_attempts();
        let now = Timestamp::now();
        Self {
            id,
            target_word: target.into_string(),
            attempts: Vec::new(),
            max_attempts,
            status: GameStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a game from persistence (no validation).
    pub fn reconstitute(
        id: GameId,
        target_word: String,
        attempts: Vec<String>,
        max_attempts: u32,
        status: GameStatus,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            target_word,
            attempts,
            max_attempts,
            status,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &GameId {
        &self.id
    }

    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    pub fn attempts(&self) -> &[String] {
        &self.attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Attempts left before the game is lost.
    pub fn remaining_attempts(&self) -> u32 {
        let used = u32::try_from(self.attempts.len()).unwrap_or(u32::MAX);
        self.max_attempts.saturating_sub(used)
    }

    /// Number of chars in the target word.
    pub fn word_length(&self) -> usize {
        self.target_word.chars().count()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Score a guess, record it, and advance the game status.
    ///
    /// # Errors
    ///
    /// - `GameNotActive` if the game already finished
    /// - `ValidationFailed` if the guess length differs from the target
    pub fn submit_guess(&mut self, guess: &Guess) -> Result<GuessOutcome, DomainError> {
        self.ensure_active()?;

        let expected = self.word_length();
        if guess.char_len() != expected {
            return Err(DomainError::validation(
                "guess",
                format!("Guess must be {} letters long.", expected),
            ));
        }

        let validity = score(&self.target_word, guess.as_str());
        self.attempts.push(guess.as_str().to_string());

        if is_solved(&validity) {
            self.status = self.status.transition_to(GameStatus::Won)?;
        } else if self.attempts.len() >= self.max_attempts as usize {
            self.status = self.status.transition_to(GameStatus::Lost)?;
        }
        self.updated_at = Timestamp::now();

        Ok(GuessOutcome {
            validity,
            remaining_attempts: self.remaining_attempts(),
            status: self.status,
        })
    }

    /// Fails with `GameNotActive` once the game is won or lost.
    pub fn ensure_active(&self) -> Result<(), DomainError> {
        if self.status.is_active() {
            Ok(())
        } else {
            Err(
                DomainError::new(ErrorCode::GameNotActive, "Game is not active.")
                    .with_detail("status", self.status.as_str()),
            )
        }
    }
}
