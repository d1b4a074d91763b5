//! SubmitGuessHandler - Command handler for evaluating a guess.
//!
//! Load, score, append, transition, overwrite. The read and the write are
//! separate store calls; see [`SessionStore`] for the resulting race.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::foundation::{GameId, GameStatus};
use crate::domain::game::{GameError, Guess, LetterValidity};
use crate::ports::SessionStore;

/// Command to submit one guess to a game.
#[derive(Debug, Clone)]
pub struct SubmitGuessCommand {
    pub game_id: GameId,
    pub guess: String,
}

/// Feedback for an accepted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitGuessResult {
    pub validity: Vec<LetterValidity>,
    pub remaining_attempts: u32,
    pub status: GameStatus,
}

/// Handler for guess evaluation.
pub struct SubmitGuessHandler {
    store: Arc<dyn SessionStore>,
}

impl SubmitGuessHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SubmitGuessCommand) -> Result<SubmitGuessResult, GameError> {
        // 1. Load
        let mut game = self
            .store
            .get(&cmd.game_id)
            .await
            .map_err(|e| {
                error!("Failed to load game {}: {}", cmd.game_id, e);
                GameError::from(e)
            })?
            .ok_or(GameError::NotFound(cmd.game_id))?;

        // 2. Finished games reject every guess, empty ones included
        game.ensure_active()?;

        // 3. Score, append and transition
        let guess = Guess::parse(&cmd.guess)?;
        let outcome = game.submit_guess(&guess)?;

        // 4. Overwrite
        self.store.put(&game).await.map_err(|e| {
            error!("Failed to store game {}: {}", cmd.game_id, e);
            GameError::from(e)
        })?;

        debug!(
            game_id = %cmd.game_id,
            status = %outcome.status,
            remaining_attempts = outcome.remaining_attempts,
            "Evaluated guess"
        );

        Ok(SubmitGuessResult {
            validity: outcome.validity,
            remaining_attempts: outcome.remaining_attempts,
            status: outcome.status,
        })
    }
}
