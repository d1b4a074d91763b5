//! HTTP DTOs (Data Transfer Objects) for game endpoints.
//!
//! These types define the JSON request/response structure for the game API.
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::handlers::game::SubmitGuessResult;
use crate::domain::foundation::GameStatus;
use crate::domain::game::{Game, LetterValidity};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a new game.
///
/// `wordLength` is kept as a raw JSON value; numeric strings and integral
/// floats are accepted and coerced by the application layer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGameRequest {
    #[serde(rename = "wordLength", default)]
    pub word_length: Value,
}

/// Request to submit a guess.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitGuessRequest {
    pub guess: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a newly created game.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameResponse {
    pub game_id: String,
    pub max_attempts: u32,
    pub current_state: Vec<String>,
    pub target_word: String,
}

impl From<&Game> for CreateGameResponse {
    fn from(game: &Game) -> Self {
        Self {
            game_id: game.id().to_string(),
            max_attempts: game.max_attempts(),
            current_state: game.attempts().to_vec(),
            target_word: game.target_word().to_string(),
        }
    }
}

/// Per-letter feedback for one guess.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub validity: Vec<LetterValidity>,
    pub remaining_attempts: u32,
    pub status: GameStatus,
}

impl From<SubmitGuessResult> for GuessResponse {
    fn from(result: SubmitGuessResult) -> Self {
        Self {
            validity: result.validity,
            remaining_attempts: result.remaining_attempts,
            status: result.status,
        }
    }
}

/// Current state of a game. The target is only revealed once the game is over.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub game_id: String,
    pub max_attempts: u32,
    pub current_state: Vec<String>,
    pub remaining_attempts: u32,
    pub status: GameStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_word: Option<String>,
}

impl From<&Game> for GameResponse {
    fn from(game: &Game) -> Self {
        let target_word = if game.status().is_active() {
            None
        } else {
            Some(game.target_word().to_string())
        };
        Self {
            game_id: game.id().to_string(),
            max_attempts: game.max_attempts(),
            current_state: game.attempts().to_vec(),
            remaining_attempts: game.remaining_attempts(),
            status: game.status(),
            target_word,
        }
    }
}

/// Liveness check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Message safe to show to the caller.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::GameId;
    use crate::domain::game::{Guess, TargetWord, WordLength};
    use serde_json::json;

    fn game_for(word: &str) -> Game {
        let length = WordLength::new(word.len() as u32).unwrap();
        Game::new(GameId::new(), TargetWord::new(word, length).unwrap())
    }

    #[test]
    fn create_request_keeps_raw_word_length() {
        let req: CreateGameRequest = serde_json::from_str(r#"{"wordLength": "5"}"#).unwrap();
        assert_eq!(req.word_length, json!("5"));

        let req: CreateGameRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.word_length, Value::Null);
    }

    #[test]
    fn guess_request_requires_a_string() {
        assert!(serde_json::from_str::<SubmitGuessRequest>(r#"{"guess": "crane"}"#).is_ok());
        assert!(serde_json::from_str::<SubmitGuessRequest>(r#"{"guess": 5}"#).is_err());
        assert!(serde_json::from_str::<SubmitGuessRequest>("{}").is_err());
    }

    #[test]
    fn create_response_shape() {
        let game = game_for("crane");
        let value = serde_json::to_value(CreateGameResponse::from(&game)).unwrap();

        assert_eq!(
            value,
            json!({
                "gameId": game.id().to_string(),
                "maxAttempts": 6,
                "currentState": [],
                "targetWord": "crane",
            })
        );
    }

    #[test]
    fn guess_response_uses_kebab_case_validity() {
        let response = GuessResponse {
            validity: vec![
                LetterValidity::Correct,
                LetterValidity::WrongPlace,
                LetterValidity::Wrong,
            ],
            remaining_attempts: 3,
            status: GameStatus::Active,
        };

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "validity": ["correct", "wrong-place", "wrong"],
                "remainingAttempts": 3,
                "status": "active",
            })
        );
    }

    #[test]
    fn game_response_hides_target_while_active() {
        let mut game = game_for("crane");
        game.submit_guess(&Guess::parse("slate").unwrap()).unwrap();

        let value = serde_json::to_value(GameResponse::from(&game)).unwrap();

        assert_eq!(value["currentState"], json!(["slate"]));
        assert_eq!(value["remainingAttempts"], 5);
        assert!(value.get("targetWord").is_none());
    }

    #[test]
    fn game_response_reveals_target_when_finished() {
        let mut game = game_for("crane");
        game.submit_guess(&Guess::parse("crane").unwrap()).unwrap();

        let value = serde_json::to_value(GameResponse::from(&game)).unwrap();

        assert_eq!(value["status"], "won");
        assert_eq!(value["targetWord"], "crane");
    }
}
