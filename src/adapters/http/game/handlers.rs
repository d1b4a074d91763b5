//! HTTP handlers for game endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::application::handlers::game::{
    CreateGameCommand, CreateGameHandler, GetGameHandler, GetGameQuery, SubmitGuessCommand,
    SubmitGuessHandler,
};
use crate::domain::foundation::GameId;
use crate::domain::game::GameError;
use crate::ports::{SessionStore, WordSource};

use super::dto::{
    CreateGameRequest, CreateGameResponse, ErrorResponse, GameResponse, GuessResponse,
    SubmitGuessRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct GameAppState {
    pub store: Arc<dyn SessionStore>,
    pub word_source: Arc<dyn WordSource>,
}

impl GameAppState {
    pub fn new(store: Arc<dyn SessionStore>, word_source: Arc<dyn WordSource>) -> Self {
        Self { store, word_source }
    }

    pub fn create_game_handler(&self) -> CreateGameHandler {
        CreateGameHandler::new(self.store.clone(), self.word_source.clone())
    }

    pub fn submit_guess_handler(&self) -> SubmitGuessHandler {
        SubmitGuessHandler::new(self.store.clone())
    }

    pub fn get_game_handler(&self) -> GetGameHandler {
        GetGameHandler::new(self.store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /game - Create a new game
pub async fn create_game(
    State(state): State<GameAppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, GameApiError> {
    let request: CreateGameRequest = parse_body(body)?;

    let cmd = CreateGameCommand {
        word_length: request.word_length,
    };
    let result = state
        .create_game_handler()
        .handle(cmd)
        .await
        .map_err(|e| GameApiError::from_game_error(e, "Could not create game."))?;

    Ok((
        StatusCode::CREATED,
        Json(CreateGameResponse::from(&result.game)),
    ))
}

/// POST /game/:game_id/guess - Submit a guess
pub async fn submit_guess(
    State(state): State<GameAppState>,
    Path(game_id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, GameApiError> {
    let request: SubmitGuessRequest = parse_body(body)?;
    let game_id = parse_game_id(&game_id)?;

    let cmd = SubmitGuessCommand {
        game_id,
        guess: request.guess,
    };
    let result = state
        .submit_guess_handler()
        .handle(cmd)
        .await
        .map_err(|e| GameApiError::from_game_error(e, "Could not submit guess."))?;

    Ok(Json(GuessResponse::from(result)))
}

/// GET /game/:game_id - Read a game
pub async fn get_game(
    State(state): State<GameAppState>,
    Path(game_id): Path<String>,
) -> Result<impl IntoResponse, GameApiError> {
    let game_id = parse_game_id(&game_id)?;

    let game = state
        .get_game_handler()
        .handle(GetGameQuery { game_id })
        .await
        .map_err(|e| GameApiError::from_game_error(e, "Could not load game."))?;

    Ok(Json(GameResponse::from(&game)))
}

/// Decodes a JSON body whatever `Content-Type` the client declared.
fn parse_body<T: DeserializeOwned>(
    body: Result<Bytes, BytesRejection>,
) -> Result<T, GameApiError> {
    let bytes = body.map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "Could not read request body");
        GameApiError::invalid_body()
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        debug!(error = %e, "Rejected request body");
        GameApiError::invalid_body()
    })
}

/// Ids that are not UUIDs cannot exist in the store.
fn parse_game_id(raw: &str) -> Result<GameId, GameApiError> {
    raw.parse().map_err(|_| {
        debug!(game_id = raw, "Rejected malformed game id");
        GameApiError::NotFound
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts game errors to HTTP responses.
#[derive(Debug, PartialEq, Eq)]
pub enum GameApiError {
    BadRequest(String),
    NotFound,
    /// Generic message; the cause is logged, never returned.
    Internal(&'static str),
}

impl GameApiError {
    fn invalid_body() -> Self {
        GameApiError::BadRequest("Invalid request body.".to_string())
    }

    /// Maps a game error, using `fallback` as the message for server errors.
    pub fn from_game_error(err: GameError, fallback: &'static str) -> Self {
        match &err {
            GameError::ValidationFailed { message, .. } => {
                GameApiError::BadRequest(message.clone())
            }
            GameError::NotFound(_) => GameApiError::NotFound,
            GameError::NotActive(_) => GameApiError::BadRequest("Game is not active.".to_string()),
            GameError::Dependency(_) | GameError::Configuration(_) => {
                error!(code = %err.code(), error = %err, "{}", fallback);
                GameApiError::Internal(fallback)
            }
        }
    }
}

impl IntoResponse for GameApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            GameApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
            GameApiError::NotFound => (StatusCode::NOT_FOUND, ErrorResponse::new("Game not found.")),
            GameApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(msg))
            }
        };

        (status, Json(error)).into_response()
    }
}
