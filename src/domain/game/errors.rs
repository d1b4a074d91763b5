//! Game-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, GameId, GameStatus, ValidationError};

/// Errors surfaced by game operations.
///
/// Client-side variants carry a message safe to show to callers;
/// `Dependency` and `Configuration` carry internal detail meant for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Malformed or missing input.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// No game stored under this id.
    #[error("Game not found: {0}")]
    NotFound(GameId),

    /// Guess submitted to a game that already finished.
    #[error("Game is not active (status: {0})")]
    NotActive(GameStatus),

    /// Word source or session store failure.
    #[error("Dependency failure: {0}")]
    Dependency(String),

    /// Required configuration is absent.
    #[error("Configuration missing: {0}")]
    Configuration(String),
}

impl GameError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        GameError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(id: GameId) -> Self {
        GameError::NotFound(id)
    }

    pub fn dependency(message: impl Into<String>) -> Self {
        GameError::Dependency(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        GameError::Configuration(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            GameError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            GameError::NotFound(_) => ErrorCode::GameNotFound,
            GameError::NotActive(_) => ErrorCode::GameNotActive,
            GameError::Dependency(_) => ErrorCode::InternalError,
            GameError::Configuration(_) => ErrorCode::ConfigurationError,
        }
    }
}

impl From<ValidationError> for GameError {
    fn from(err: ValidationError) -> Self {
        GameError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for GameError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => GameError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            ErrorCode::GameNotActive => {
                let status = err
                    .detail("status")
                    .and_then(GameStatus::parse)
                    .unwrap_or(GameStatus::Active);
                GameError::NotActive(status)
            }
            ErrorCode::ConfigurationError => GameError::Configuration(err.message),
            _ => GameError::Dependency(err.to_string()),
        }
    }
}
