//! Session store port.
//!
//! Key-value persistence for [`Game`] records, keyed by [`GameId`].
//!
//! # Consistency
//!
//! `put` is a plain, unconditional overwrite. Guess evaluation reads a game,
//! mutates it in memory and writes it back, so two concurrent guesses on the
//! same game can both read the pre-guess state; the later write wins and the
//! earlier attempt is lost. Adapters must not add hidden locking that would
//! change this.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::GameId;
use crate::domain::game::{Game, GameError};

/// Errors raised by session store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No table / key namespace was configured for the store.
    #[error("Session store table is not configured")]
    MissingTable,

    /// The backing service could not be reached or rejected the operation.
    #[error("Session store unavailable: {0}")]
    Unavailable(String),

    /// A stored record could not be encoded or decoded.
    #[error("Session record could not be (de)serialized: {0}")]
    Serialization(String),
}

impl From<StoreError> for GameError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingTable => GameError::configuration(err.to_string()),
            other => GameError::dependency(other.to_string()),
        }
    }
}

/// Port for game session persistence.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load a game by id. Returns `None` if no record exists.
    async fn get(&self, id: &GameId) -> Result<Option<Game>, StoreError>;

    /// Store a game, replacing any existing record with the same id.
    async fn put(&self, game: &Game) -> Result<(), StoreError>;
}
