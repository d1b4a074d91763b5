//! Word source port.
//!
//! Supplies random target words of a requested length.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::game::{GameError, WordLength};

/// Errors raised by word source adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordSourceError {
    /// The source endpoint is not configured.
    #[error("Word source is not configured: {0}")]
    Unconfigured(String),

    /// The request could not be sent or timed out.
    #[error("Word source request failed: {0}")]
    Request(String),

    /// The source answered with a non-success status.
    #[error("Word source returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not a list of words.
    #[error("Word source returned a malformed payload: {0}")]
    Malformed(String),
}

impl From<WordSourceError> for GameError {
    fn from(err: WordSourceError) -> Self {
        match err {
            WordSourceError::Unconfigured(_) => GameError::configuration(err.to_string()),
            other => GameError::dependency(other.to_string()),
        }
    }
}

/// Port for fetching candidate target words.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Fetch up to `count` random words of exactly `length` letters.
    ///
    /// An empty result means the source had no word of that length; callers
    /// decide whether that is an error.
    async fn random_words(
        &self,
        length: WordLength,
        count: usize,
    ) -> Result<Vec<String>, WordSourceError>;
}
