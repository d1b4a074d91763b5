//! Word source backed by a fixed list.
//!
//! Used for development, tests, and deployments without a word API.

use async_trait::async_trait;
use rand::prelude::IndexedRandom;

use crate::domain::game::WordLength;
use crate::ports::{WordSource, WordSourceError};

/// Built-in word list, used when no list is configured.
const DEFAULT_WORDS: &[&str] = &[
    "ox", "go", "up", "sky", "fox", "jam", "word", "game", "play", "lamp", "crane", "slate",
    "brick", "ghost", "plumb", "rusty", "guitar", "planet", "bright", "wonder", "journey",
    "captain", "kitchen", "mountain", "elephant",
];

/// Picks random words of the requested length from a list.
#[derive(Debug, Clone)]
pub struct FixedWordSource {
    words: Vec<String>,
}

impl FixedWordSource {
    /// Create a source over `words`, normalized to trimmed lowercase.
    /// Blank entries are dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Create a source over the configured list, or the built-in list when empty.
    pub fn from_config(words: &[String]) -> Self {
        if words.is_empty() {
            Self::default()
        } else {
            Self::new(words)
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for FixedWordSource {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS)
    }
}

#[async_trait]
impl WordSource for FixedWordSource {
    async fn random_words(
        &self,
        length: WordLength,
        count: usize,
    ) -> Result<Vec<String>, WordSourceError> {
        let candidates: Vec<&String> = self
            .words
            .iter()
            .filter(|w| w.chars().count() == length.as_usize())
            .collect();

        Ok(candidates
            .choose_multiple(&mut rand::rng(), count)
            .map(|w| (*w).clone())
            .collect())
    }
}
