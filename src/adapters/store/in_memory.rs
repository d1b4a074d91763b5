//! In-Memory Session Store Adapter
//!
//! Keeps games in a process-local map. Useful for development and tests;
//! every game is lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::GameId;
use crate::domain::game::Game;
use crate::ports::{SessionStore, StoreError};

/// In-memory storage for game sessions
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    games: Arc<RwLock<HashMap<GameId, Game>>>,
}

impl InMemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            games: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the number of stored games
    pub async fn len(&self) -> usize {
        self.games.read().await.len()
    }

    /// True when no game has been stored
    pub async fn is_empty(&self) -> bool {
        self.games.read().await.is_empty()
    }

    /// Clear all stored games (useful for tests)
    pub async fn clear(&self) {
        self.games.write().await.clear();
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, id: &GameId) -> Result<Option<Game>, StoreError> {
        Ok(self.games.read().await.get(id).cloned())
    }

    async fn put(&self, game: &Game) -> Result<(), StoreError> {
        self.games.write().await.insert(*game.id(), game.clone());
        Ok(())
    }
}
