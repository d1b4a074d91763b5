//! GetGameHandler - Query handler for reading a game's current state.

use std::sync::Arc;

use tracing::error;

use crate::domain::foundation::GameId;
use crate::domain::game::{Game, GameError};
use crate::ports::SessionStore;

/// Query for a single game.
#[derive(Debug, Clone)]
pub struct GetGameQuery {
    pub game_id: GameId,
}

/// Handler for reading games. Never writes.
pub struct GetGameHandler {
    store: Arc<dyn SessionStore>,
}

impl GetGameHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetGameQuery) -> Result<Game, GameError> {
        self.store
            .get(&query.game_id)
            .await
            .map_err(|e| {
                error!("Failed to load game {}: {}", query.game_id, e);
                GameError::from(e)
            })?
            .ok_or(GameError::NotFound(query.game_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::game::test_support::{game_for, MockSessionStore};
    use crate::domain::foundation::GameStatus;
    use crate::domain::game::Guess;

    #[tokio::test]
    async fn returns_stored_game() {
        let game = game_for("crane");
        let id = *game.id();
        let store = Arc::new(MockSessionStore::with_game(game.clone()));

        let found = GetGameHandler::new(store).handle(GetGameQuery { game_id: id }).await;
        assert_eq!(found, Ok(game));
    }

    #[tokio::test]
    async fn unknown_game_is_not_found() {
        let store = Arc::new(MockSessionStore::new());
        let id = GameId::new();

        let err = GetGameHandler::new(store)
            .handle(GetGameQuery { game_id: id })
            .await
            .unwrap_err();
        assert_eq!(err, GameError::NotFound(id));
    }

    #[tokio::test]
    async fn repeated_reads_of_finished_game_are_identical() {
        let mut game = game_for("crane");
        game.submit_guess(&Guess::parse("crane").unwrap()).unwrap();
        let id = *game.id();
        let store = Arc::new(MockSessionStore::with_game(game));
        let handler = GetGameHandler::new(store.clone());

        let first = handler.handle(GetGameQuery { game_id: id }).await.unwrap();
        for _ in 0..3 {
            let again = handler.handle(GetGameQuery { game_id: id }).await.unwrap();
            assert_eq!(again.status(), GameStatus::Won);
            assert_eq!(again.attempts(), first.attempts());
        }
        assert!(store.puts().is_empty());
    }
}
