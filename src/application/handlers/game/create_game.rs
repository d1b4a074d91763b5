//! CreateGameHandler - Command handler for starting new games.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::domain::foundation::GameId;
use crate::domain::game::{Game, GameError, TargetWord, WordLength};
use crate::ports::{SessionStore, WordSource};

/// Command to create a new game.
///
/// `word_length` is the raw request value; it is coerced and validated here.
#[derive(Debug, Clone)]
pub struct CreateGameCommand {
    pub word_length: Value,
}

/// Result of successful game creation.
#[derive(Debug, Clone)]
pub struct CreateGameResult {
    pub game: Game,
}

/// Handler for creating games.
pub struct CreateGameHandler {
    store: Arc<dyn SessionStore>,
    word_source: Arc<dyn WordSource>,
}

impl CreateGameHandler {
    pub fn new(store: Arc<dyn SessionStore>, word_source: Arc<dyn WordSource>) -> Self {
        Self { store, word_source }
    }

    pub async fn handle(&self, cmd: CreateGameCommand) -> Result<CreateGameResult, GameError> {
        // 1. Validate requested length
        let length = WordLength::coerce(&cmd.word_length).map_err(|e| {
            debug!("Rejected word length {}: {}", cmd.word_length, e);
            GameError::validation("wordLength", "Invalid word length.")
        })?;

        // 2. Fetch a target word
        let target = self.fetch_target_word(length).await?;

        // 3. Build the game
        let game = Game::new(GameId::new(), target);

        // 4. Persist
        self.store.put(&game).await.map_err(|e| {
            error!("Failed to store new game {}: {}", game.id(), e);
            GameError::from(e)
        })?;

        debug!(
            game_id = %game.id(),
            word_length = length.get(),
            max_attempts = game.max_attempts(),
            "Created game"
        );

        Ok(CreateGameResult { game })
    }

    async fn fetch_target_word(&self, length: WordLength) -> Result<TargetWord, GameError> {
        let words = self.word_source.random_words(length, 1).await.map_err(|e| {
            error!("Error while fetching word of length {}: {}", length, e);
            GameError::from(e)
        })?;

        let Some(word) = words.into_iter().next() else {
            error!("Word source returned no words of length {}", length);
            return Err(GameError::dependency("No words returned from the word source"));
        };

        TargetWord::new(&word, length).map_err(|e| {
            warn!("Word source returned unusable word: {}", e);
            GameError::dependency(format!("Unusable word from word source: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::game::test_support::{
        MockSessionStore, MockWordSource,
    };
    use crate::domain::foundation::GameStatus;
    use crate::ports::{StoreError, WordSourceError};
    use serde_json::json;

    fn handler(store: Arc<MockSessionStore>, source: Arc<MockWordSource>) -> CreateGameHandler {
        CreateGameHandler::new(store, source)
    }

    fn cmd(word_length: Value) -> CreateGameCommand {
        CreateGameCommand { word_length }
    }

    #[tokio::test]
    async fn creates_active_game_with_budget_of_length_plus_one() {
        let store = Arc::new(MockSessionStore::new());
        let source = Arc::new(MockWordSource::returning(&["Crane"]));

        let result = handler(store.clone(), source.clone())
            .handle(cmd(json!(5)))
            .await
            .unwrap();

        let game = result.game;
        assert_eq!(game.max_attempts(), 6);
        assert!(game.attempts().is_empty());
        assert_eq!(game.status(), GameStatus::Active);
        assert_eq!(game.target_word(), "crane");
        assert_eq!(source.requests(), vec![(5, 1)]);
        assert_eq!(store.puts(), vec![game]);
    }

    #[tokio::test]
    async fn accepts_numeric_string_length() {
        let store = Arc::new(MockSessionStore::new());
        let source = Arc::new(MockWordSource::returning(&["ab"]));

        let result = handler(store, source).handle(cmd(json!("2"))).await.unwrap();
        assert_eq!(result.game.max_attempts(), 3);
    }

    #[tokio::test]
    async fn rejects_invalid_lengths_without_side_effects() {
        for value in [json!(0), json!(1), json!(-3), json!("abc"), Value::Null] {
            let store = Arc::new(MockSessionStore::new());
            let source = Arc::new(MockWordSource::returning(&["crane"]));

            let result = handler(store.clone(), source.clone()).handle(cmd(value)).await;

            assert_eq!(
                result.unwrap_err(),
                GameError::validation("wordLength", "Invalid word length.")
            );
            assert!(store.puts().is_empty());
            assert!(source.requests().is_empty());
        }
    }

    #[tokio::test]
    async fn fails_when_source_returns_no_words() {
        let store = Arc::new(MockSessionStore::new());
        let source = Arc::new(MockWordSource::returning(&[]));

        let result = handler(store.clone(), source).handle(cmd(json!(5))).await;
        assert!(matches!(result, Err(GameError::Dependency(_))));
        assert!(store.puts().is_empty());
    }

    #[tokio::test]
    async fn fails_when_source_errors() {
        let store = Arc::new(MockSessionStore::new());
        let source = Arc::new(MockWordSource::failing(WordSourceError::Status {
            status: 500,
            body: "boom".into(),
        }));

        let result = handler(store.clone(), source).handle(cmd(json!(5))).await;
        assert!(matches!(result, Err(GameError::Dependency(_))));
        assert!(store.puts().is_empty());
    }

    #[tokio::test]
    async fn fails_when_source_word_has_wrong_length() {
        let store = Arc::new(MockSessionStore::new());
        let source = Arc::new(MockWordSource::returning(&["cranes"]));

        let result = handler(store.clone(), source).handle(cmd(json!(5))).await;
        assert!(matches!(result, Err(GameError::Dependency(_))));
        assert!(store.puts().is_empty());
    }

    #[tokio::test]
    async fn surfaces_store_failure() {
        let store = Arc::new(MockSessionStore::failing_put(StoreError::Unavailable(
            "timeout".into(),
        )));
        let source = Arc::new(MockWordSource::returning(&["crane"]));

        let result = handler(store, source).handle(cmd(json!(5))).await;
        assert!(matches!(result, Err(GameError::Dependency(_))));
    }

    #[tokio::test]
    async fn missing_table_is_a_configuration_error() {
        let store = Arc::new(MockSessionStore::failing_put(StoreError::MissingTable));
        let source = Arc::new(MockWordSource::returning(&["crane"]));

        let result = handler(store, source).handle(cmd(json!(5))).await;
        assert!(matches!(result, Err(GameError::Configuration(_))));
    }

    #[tokio::test]
    async fn each_game_gets_a_fresh_id() {
        let store = Arc::new(MockSessionStore::new());
        let source = Arc::new(MockWordSource::returning(&["crane"]));
        let handler = handler(store, source);

        let a = handler.handle(cmd(json!(5))).await.unwrap();
        let b = handler.handle(cmd(json!(5))).await.unwrap();
        assert_ne!(a.game.id(), b.game.id());
    }
}
