//! Mock ports shared by the game handler tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::GameId;
use crate::domain::game::{Game, TargetWord, WordLength};
use crate::ports::{SessionStore, StoreError, WordSource, WordSourceError};

pub fn game_for(word: &str) -> Game {
    let length = WordLength::new(word.chars().count() as u32).unwrap();
    Game::new(GameId::new(), TargetWord::new(word, length).unwrap())
}

pub struct MockSessionStore {
    games: Mutex<HashMap<GameId, Game>>,
    puts: Mutex<Vec<Game>>,
    gets: Mutex<usize>,
    get_error: Option<StoreError>,
    put_error: Option<StoreError>,
}

impl MockSessionStore {
    pub fn new() -> Self {
        Self {
            games: Mutex::new(HashMap::new()),
            puts: Mutex::new(Vec::new()),
            gets: Mutex::new(0),
            get_error: None,
            put_error: None,
        }
    }

    pub fn with_game(game: Game) -> Self {
        let store = Self::new();
        store.games.lock().unwrap().insert(*game.id(), game);
        store
    }

    pub fn failing_get(error: StoreError) -> Self {
        Self {
            get_error: Some(error),
            ..Self::new()
        }
    }

    pub fn failing_put(error: StoreError) -> Self {
        Self::new().with_put_error(error)
    }

    pub fn with_put_error(mut self, error: StoreError) -> Self {
        self.put_error = Some(error);
        self
    }

    pub fn puts(&self) -> Vec<Game> {
        self.puts.lock().unwrap().clone()
    }

    pub fn gets(&self) -> usize {
        *self.gets.lock().unwrap()
    }

    pub fn stored(&self, id: &GameId) -> Option<Game> {
        self.games.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn get(&self, id: &GameId) -> Result<Option<Game>, StoreError> {
        *self.gets.lock().unwrap() += 1;
        if let Some(err) = &self.get_error {
            return Err(err.clone());
        }
        Ok(self.games.lock().unwrap().get(id).cloned())
    }

    async fn put(&self, game: &Game) -> Result<(), StoreError> {
        if let Some(err) = &self.put_error {
            return Err(err.clone());
        }
        self.games.lock().unwrap().insert(*game.id(), game.clone());
        self.puts.lock().unwrap().push(game.clone());
        Ok(())
    }
}

pub struct MockWordSource {
    words: Vec<String>,
    error: Option<WordSourceError>,
    requests: Mutex<Vec<(u32, usize)>>,
}

impl MockWordSource {
    pub fn returning(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
            error: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: WordSourceError) -> Self {
        Self {
            words: Vec::new(),
            error: Some(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(u32, usize)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl WordSource for MockWordSource {
    async fn random_words(
        &self,
        length: WordLength,
        count: usize,
    ) -> Result<Vec<String>, WordSourceError> {
        self.requests.lock().unwrap().push((length.get(), count));
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        Ok(self.words.iter().take(count).cloned().collect())
    }
}
