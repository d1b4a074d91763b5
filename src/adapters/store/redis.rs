//! Redis-backed session store for multi-instance deployments.
//!
//! Each game is one string key holding its JSON record:
//!
//! ```text
//! {table}:{gameId} -> {"gameId": "...", "targetWord": "...", "attempts": [...], ...}
//! ```
//!
//! `put` is a plain `SET` (with `EX` when a TTL is configured), so the last
//! writer wins.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::domain::foundation::GameId;
use crate::domain::game::Game;
use crate::ports::{SessionStore, StoreError};

/// Redis session store.
#[derive(Clone)]
pub struct RedisSessionStore {
    conn: MultiplexedConnection,
    table: Option<String>,
    ttl_secs: Option<u64>,
}

impl RedisSessionStore {
    /// Create a store writing under the `table` key namespace.
    ///
    /// A missing table is not rejected here; every call fails with
    /// [`StoreError::MissingTable`] instead.
    pub fn new(conn: MultiplexedConnection, table: Option<String>, ttl_secs: Option<u64>) -> Self {
        Self {
            conn,
            table,
            ttl_secs,
        }
    }

    fn key_for(&self, id: &GameId) -> Result<String, StoreError> {
        let table = self.table.as_deref().ok_or(StoreError::MissingTable)?;
        Ok(game_key(table, id))
    }
}

/// Redis key for a game record.
fn game_key(table: &str, id: &GameId) -> String {
    format!("{}:{}", table, id)
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn get(&self, id: &GameId) -> Result<Option<Game>, StoreError> {
        let key = self.key_for(id)?;
        let mut conn = self.conn.clone();

        let raw: Option<String> = conn
            .get(&key)
            .await
            .map_err(|e: redis::RedisError| StoreError::Unavailable(e.to_string()))?;

        raw.map(|json| decode_game(&json)).transpose()
    }

    async fn put(&self, game: &Game) -> Result<(), StoreError> {
        let key = self.key_for(game.id())?;
        let json = encode_game(game)?;
        let mut conn = self.conn.clone();

        let mut cmd = redis::cmd("SET");
        cmd.arg(&key).arg(json);
        if let Some(ttl) = self.ttl_secs {
            cmd.arg("EX").arg(ttl);
        }

        cmd.query_async::<_, ()>(&mut conn)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

fn encode_game(game: &Game) -> Result<String, StoreError> {
    serde_json::to_string(game).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn decode_game(json: &str) -> Result<Game, StoreError> {
    serde_json::from_str(json).map_err(|e| StoreError::Serialization(e.to_string()))
}
