//! PostgreSQL implementation of SessionStore.
//!
//! One row per game. The table name comes from configuration and is spliced
//! into the SQL, so it must pass [`is_valid_table_name`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::config::is_valid_table_name;
use crate::domain::foundation::{GameId, GameStatus, Timestamp};
use crate::domain::game::Game;
use crate::ports::{SessionStore, StoreError};

/// PostgreSQL implementation of SessionStore.
#[derive(Clone)]
pub struct PostgresSessionStore {
    pool: PgPool,
    table: Option<String>,
}

impl PostgresSessionStore {
    /// Creates a new PostgresSessionStore over `table`.
    pub fn new(pool: PgPool, table: Option<String>) -> Self {
        Self { pool, table }
    }

    fn table(&self) -> Result<&str, StoreError> {
        match self.table.as_deref() {
            Some(table) if is_valid_table_name(table) => Ok(table),
            Some(table) => Err(StoreError::Unavailable(format!(
                "Refusing to use table name {:?}",
                table
            ))),
            None => Err(StoreError::MissingTable),
        }
    }

    /// Creates the games table if it does not exist.
    pub async fn ensure_table(&self) -> Result<(), StoreError> {
        let table = self.table()?;
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                game_id UUID PRIMARY KEY,
                target_word TEXT NOT NULL,
                attempts TEXT[] NOT NULL DEFAULT '{{}}',
                max_attempts INTEGER NOT NULL,
                status TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL
            )
            "#
        ))
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(format!("Failed to create table: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl SessionStore for PostgresSessionStore {
    async fn get(&self, id: &GameId) -> Result<Option<Game>, StoreError> {
        let table = self.table()?;
        let row = sqlx::query(&format!(
            r#"
            SELECT game_id, target_word, attempts, max_attempts, status,
                   created_at, updated_at
            FROM {table}
            WHERE game_id = $1
            "#
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(format!("Failed to fetch game: {}", e)))?;

        row.map(row_to_game).transpose()
    }

    async fn put(&self, game: &Game) -> Result<(), StoreError> {
        let table = self.table()?;
        let max_attempts = i32::try_from(game.max_attempts()).map_err(|_| {
            StoreError::Serialization(format!(
                "max_attempts {} does not fit an INTEGER column",
                game.max_attempts()
            ))
        })?;

        sqlx::query(&format!(
            r#"
            INSERT INTO {table} (
                game_id, target_word, attempts, max_attempts, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (game_id) DO UPDATE SET
                target_word = EXCLUDED.target_word,
                attempts = EXCLUDED.attempts,
                max_attempts = EXCLUDED.max_attempts,
                status = EXCLUDED.status,
                updated_at = EXCLUDED.updated_at
            "#
        ))
        .bind(game.id().as_uuid())
        .bind(game.target_word())
        .bind(game.attempts().to_vec())
        .bind(max_attempts)
        .bind(game.status().as_str())
        .bind(game.created_at().as_datetime())
        .bind(game.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(format!("Failed to store game: {}", e)))?;

        Ok(())
    }
}

fn row_to_game(row: PgRow) -> Result<Game, StoreError> {
    let decode = |e: sqlx::Error| StoreError::Serialization(e.to_string());

    let id: uuid::Uuid = row.try_get("game_id").map_err(decode)?;
    let target_word: String = row.try_get("target_word").map_err(decode)?;
    let attempts: Vec<String> = row.try_get("attempts").map_err(decode)?;
    let max_attempts: i32 = row.try_get("max_attempts").map_err(decode)?;
    let status: String = row.try_get("status").map_err(decode)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(decode)?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(decode)?;

    let status = GameStatus::parse(&status)
        .ok_or_else(|| StoreError::Serialization(format!("Unknown game status: {}", status)))?;
    let max_attempts = u32::try_from(max_attempts).map_err(|_| {
        StoreError::Serialization(format!("Negative max_attempts: {}", max_attempts))
    })?;

    Ok(Game::reconstitute(
        GameId::from_uuid(id),
        target_word,
        attempts,
        max_attempts,
        status,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
