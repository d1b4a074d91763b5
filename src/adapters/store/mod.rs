//! Session Store Adapters
//!
//! Implementations of the SessionStore port for persisting games.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionStore** - Process-local map (testing/development)
//! - **RedisSessionStore** - JSON records under `{table}:{gameId}` keys
//! - **PostgresSessionStore** - One row per game in a configured table

mod in_memory;
mod postgres;
mod redis;

pub use in_memory::InMemorySessionStore;
pub use postgres::PostgresSessionStore;
pub use redis::RedisSessionStore;
