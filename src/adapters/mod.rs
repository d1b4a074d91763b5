//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST API (axum)
//! - `store` - Session stores (in-memory, Redis, PostgreSQL)
//! - `word_source` - Word sources (HTTP API, fixed list)

pub mod http;
pub mod store;
pub mod word_source;

pub use http::{api_router, GameAppState};
pub use store::{InMemorySessionStore, PostgresSessionStore, RedisSessionStore};
pub use word_source::{FixedWordSource, HttpWordSource};
