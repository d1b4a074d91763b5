//! HTTP adapter for the game module.
//!
//! # Endpoints
//!
//! - `POST /game` - Create a new game
//! - `GET /game/:game_id` - Read a game's current state
//! - `POST /game/:game_id/guess` - Submit a guess and receive per-letter feedback

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::GameAppState;
pub use routes::game_router;
