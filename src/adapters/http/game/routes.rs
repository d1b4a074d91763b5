//! Route configuration for game endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{create_game, get_game, submit_guess, GameAppState};

/// Creates the game router with all endpoints.
///
/// Routes:
/// - `POST /game` - Create a game
/// - `GET /game/:game_id` - Read a game
/// - `POST /game/:game_id/guess` - Submit a guess
pub fn game_router() -> Router<GameAppState> {
    Router::new()
        .route("/game", post(create_game))
        .route("/game/:game_id", get(get_game))
        .route("/game/:game_id/guess", post(submit_guess))
}
