//! Game command and query handlers.

mod create_game;
mod get_game;
mod submit_guess;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_game::{CreateGameCommand, CreateGameHandler, CreateGameResult};
pub use get_game::{GetGameHandler, GetGameQuery};
pub use submit_guess::{SubmitGuessCommand, SubmitGuessHandler, SubmitGuessResult};
