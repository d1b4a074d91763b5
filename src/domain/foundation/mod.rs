//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the game domain.

mod errors;
mod game_status;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use game_status::GameStatus;
pub use ids::GameId;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
