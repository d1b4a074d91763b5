//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, status enum, timestamps, errors)
//! - `game` - Game aggregate, word value objects and guess scoring

pub mod foundation;
pub mod game;
