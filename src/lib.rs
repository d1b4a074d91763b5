//! Wordle API - Word-guessing game service
//!
//! Clients create a game with a target word of a chosen length, then submit
//! guesses and receive per-letter feedback until the game is won or the
//! attempt budget runs out.
//!
//! Layout follows a hexagonal architecture: `domain` holds the game rules,
//! `ports` the store and word-source contracts, `application` the command and
//! query handlers, and `adapters` the HTTP API and backend implementations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
