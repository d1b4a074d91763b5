//! GameStatus enum for tracking the lifecycle of a game session.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a game session.
///
/// `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Active,
    Won,
    Lost,
}

impl GameStatus {
    /// Returns true if the game still accepts guesses.
    pub fn is_active(&self) -> bool {
        matches!(self, GameStatus::Active)
    }

    /// Returns the wire representation used in responses and stored records.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Active => "active",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }

    /// Parses the wire representation.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(GameStatus::Active),
            "won" => Some(GameStatus::Won),
            "lost" => Some(GameStatus::Lost),
            _ => None,
        }
    }
}

impl StateMachine for GameStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use GameStatus::*;
        matches!((self, target), (Active, Won) | (Active, Lost))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use GameStatus::*;
        match self {
            Active => vec![Won, Lost],
            Won | Lost => vec![],
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
