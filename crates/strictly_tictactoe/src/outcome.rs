//! Derived game outcome.

use super::Player;
use serde::{Deserialize, Serialize};

/// Classification of a snapshot.
///
/// Never stored; always recomputed from the board being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one square is free.
    InProgress,
    /// Player completed a line.
    Win(Player),
    /// Board is full with no line completed.
    Tie,
}

impl Outcome {
    /// Returns true once no further moves can be made.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "Winner: {}", player),
            Outcome::Tie => write!(f, "It's a Tie!"),
        }
    }
}
