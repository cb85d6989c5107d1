//! Moves and the results of game operations.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.player, self.position.label())
    }
}

/// Why a request left the game untouched.
///
/// Illegal requests are not errors: the game simply stays as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// The shown snapshot already has a winner.
    #[display("Game is already over")]
    GameOver,
    /// The square is taken.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
    /// Board index outside 0-8.
    #[display("Index {} is outside the board", _0)]
    OutOfBounds(usize),
    /// Undo at the initial empty board.
    #[display("Already at the start of the game")]
    AtStart,
    /// Redo at the latest recorded move.
    #[display("Already at the latest move")]
    AtLatest,
    /// Jump target past the end of history.
    #[display("No step {} in history", _0)]
    NoSuchStep(usize),
}

/// What an operation did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A mark was placed and a new snapshot recorded.
    Moved(Move),
    /// The cursor moved within existing history.
    Jumped {
        /// Step shown before the jump.
        from: usize,
        /// Step shown after the jump.
        to: usize,
    },
    /// The game was replaced with a fresh one.
    Restarted,
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl Transition {
    /// Returns true if the game state changed.
    pub fn is_applied(&self) -> bool {
        !matches!(self, Transition::Ignored(_))
    }
}
