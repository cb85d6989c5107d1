//! Empty root invariant: history starts from the empty board.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: the first snapshot is the empty board.
pub struct EmptyRootInvariant;

impl Invariant<GameState> for EmptyRootInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().get(0) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
