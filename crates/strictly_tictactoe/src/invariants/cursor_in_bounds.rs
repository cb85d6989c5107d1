//! Cursor invariant: the shown step exists.

use super::super::GameState;
use super::Invariant;

/// Invariant: `0 <= step < history length`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.step() < game.history_len()
    }

    fn description() -> &'static str {
        "Step cursor points into recorded history"
    }
}
