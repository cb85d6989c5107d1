//! User intents and their mapping onto game operations.

use super::action::Transition;
use super::game::GameState;
use super::position::Position;
use tracing::{info, instrument};

/// A request from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// A square was activated (clicked, pressed, or selected).
    CellActivated(Position),
    /// Step back one move.
    UndoRequested,
    /// Step forward one move.
    RedoRequested,
    /// Show a specific history step.
    JumpRequested(usize),
    /// Discard the game and start over.
    NewGameRequested,
}

/// Applies an intent to the game.
///
/// A new game replaces the state wholesale rather than resetting it field
/// by field.
#[instrument(skip(game), fields(step = game.step()))]
pub fn dispatch(game: &mut GameState, intent: Intent) -> Transition {
    match intent {
        Intent::CellActivated(position) => game.apply_move(position),
        Intent::UndoRequested => game.undo(),
        Intent::RedoRequested => game.redo(),
        Intent::JumpRequested(step) => game.jump_to(step),
        Intent::NewGameRequested => {
            *game = GameState::new();
            info!("New game started");
            Transition::Restarted
        }
    }
}
