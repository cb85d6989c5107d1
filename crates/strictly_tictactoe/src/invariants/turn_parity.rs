//! Turn parity invariant: X moves on even steps.

use super::super::GameState;
use super::Invariant;

/// Invariant: `x_is_next == (step % 2 == 0)`.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(game: &GameState) -> bool {
        game.x_is_next() == (game.step() % 2 == 0)
    }

    fn description() -> &'static str {
        "X is next exactly on even steps"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_through_moves_and_jumps() {
        let mut game = GameState::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            game.apply_move(pos);
            assert!(TurnParityInvariant::holds(&game));
        }
        game.jump_to(1);
        assert!(TurnParityInvariant::holds(&game));
    }

    #[test]
    fn test_flipped_turn_violates() {
        let mut game = GameState::new();
        game.x_is_next = false;
        assert!(!TurnParityInvariant::holds(&game));
    }
}
