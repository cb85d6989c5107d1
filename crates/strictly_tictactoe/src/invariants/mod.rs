//! First-class invariants for the game timeline.
//!
//! Invariants are logical properties that must hold after every
//! transition. They are checked after each mutation and can be tested
//! independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($name:ident),+) => {
        impl<S, $($name),+> InvariantSet<S> for ($($name,)+)
        where
            $($name: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();

                $(
                    if !$name::holds(state) {
                        violations.push(InvariantViolation::new($name::description()));
                    }
                )+

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_history;
pub mod cursor_in_bounds;
pub mod empty_root;
pub mod turn_parity;

pub use alternating_history::AlternatingHistoryInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use empty_root::EmptyRootInvariant;
pub use turn_parity::TurnParityInvariant;

/// All timeline invariants as a composable set.
pub type TimelineInvariants = (
    EmptyRootInvariant,
    CursorInBoundsInvariant,
    TurnParityInvariant,
    AlternatingHistoryInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameState::new();
        assert!(TimelineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_time_travel() {
        let mut game = GameState::new();
        game.apply_move(Position::TopLeft);
        game.apply_move(Position::Center);
        game.apply_move(Position::TopRight);
        game.undo();
        game.undo();
        game.apply_move(Position::BottomRight);
        assert!(TimelineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);
        game.history.snapshots[0].set(Position::TopLeft, Square::Occupied(Player::O));
        game.step = 5;

        let violations = TimelineInvariants::check_all(&game).unwrap_err();
        assert!(violations.len() >= 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameState::new();

        type TwoInvariants = (EmptyRootInvariant, TurnParityInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
