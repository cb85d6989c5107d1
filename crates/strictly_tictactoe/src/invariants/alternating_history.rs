//! Alternating history invariant: each snapshot adds one mark, X first.

use super::super::{GameState, Player, Square, rules};
use super::Invariant;

/// Invariant: snapshot `i` differs from snapshot `i - 1` by exactly one
/// newly filled square, holding X when `i` is odd and O when even, and no
/// snapshot follows a won board.
pub struct AlternatingHistoryInvariant;

impl Invariant<GameState> for AlternatingHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let [before, after] = pair else {
                    return false;
                };
                let expected = if i % 2 == 0 { Player::X } else { Player::O };
                let changed = before.diff(after);

                rules::check_winner(before).is_none()
                    && changed.len() == 1
                    && before.get(changed[0]) == Square::Empty
                    && after.get(changed[0]) == Square::Occupied(expected)
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark, alternating X and O"
    }
}
