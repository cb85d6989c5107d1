//! Versioned list of board snapshots.

use super::action::Move;
use super::types::{Board, Snapshot};
use tracing::{debug, instrument};

/// Ordered snapshots, one per point in the game.
///
/// The first snapshot is always the empty board and the list is never
/// empty. The only mutation is [`History::branch`], which drops everything
/// after a step and appends a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    pub(crate) snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Number of snapshots, including the initial empty board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true for a history built through this API.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the most recent snapshot.
    pub fn latest_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Snapshot at `step`, if recorded.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// All snapshots in order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Discards snapshots after `step`, appends `next`, and returns its step.
    #[instrument(skip(self, next), fields(len = self.snapshots.len()))]
    pub fn branch(&mut self, step: usize, next: Snapshot) -> usize {
        let keep = (step + 1).min(self.snapshots.len());
        let dropped = self.snapshots.len() - keep;
        if dropped > 0 {
            debug!(dropped, "Discarding redoable future");
        }
        self.snapshots.truncate(keep);
        self.snapshots.push(next);
        self.latest_step()
    }

    /// The placements that produced each snapshot after the first.
    ///
    /// Entry `i` is the move that turned snapshot `i` into snapshot `i + 1`.
    pub fn moves(&self) -> Vec<Move> {
        self.snapshots
            .windows(2)
            .filter_map(|pair| {
                let pos = pair[0].diff(&pair[1]).into_iter().next()?;
                let player = pair[1].get(pos).player()?;
                Some(Move::new(player, pos))
            })
            .collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    fn place(board: &Board, pos: Position, player: Player) -> Board {
        let mut next = *board;
        next.set(pos, Square::Occupied(player));
        next
    }

    #[test]
    fn test_starts_with_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0), Some(&Board::new()));
        assert!(history.moves().is_empty());
    }

    #[test]
    fn test_branch_from_latest_appends() {
        let mut history = History::new();
        let first = place(&Board::new(), Position::Center, Player::X);
        assert_eq!(history.branch(0, first), 1);
        let second = place(&first, Position::TopLeft, Player::O);
        assert_eq!(history.branch(1, second), 2);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_branch_from_middle_drops_future() {
        let mut history = History::new();
        let a = place(&Board::new(), Position::TopLeft, Player::X);
        let b = place(&a, Position::TopCenter, Player::O);
        let c = place(&b, Position::TopRight, Player::X);
        history.branch(0, a);
        history.branch(1, b);
        history.branch(2, c);

        let d = place(&a, Position::Center, Player::O);
        assert_eq!(history.branch(1, d), 2);
        assert_eq!(history.len(), 3);
        assert_eq!(history.get(2), Some(&d));
        assert_eq!(
            history.moves(),
            vec![
                Move::new(Player::X, Position::TopLeft),
                Move::new(Player::O, Position::Center),
            ]
        );
    }
}
