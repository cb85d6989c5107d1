//! Game state with history-based time travel.

use super::action::{IgnoreReason, Move, Transition};
use super::history::History;
use super::invariants::{InvariantSet, TimelineInvariants};
use super::outcome::Outcome;
use super::rules::{self, Line};
use super::transcript::Transcript;
use super::{Player, Position, Snapshot, Square};
use tracing::{debug, instrument, warn};

/// Tic-tac-toe game owning its full move history.
///
/// `step` is a read cursor into the history. Undo and redo only move the
/// cursor; a new move made while the cursor is behind the latest snapshot
/// discards the snapshots after it.
///
/// Illegal requests (occupied square, finished game, undo at the start,
/// redo at the end) leave the game untouched and report
/// [`Transition::Ignored`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) step: usize,
    pub(crate) x_is_next: bool,
}

impl GameState {
    /// Creates a new game showing the empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step: 0,
            x_is_next: true,
        }
    }

    /// Places the active player's mark at `position`.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move()))]
    pub fn apply_move(&mut self, position: Position) -> Transition {
        let current = *self.current_snapshot();

        if rules::check_winner(&current).is_some() {
            return self.ignore(IgnoreReason::GameOver);
        }

        if !current.is_empty(position) {
            return self.ignore(IgnoreReason::SquareOccupied(position));
        }

        let player = self.to_move();
        let mut next = current;
        next.set(position, Square::Occupied(player));

        self.step = self.history.branch(self.step, next);
        self.x_is_next = !self.x_is_next;
        self.assert_invariants();

        debug!(step = self.step, outcome = %self.outcome(), "Move applied");
        Transition::Moved(Move::new(player, position))
    }

    /// Places the active player's mark at a raw board index (0-8).
    ///
    /// Indices outside the board are ignored like any other illegal move.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Transition {
        match Position::from_index(index) {
            Some(position) => self.apply_move(position),
            None => self.ignore(IgnoreReason::OutOfBounds(index)),
        }
    }

    /// Shows the snapshot at `step` without altering history.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Transition {
        if step >= self.history.len() {
            return self.ignore(IgnoreReason::NoSuchStep(step));
        }

        let from = self.step;
        self.step = step;
        self.x_is_next = step % 2 == 0;
        self.assert_invariants();

        debug!(to = step, "Jumped");
        Transition::Jumped { from, to: step }
    }

    /// Steps back one move. No-op at the initial board.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn undo(&mut self) -> Transition {
        if self.step == 0 {
            return self.ignore(IgnoreReason::AtStart);
        }
        self.jump_to(self.step - 1)
    }

    /// Steps forward one move. No-op at the latest snapshot.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn redo(&mut self) -> Transition {
        if self.step == self.history.latest_step() {
            return self.ignore(IgnoreReason::AtLatest);
        }
        self.jump_to(self.step + 1)
    }

    /// The snapshot currently shown.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history.snapshots[self.step]
    }

    /// Outcome of the snapshot currently shown.
    pub fn outcome(&self) -> Outcome {
        let board = self.current_snapshot();
        match rules::check_winner(board) {
            Some(player) => Outcome::Win(player),
            None if rules::is_full(board) => Outcome::Tie,
            None => Outcome::InProgress,
        }
    }

    /// The completed line on the current snapshot, if any.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(self.current_snapshot()).map(|(line, _)| line)
    }

    /// True when X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// The player who places the next mark.
    pub fn to_move(&self) -> Player {
        Player::from_x_is_next(self.x_is_next)
    }

    /// Index of the snapshot currently shown.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of recorded snapshots, including the empty board.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The recorded history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// True when undo would change the shown step.
    pub fn can_undo(&self) -> bool {
        self.step > 0
    }

    /// True when redo would change the shown step.
    pub fn can_redo(&self) -> bool {
        self.step < self.history.latest_step()
    }

    /// Every recorded move, including any redoable future.
    pub fn moves(&self) -> Vec<Move> {
        self.history.moves()
    }

    /// Empty squares of the current snapshot, or none once it is decided.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.outcome().is_over() {
            return Vec::new();
        }
        Position::valid_moves(self.current_snapshot())
    }

    /// Status text for the current snapshot.
    pub fn status_line(&self) -> String {
        match self.outcome() {
            Outcome::InProgress => format!("Next player: {}", self.to_move()),
            decided => decided.to_string(),
        }
    }

    /// Serializable record of the game so far.
    pub fn transcript(&self) -> Transcript {
        Transcript::new(self.moves(), self.step, self.outcome())
    }

    fn ignore(&self, reason: IgnoreReason) -> Transition {
        debug!(%reason, step = self.step, "Request ignored");
        Transition::Ignored(reason)
    }

    fn assert_invariants(&self) {
        if let Err(violations) = TimelineInvariants::check_all(self) {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Game invariants violated");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
