//! Serializable record of a game.

use super::action::Move;
use super::outcome::Outcome;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Every recorded move plus where the cursor stood.
///
/// Moves past `step` are the redoable future at the time of writing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// Recorded moves in order.
    pub moves: Vec<Move>,
    /// Step shown when the transcript was taken.
    pub step: usize,
    /// Outcome of the shown step.
    pub outcome: Outcome,
}

impl Transcript {
    /// Creates a new transcript.
    pub fn new(moves: Vec<Move>, step: usize, outcome: Outcome) -> Self {
        Self {
            moves,
            step,
            outcome,
        }
    }

    /// Renders the transcript as pretty-printed JSON.
    #[instrument(skip(self), fields(moves = self.moves.len()))]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
