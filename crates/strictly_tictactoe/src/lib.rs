//! Pure tic-tac-toe game logic with undo/redo history.
//!
//! # Architecture
//!
//! - **GameState**: owns every snapshot of the game and a cursor into them
//! - **Rules**: stateless win/draw detection on a single board
//! - **Intents**: the requests a front end forwards into the game
//! - **Invariants**: properties checked after every transition
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameState, Outcome, Player, Position};
//!
//! let mut game = GameState::new();
//! for pos in [
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::BottomCenter,
//!     Position::TopRight,
//! ] {
//!     game.apply_move(pos);
//! }
//! assert_eq!(game.outcome(), Outcome::Win(Player::X));
//!
//! game.undo();
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
mod intent;
mod outcome;
mod position;
mod transcript;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{IgnoreReason, Move, Transition};
pub use game::GameState;
pub use history::History;
pub use intent::{Intent, dispatch};
pub use outcome::Outcome;
pub use position::{Position, PositionError};
pub use transcript::Transcript;
pub use types::{Board, Player, Snapshot, Square};
