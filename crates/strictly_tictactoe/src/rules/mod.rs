//! Game rules for tic-tac-toe.
//!
//! Pure functions classifying a single board. Nothing here looks at
//! history or whose turn it is.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, winning_line};
