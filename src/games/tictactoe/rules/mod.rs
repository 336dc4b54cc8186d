//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are separated from board
//! storage so the board and the search can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, has_line, line_winner};
