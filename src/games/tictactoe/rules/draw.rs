//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// Full board and no completed line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && super::win::line_winner(board).is_none()
}
