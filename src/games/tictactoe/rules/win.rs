//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Side};

/// The 8 winning lines as board indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks whether `side` has three in a row.
pub fn has_line(board: &Board, side: Side) -> bool {
    let cells = board.cells();
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| cells[i] == Cell::Mark(side)))
}

/// Returns the side owning a completed line, if any.
///
/// X is checked first; a legal game never has lines for both sides.
pub fn line_winner(board: &Board) -> Option<Side> {
    [Side::X, Side::O]
        .into_iter()
        .find(|&side| has_line(board, side))
}
