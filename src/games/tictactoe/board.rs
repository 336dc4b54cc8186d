//! The 3x3 board.

use super::rules;
use super::types::{Cell, GameStatus, Side};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of squares on the board.
pub const CELLS: usize = 9;

/// 3x3 tic-tac-toe board, squares in row-major order (0-8).
///
/// The board stores only the squares. Game status is always derived from
/// them, so there is no cached winner to fall out of sync with the cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit cell contents.
    pub fn from_cells(cells: [Cell; CELLS]) -> Self {
        Self { cells }
    }

    /// Returns all squares.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Gets the square at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Indices of all empty squares, ascending.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of marked squares.
    pub fn moves_made(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Marks `index` for `side`.
    ///
    /// No occupancy check: an occupied square is overwritten. Callers pick
    /// indices from [`Board::available_moves`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..9`.
    pub fn make_move(&mut self, index: usize, side: Side) {
        self.cells[index] = Cell::Mark(side);
    }

    /// Clears `index` back to empty, undoing a speculative move.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..9`.
    pub fn undo_move(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    /// Whether the game is over from `side`'s point of view.
    ///
    /// True when `side` has completed a line or the board is full. This is
    /// side-specific: a full board where only the other side has a line
    /// still reports true here. Use [`Board::status`] to learn which
    /// terminal state was reached.
    pub fn check_winner(&self, side: Side) -> bool {
        rules::has_line(self, side) || rules::is_full(self)
    }

    /// Derives the game status from the squares.
    pub fn status(&self) -> GameStatus {
        if let Some(side) = rules::line_winner(self) {
            GameStatus::Won(side)
        } else if rules::is_full(self) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

impl fmt::Display for Board {
    /// One row per line: `| X | O |   |`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(3) {
            let symbols: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "| {} |", symbols.join(" | "))?;
        }
        Ok(())
    }
}

/// Errors parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// Input did not have exactly nine squares.
    #[display("expected {} squares, found {}", CELLS, found)]
    WrongLength {
        /// Number of characters in the input.
        found: usize,
    },
    /// A square was not `X`, `O` or an empty marker.
    #[display("invalid square {:?} at index {}", symbol, index)]
    InvalidSquare {
        /// Offending character.
        symbol: char,
        /// Square index.
        index: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine squares in row-major order. `X`/`O` (any case) mark a
    /// side; `.`, `_`, `-` or a space mean empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != CELLS {
            return Err(ParseBoardError::WrongLength {
                found: symbols.len(),
            });
        }

        let mut cells = [Cell::Empty; CELLS];
        for (index, symbol) in symbols.into_iter().enumerate() {
            cells[index] = match symbol {
                'X' | 'x' => Cell::Mark(Side::X),
                'O' | 'o' => Cell::Mark(Side::O),
                '.' | '_' | '-' | ' ' => Cell::Empty,
                _ => return Err(ParseBoardError::InvalidSquare { symbol, index }),
            };
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.moves_made(), 0);
        assert_eq!(board.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_make_move_overwrites_without_check() {
        let mut board = Board::new();
        board.make_move(4, Side::X);
        board.make_move(4, Side::O);
        assert_eq!(board.get(4), Some(Cell::Mark(Side::O)));
    }

    #[test]
    fn test_undo_move_clears() {
        let mut board = Board::new();
        board.make_move(7, Side::O);
        board.undo_move(7);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty(9));
    }

    #[test]
    fn test_display_renders_spaces_for_empty() {
        let board = Board::from_str("XO.......").unwrap();
        assert_eq!(board.to_string(), "| X | O |   |\n|   |   |   |\n|   |   |   |\n");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            Board::from_str("XO"),
            Err(ParseBoardError::WrongLength { found: 2 })
        );
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        assert_eq!(
            Board::from_str("XO?......"),
            Err(ParseBoardError::InvalidSquare { symbol: '?', index: 2 })
        );
    }
}
