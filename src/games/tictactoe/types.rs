//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Side of the board.
///
/// X is the human and always minimizes in search; O is the computer and
/// always maximizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Side {
    /// The human side.
    X,
    /// The computer side.
    O,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// Character used when rendering or parsing a board.
    pub fn symbol(self) -> char {
        match self {
            Side::X => 'X',
            Side::O => 'O',
        }
    }
}

/// A single square of the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Square marked by a side.
    Mark(Side),
}

impl Cell {
    /// Character used when rendering the board; empty squares are a space.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Mark(side) => side.symbol(),
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        Cell::Mark(side)
    }
}

/// Current status of the game, derived from the board contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// No line completed and at least one empty square.
    #[display("in progress")]
    InProgress,
    /// A side completed a line.
    #[display("{_0} wins")]
    Won(Side),
    /// Board full with no completed line.
    #[display("draw")]
    Draw,
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
