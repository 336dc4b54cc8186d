mod board;
mod position;
pub mod rules;
mod types;

pub use board::{Board, CELLS, ParseBoardError};
pub use position::Position;
pub use types::{Cell, GameStatus, Side};
