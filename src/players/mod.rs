//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::games::tictactoe::Board;
use anyhow::Result;

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Returns the square index (0-8), or `None` when the player has no move
    /// to offer. Returned indices are empty squares of `board`.
    fn choose_move(&mut self, board: &Board) -> Result<Option<usize>>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
