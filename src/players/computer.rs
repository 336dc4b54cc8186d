//! Computer player driven by a search strategy.

use super::Player;
use crate::games::tictactoe::Board;
use crate::search::Strategy;
use anyhow::Result;
use tracing::{debug, instrument};

/// Computer player; always plays O.
pub struct ComputerPlayer {
    name: String,
    strategy: Box<dyn Strategy>,
}

impl ComputerPlayer {
    /// Creates a computer player using `strategy`.
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }

    /// Name of the search strategy in use.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip(self, board), fields(player = %self.name, strategy = self.strategy.name()))]
    fn choose_move(&mut self, board: &Board) -> Result<Option<usize>> {
        // Search works on its own copy; the game board is never touched.
        let mut scratch = board.clone();
        let choice = self.strategy.best_move(&mut scratch);
        debug!(?choice, "Computer chose position");
        Ok(choice)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
