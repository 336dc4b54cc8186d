//! Turn loop: alternates the two players until the game ends.

use crate::games::tictactoe::{Board, GameStatus, Side};
use crate::players::Player;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{info, instrument, warn};

/// Runs one game between X and O, printing to `output`.
pub struct Orchestrator<W> {
    board: Board,
    x_player: Box<dyn Player>,
    o_player: Box<dyn Player>,
    first: Side,
    output: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a game on an empty board with X to move first.
    pub fn new(x_player: Box<dyn Player>, o_player: Box<dyn Player>, output: W) -> Self {
        Self {
            board: Board::new(),
            x_player,
            o_player,
            first: Side::X,
            output,
        }
    }

    /// Sets which side opens the game.
    pub fn with_first(mut self, first: Side) -> Self {
        self.first = first;
        self
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the orchestrator, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays until one side completes a line or the board fills.
    ///
    /// After every move the board is printed and the mover's terminal check
    /// runs. Returns the final status.
    #[instrument(skip(self), fields(first = %self.first))]
    pub fn run(&mut self) -> Result<GameStatus> {
        info!("Game started");
        write!(self.output, "{}", self.board)?;

        let mut side = self.first;
        loop {
            let player = match side {
                Side::X => &mut self.x_player,
                Side::O => &mut self.o_player,
            };

            let Some(index) = player
                .choose_move(&self.board)
                .with_context(|| format!("{} failed to choose a move", player.name()))?
            else {
                warn!(%side, "No move available");
                return Ok(self.board.status());
            };

            self.board.make_move(index, side);
            info!(%side, index, "Move played");
            if side == Side::O {
                writeln!(self.output, "{} plays {}", player.name(), index)?;
            }
            write!(self.output, "{}", self.board)?;

            if self.board.check_winner(side) {
                let status = self.board.status();
                self.announce(status)?;
                info!(%status, "Game over");
                return Ok(status);
            }

            side = side.opponent();
        }
    }

    fn announce(&mut self, status: GameStatus) -> Result<()> {
        match status {
            GameStatus::Won(Side::X) => writeln!(self.output, "{} wins!", self.x_player.name())?,
            GameStatus::Won(Side::O) => writeln!(self.output, "{} wins!", self.o_player.name())?,
            GameStatus::Draw => writeln!(self.output, "It's a draw!")?,
            GameStatus::InProgress => {}
        }
        Ok(())
    }
}
