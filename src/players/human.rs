//! Human player reading moves as text lines.

use super::Player;
use crate::games::tictactoe::{Board, Position};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Human player typing moves on a line-oriented input.
///
/// Each turn prompts on `output` and reads lines from `input` until one
/// names an empty square. Rejected lines leave the board untouched.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Consumes the player, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board) -> Result<Option<usize>> {
        loop {
            write!(self.output, "{}'s move (0-8): ", self.name)?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed before {} moved", self.name);
            }

            match Position::from_label_or_number(&line).map(Position::to_index) {
                Some(index) if board.is_empty(index) => {
                    debug!(index, "Human chose position");
                    return Ok(Some(index));
                }
                _ => {
                    debug!(input = %line.trim(), "Rejected move");
                    writeln!(self.output, "Invalid move! Try again.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
