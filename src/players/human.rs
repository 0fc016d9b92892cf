//! Human player reading coordinates from the terminal.

use super::{Player, Seat, Turn};
use crate::input::{Command, parse_command};
use crate::terminal::Terminal;
use anyhow::Result;
use tictac_core::Board;
use tracing::debug;

/// Human player typing `row col` at a prompt.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    seat: Seat,
}

impl HumanPlayer {
    /// Creates a human player for `seat`.
    pub fn new(seat: Seat) -> Self {
        Self { seat }
    }
}

impl Player for HumanPlayer {
    fn get_move(&mut self, board: &Board, terminal: &mut dyn Terminal) -> Result<Turn> {
        let prompt = format!("{}> ", self.seat.name());
        loop {
            let Some(line) = terminal.read_line(&prompt)? else {
                debug!(player = %self.seat.name(), "Input closed");
                return Ok(Turn::Quit);
            };

            match parse_command(&line, board.size()) {
                Ok(Command::Place(coord)) => return Ok(Turn::Place(coord)),
                Ok(Command::Quit) => return Ok(Turn::Quit),
                Err(e) => {
                    debug!(input = %line, "Rejected input");
                    terminal.write_line(&e.to_string())?;
                }
            }
        }
    }

    fn seat(&self) -> Seat {
        self.seat
    }
}
