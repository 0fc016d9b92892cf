//! CPU player backed by the rule-based move selector.

use super::{Player, Seat, Turn};
use crate::terminal::Terminal;
use anyhow::Result;
use rand::Rng;
use tictac_core::{Board, MoveSelector};
use tracing::debug;

/// CPU player choosing moves with a [`MoveSelector`].
#[derive(Debug, Clone)]
pub struct CpuPlayer<R> {
    seat: Seat,
    selector: MoveSelector<R>,
}

impl<R: Rng> CpuPlayer<R> {
    /// Creates a CPU player for `seat` drawing randomness from `rng`.
    pub fn new(seat: Seat, rng: R) -> Self {
        Self {
            seat,
            selector: MoveSelector::new(rng),
        }
    }
}

impl<R: Rng> Player for CpuPlayer<R> {
    fn get_move(&mut self, board: &Board, terminal: &mut dyn Terminal) -> Result<Turn> {
        let mark = self.seat.mark;
        let Some(choice) = self.selector.select_move(board, mark, mark.opponent()) else {
            anyhow::bail!("No valid moves available");
        };

        debug!(player = %self.seat.name(), tactic = %choice.tactic, "CPU chose move");
        terminal.write_line(&format!(
            "{} picked {} {}",
            self.seat.name(),
            choice.coord.row,
            choice.coord.col
        ))?;
        Ok(Turn::Place(choice.coord))
    }

    fn seat(&self) -> Seat {
        self.seat
    }
}
