//! Player trait and implementations.

mod cpu;
mod human;

pub use cpu::CpuPlayer;
pub use human::HumanPlayer;

use crate::terminal::Terminal;
use anyhow::Result;
use tictac_core::{Board, Coord, Mark};

/// A player slot: its number, its mark, and whether the CPU drives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Seat {
    /// 1 or 2.
    pub id: u8,
    /// Mark owned for the whole session.
    pub mark: Mark,
    /// Driven by the move selector.
    pub cpu: bool,
}

impl Seat {
    /// Returns the display name, e.g. `Player 2 (cpu)`.
    pub fn name(&self) -> String {
        if self.cpu {
            format!("Player {} (cpu)", self.id)
        } else {
            format!("Player {}", self.id)
        }
    }
}

/// What a player decided to do on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Play at a coordinate.
    Place(Coord),
    /// Leave the session.
    Quit,
}

/// Trait for players that can make moves.
pub trait Player {
    /// Gets the next move from this player.
    ///
    /// The returned coordinate is not guaranteed playable; the session
    /// re-asks when [`Board::place`] rejects it.
    fn get_move(&mut self, board: &Board, terminal: &mut dyn Terminal) -> Result<Turn>;

    /// Returns the seat this player occupies.
    fn seat(&self) -> Seat;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_names() {
        assert_eq!(Seat::new(1, Mark::X, false).name(), "Player 1");
        assert_eq!(Seat::new(2, Mark::O, true).name(), "Player 2 (cpu)");
    }
}
