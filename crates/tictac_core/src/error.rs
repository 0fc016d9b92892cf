//! Error types for board construction and placement.

use crate::types::Coord;
use derive_more::{Display, Error};

/// Error creating a board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Board size must be at least 1.
    #[display("Board size must be at least 1, got {}", size)]
    InvalidSize {
        /// Requested size.
        size: usize,
    },
}

/// Error placing a mark. The board is unchanged when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Row or column falls outside the board.
    #[display("Coordinate {} is outside the {}x{} board", coord, size, size)]
    OutOfBounds {
        /// Rejected coordinate.
        coord: Coord,
        /// Board size.
        size: usize,
    },

    /// Target cell already holds a mark.
    #[display("Cell {} is already taken", coord)]
    CellOccupied {
        /// Rejected coordinate.
        coord: Coord,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_error_display() {
        let err = PlaceError::CellOccupied {
            coord: Coord::new(1, 1),
        };
        assert_eq!(err.to_string(), "Cell 1,1 is already taken");

        let err = PlaceError::OutOfBounds {
            coord: Coord::new(3, 0),
            size: 3,
        };
        assert_eq!(err.to_string(), "Coordinate 3,0 is outside the 3x3 board");
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidSize { size: 0 };
        assert_eq!(err.to_string(), "Board size must be at least 1, got 0");
    }
}
