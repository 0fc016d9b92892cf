//! Square game board with precomputed winning lines.

use crate::error::{BoardError, PlaceError};
use crate::lines::{Line, winning_lines};
use crate::missing::MissingCounts;
use crate::types::{Cell, Coord, Mark};
use tracing::{debug, instrument};

/// An N×N board.
///
/// Cells are stored in row-major order. The winning lines are computed once
/// in [`Board::new`] and never change; [`Board::reset`] keeps them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    lines: Vec<Line>,
    turn: usize,
}

impl Board {
    /// Creates an empty `size`x`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is zero.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < 1 {
            return Err(BoardError::InvalidSize { size });
        }

        let lines = winning_lines(size);
        debug!(size, lines = lines.len(), "Created board");
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
            lines,
            turn: 0,
        })
    }

    /// Returns the side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of successful placements so far.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Returns the mark whose turn it is (X on even turns).
    pub fn side_to_move(&self) -> Mark {
        if self.turn % 2 == 0 { Mark::X } else { Mark::O }
    }

    /// Returns the winning lines.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Gets the cell at `coord`, or `None` if it is off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Checks if `coord` is on the board and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Places `mark` at `coord` and advances the turn counter.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::OutOfBounds`] if either axis is outside
    /// `[0, size)` and [`PlaceError::CellOccupied`] if the cell is taken.
    /// The board is untouched on error.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn place(&mut self, coord: Coord, mark: Mark) -> Result<(), PlaceError> {
        let idx = self.index(coord).ok_or(PlaceError::OutOfBounds {
            coord,
            size: self.size,
        })?;

        if !self.cells[idx].is_empty() {
            debug!(%coord, "Cell occupied");
            return Err(PlaceError::CellOccupied { coord });
        }

        self.cells[idx] = Cell::Marked(mark);
        self.turn += 1;
        Ok(())
    }

    /// Checks if at least one line is held entirely by `mark`.
    #[instrument(skip(self))]
    pub fn is_line_complete(&self, mark: Mark) -> bool {
        let target = Cell::Marked(mark);
        self.lines
            .iter()
            .any(|line| line.coords().iter().all(|&c| self.cell(c) == target))
    }

    /// Groups the lines still winnable by `mark` by how many cells they lack.
    ///
    /// Lines where the opponent holds any cell are left out entirely.
    #[instrument(skip(self))]
    pub fn counts_by_missing(&self, mark: Mark) -> MissingCounts {
        let blocker = Cell::Marked(mark.opponent());
        let mut counts = MissingCounts::new(self.size);

        for line in &self.lines {
            if line.coords().iter().any(|&c| self.cell(c) == blocker) {
                continue;
            }
            let empties: Vec<Coord> = line
                .coords()
                .iter()
                .copied()
                .filter(|&c| self.cell(c).is_empty())
                .collect();
            counts.push(empties.len(), empties);
        }

        counts
    }

    /// Returns every empty coordinate in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| Coord::new(idx / self.size, idx % self.size))
            .collect()
    }

    /// Returns the corner coordinates, without duplicates on a 1x1 board.
    pub fn corners(&self) -> Vec<Coord> {
        let last = self.size - 1;
        let mut corners = vec![
            Coord::new(0, 0),
            Coord::new(0, last),
            Coord::new(last, 0),
            Coord::new(last, last),
        ];
        corners.dedup();
        corners
    }

    /// Returns the center coordinate for odd sizes.
    pub fn center(&self) -> Option<Coord> {
        (self.size % 2 == 1).then(|| Coord::new(self.size / 2, self.size / 2))
    }

    /// Clears every cell and the turn counter.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.turn = 0;
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.size && coord.col < self.size).then(|| coord.row * self.size + coord.col)
    }

    fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.row * self.size + coord.col]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size) {
            for cell in row {
                write!(f, "[{}]", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
