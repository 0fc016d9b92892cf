//! Winning lines: every row, column and both full diagonals.

use crate::types::Coord;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which part of the board a line runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineKind {
    /// Row `i`, left to right.
    #[display("row {}", _0)]
    Row(usize),
    /// Column `i`, top to bottom.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// A set of `size` coordinates that wins when uniformly held by one mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
    coords: Vec<Coord>,
}

impl Line {
    /// Returns where the line runs.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Returns the coordinates in line order.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Checks if the line passes through `coord`.
    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }
}

/// Builds the `2 * size + 2` winning lines of a `size`x`size` board.
///
/// Rows and columns are interleaved (row 0, column 0, row 1, ...) and the
/// two diagonals come last. Move selection picks "the first line" in several
/// tactics, so this order is part of the observable behavior.
#[instrument]
pub fn winning_lines(size: usize) -> Vec<Line> {
    let mut lines = Vec::with_capacity(2 * size + 2);

    for i in 0..size {
        lines.push(Line {
            kind: LineKind::Row(i),
            coords: (0..size).map(|col| Coord::new(i, col)).collect(),
        });
        lines.push(Line {
            kind: LineKind::Column(i),
            coords: (0..size).map(|row| Coord::new(row, i)).collect(),
        });
    }

    lines.push(Line {
        kind: LineKind::MainDiagonal,
        coords: (0..size).map(|i| Coord::new(i, i)).collect(),
    });
    lines.push(Line {
        kind: LineKind::AntiDiagonal,
        coords: (0..size).map(|i| Coord::new(i, size - 1 - i)).collect(),
    });

    lines
}
