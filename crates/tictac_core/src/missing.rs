//! Lines grouped by how many more marks they need.

use crate::types::Coord;

/// Result of [`Board::counts_by_missing`](crate::Board::counts_by_missing).
///
/// Bucket `k` lists, for every line the opponent has not touched and that
/// has exactly `k` empty cells, the empty coordinates of that line. Buckets
/// run from `0` (already complete) to `size` (untouched).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCounts {
    buckets: Vec<Vec<Vec<Coord>>>,
}

impl MissingCounts {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); size + 1],
        }
    }

    pub(crate) fn push(&mut self, missing: usize, empties: Vec<Coord>) {
        self.buckets[missing].push(empties);
    }

    /// Returns the lines needing exactly `missing` marks.
    ///
    /// Out-of-range counts yield an empty slice.
    pub fn bucket(&self, missing: usize) -> &[Vec<Coord>] {
        self.buckets.get(missing).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the number of lines needing exactly `missing` marks.
    pub fn count(&self, missing: usize) -> usize {
        self.bucket(missing).len()
    }

    /// Returns the highest bucket index (the board size).
    pub fn max_missing(&self) -> usize {
        self.buckets.len() - 1
    }

    /// Iterates non-empty buckets as `(missing, lines)`, lowest first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Vec<Coord>])> {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, lines)| !lines.is_empty())
            .map(|(missing, lines)| (missing, lines.as_slice()))
    }
}
