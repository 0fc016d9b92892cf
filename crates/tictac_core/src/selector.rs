//! Rule-based move selection for the CPU player.
//!
//! The selector walks a fixed priority list of tactics and returns the
//! first one that applies. It only reads the board; the caller places the
//! chosen mark.

use crate::board::Board;
use crate::types::{Coord, Mark};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, instrument};

/// A rule in the CPU's priority list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Tactic {
    /// Very first move: a random corner or the center.
    Opening,
    /// Reply to the opponent's opening.
    Response,
    /// Complete one of our own lines.
    Win,
    /// Fill the gap in an opponent line that is one mark from winning.
    Block,
    /// Add to a line we have started.
    Build,
    /// Start on a line nobody has touched.
    Lane,
    /// Any empty cell.
    Random,
}

/// A chosen move and the tactic that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Selection {
    /// Where to play.
    pub coord: Coord,
    /// Why.
    pub tactic: Tactic,
}

/// Picks moves for an automated player from an injected random source.
#[derive(Debug, Clone)]
pub struct MoveSelector<R = StdRng> {
    rng: R,
}

impl MoveSelector<StdRng> {
    /// Creates a selector seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Creates a reproducible selector.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MoveSelector<R> {
    /// Creates a selector drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Chooses a move for `me` against `opponent`.
    ///
    /// Returns `None` only when the board is full. The returned coordinate
    /// always refers to an empty cell.
    #[instrument(skip(self, board), fields(turn = board.turn()))]
    pub fn select_move(&mut self, board: &Board, me: Mark, opponent: Mark) -> Option<Selection> {
        let selection = self
            .early_game(board, opponent)
            .or_else(|| Self::completing(board, me, Tactic::Win))
            .or_else(|| Self::completing(board, opponent, Tactic::Block))
            .or_else(|| self.building(board, me))
            .or_else(|| Self::lane(board, me))
            .or_else(|| self.fallback(board))?;

        info!(tactic = %selection.tactic, coord = %selection.coord, mark = %me, "Cpu tactic");
        Some(selection)
    }

    fn early_game(&mut self, board: &Board, opponent: Mark) -> Option<Selection> {
        match (board.turn(), board.center()) {
            (0, Some(center)) => self.opening(board, center),
            (0, None) | (1, _) => Self::response(board, opponent),
            _ => None,
        }
    }

    /// Random pick among the corners and the center.
    fn opening(&mut self, board: &Board, center: Coord) -> Option<Selection> {
        let mut candidates = board.corners();
        if !candidates.contains(&center) {
            candidates.push(center);
        }
        candidates.retain(|&c| board.is_empty(c));
        self.pick(&candidates)
            .map(|coord| Selection::new(coord, Tactic::Opening))
    }

    fn response(board: &Board, opponent: Mark) -> Option<Selection> {
        let corners = board.corners();

        if corners.iter().all(|&c| board.is_empty(c)) {
            let origin = Coord::new(0, 0);
            let last = board.size() - 1;
            let beside_origin = [Coord::new(0, 1), Coord::new(1, 0)]
                .into_iter()
                .any(|c| board.get(c).and_then(|cell| cell.mark()) == Some(opponent));
            let coord = if beside_origin {
                origin
            } else {
                Coord::new(last, last)
            };
            return Some(Selection::new(coord, Tactic::Response));
        }

        board
            .center()
            .filter(|&c| board.is_empty(c))
            .map(|coord| Selection::new(coord, Tactic::Response))
    }

    /// First gap of the first line `mark` is one short of completing.
    fn completing(board: &Board, mark: Mark, tactic: Tactic) -> Option<Selection> {
        board
            .counts_by_missing(mark)
            .bucket(1)
            .first()
            .and_then(|empties| empties.first())
            .map(|&coord| Selection::new(coord, tactic))
    }

    fn building(&mut self, board: &Board, me: Mark) -> Option<Selection> {
        let counts = board.counts_by_missing(me);
        let lines = (2..board.size())
            .map(|missing| counts.bucket(missing))
            .find(|lines| !lines.is_empty())?;
        let line = self.pick(lines)?;
        self.pick(&line)
            .map(|coord| Selection::new(coord, Tactic::Build))
    }

    fn lane(board: &Board, me: Mark) -> Option<Selection> {
        board
            .counts_by_missing(me)
            .bucket(board.size())
            .first()
            .and_then(|empties| empties.first())
            .map(|&coord| Selection::new(coord, Tactic::Lane))
    }

    fn fallback(&mut self, board: &Board) -> Option<Selection> {
        self.pick(&board.empty_cells())
            .map(|coord| Selection::new(coord, Tactic::Random))
    }

    /// Uniform choice; singletons are returned without touching the rng.
    fn pick<T: Clone>(&mut self, items: &[T]) -> Option<T> {
        match items {
            [] => None,
            [only] => Some(only.clone()),
            _ => Some(items[self.rng.random_range(0..items.len())].clone()),
        }
    }
}
