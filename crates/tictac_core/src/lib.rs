//! Pure tic-tac-toe game logic.
//!
//! - [`Board`]: an N×N grid with its winning lines computed once at creation
//! - [`Board::counts_by_missing`]: winnable lines grouped by how many marks
//!   they still need
//! - [`MoveSelector`]: a rule-based CPU opponent driven by those groups
//!
//! # Example
//!
//! ```
//! use tictac_core::{Board, Coord, Mark, MoveSelector};
//!
//! let mut board = Board::new(3)?;
//! board.place(Coord::new(1, 1), Mark::X)?;
//!
//! let mut cpu = MoveSelector::seeded(42);
//! let choice = cpu.select_move(&board, Mark::O, Mark::X).expect("board has room");
//! board.place(choice.coord, Mark::O)?;
//! assert!(!board.is_line_complete(Mark::O));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod lines;
mod missing;
mod selector;
mod types;

pub use board::Board;
pub use error::{BoardError, PlaceError};
pub use lines::{Line, LineKind, winning_lines};
pub use missing::MissingCounts;
pub use selector::{MoveSelector, Selection, Tactic};
pub use types::{Cell, Coord, Mark};
