//! Tictac - terminal tic-tac-toe
//!
//! Play against a friend or a rule-based CPU opponent.
//!
//! # Architecture
//!
//! - **Core**: board, winning lines and move selection live in `tictac_core`
//! - **Players**: human (typed coordinates) and CPU seats behind [`Player`]
//! - **Session**: turn loop, result messages and the win/draw tally
//! - **Config**: TOML settings overridden by command-line flags
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictac::{Console, CpuSeats, Session, seat_players};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut console = Console::new(Cursor::new(""), Vec::new());
//! let mut session = Session::new(seat_players(CpuSeats::Both, Some(7)), Some(1))?;
//! let tally = session.run(&mut console)?;
//! assert_eq!(tally.games(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod input;
mod players;
mod session;
mod terminal;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, CpuSeats, GameConfig};

// Crate-level exports - Input parsing
pub use input::{Command, InputError, parse_command};

// Crate-level exports - Players
pub use players::{CpuPlayer, HumanPlayer, Player, Seat, Turn};

// Crate-level exports - Session management
pub use session::{BOARD_SIZE, GameOutcome, Session, Tally, seat_players};

// Crate-level exports - Terminal I/O
pub use terminal::{Console, Terminal};

// Crate-level exports - Game types
pub use tictac_core::{Board, Coord, Mark, MoveSelector, PlaceError, Tactic};
