//! Game session: turn loop, results and the running tally.

use crate::config::{CpuSeats, GameConfig};
use crate::players::{CpuPlayer, HumanPlayer, Player, Seat, Turn};
use crate::terminal::Terminal;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tictac_core::{Board, Mark};
use tracing::{debug, info, instrument, warn};

/// Side length of the playable board.
pub const BOARD_SIZE: usize = 3;

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// A seat completed a line.
    Won(Seat),
    /// Board filled with no line.
    Draw,
    /// A seat left mid-game.
    Quit(Seat),
}

/// Wins and draws across the games of one session.
///
/// Abandoned games are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    wins: [u32; 2],
    draws: u32,
}

impl Tally {
    /// Records a finished game.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: &GameOutcome) {
        match outcome {
            GameOutcome::Won(seat) => self.wins[usize::from(seat.id - 1)] += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Quit(_) => {}
        }
    }

    /// Returns the number of games won by seat `id` (1 or 2).
    pub fn wins(&self, id: u8) -> u32 {
        self.wins[usize::from(id - 1)]
    }

    /// Returns the number of drawn games.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Returns the number of completed games.
    pub fn games(&self) -> u32 {
        self.wins.iter().sum::<u32>() + self.draws
    }

    /// Formats the tally for display.
    pub fn summary(&self) -> String {
        format!(
            "Score: Player 1 {}, Player 2 {}, draws {}",
            self.wins[0], self.wins[1], self.draws
        )
    }
}

/// Builds the two seats described by `cpu`, X first.
///
/// CPU seats draw from generators derived from one source, seeded with
/// `seed` when given.
#[instrument]
pub fn seat_players(cpu: CpuSeats, seed: Option<u64>) -> Vec<Box<dyn Player>> {
    let mut source = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    [(1, Mark::X), (2, Mark::O)]
        .into_iter()
        .map(|(id, mark)| -> Box<dyn Player> {
            let seat = Seat::new(id, mark, cpu.plays(id));
            if seat.cpu {
                Box::new(CpuPlayer::new(seat, StdRng::from_rng(&mut source)))
            } else {
                Box::new(HumanPlayer::new(seat))
            }
        })
        .collect()
}

/// A series of games between two seated players.
pub struct Session {
    board: Board,
    players: Vec<Box<dyn Player>>,
    tally: Tally,
    game_limit: Option<u32>,
}

impl Session {
    /// Creates a session on the standard board.
    ///
    /// `players[0]` moves on even turns, `players[1]` on odd turns.
    pub fn new(players: Vec<Box<dyn Player>>, game_limit: Option<u32>) -> Result<Self> {
        anyhow::ensure!(players.len() == 2, "A session needs exactly two players");
        Ok(Self {
            board: Board::new(BOARD_SIZE)?,
            players,
            tally: Tally::default(),
            game_limit,
        })
    }

    /// Creates a session from configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Self::new(seat_players(*config.cpu(), *config.seed()), *config.games())
    }

    /// Returns the tally so far.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Plays one game from an empty board.
    #[instrument(skip_all)]
    pub fn play_game(&mut self, terminal: &mut dyn Terminal) -> Result<GameOutcome> {
        self.board.reset();
        terminal.write_line(self.board.to_string().trim_end())?;

        loop {
            let player = &mut self.players[self.board.turn() % 2];
            let seat = player.seat();

            let coord = match player.get_move(&self.board, terminal)? {
                Turn::Place(coord) => coord,
                Turn::Quit => {
                    info!(player = %seat.name(), "Player quit");
                    terminal.write_line(&format!("{} is a quitter, cya", seat.name()))?;
                    return Ok(GameOutcome::Quit(seat));
                }
            };

            if let Err(e) = self.board.place(coord, seat.mark) {
                warn!(player = %seat.name(), error = %e, "Move rejected");
                terminal.write_line(&e.to_string())?;
                continue;
            }
            terminal.write_line(self.board.to_string().trim_end())?;

            if self.board.is_line_complete(seat.mark) {
                info!(winner = %seat.name(), turns = self.board.turn(), "Game won");
                terminal.write_line(&format!("Result: {} wins!", seat.name()))?;
                return Ok(GameOutcome::Won(seat));
            }
            if self.board.is_full() {
                info!("Game drawn");
                terminal.write_line("Result: cat's game")?;
                return Ok(GameOutcome::Draw);
            }
        }
    }

    /// Plays games until a player quits, the game limit is reached, or the
    /// user declines another round.
    #[instrument(skip_all)]
    pub fn run(&mut self, terminal: &mut dyn Terminal) -> Result<Tally> {
        loop {
            let outcome = self.play_game(terminal)?;
            self.tally.record(&outcome);
            terminal.write_line(&self.tally.summary())?;

            if matches!(outcome, GameOutcome::Quit(_)) {
                break;
            }
            if let Some(limit) = self.game_limit {
                if self.tally.games() >= limit {
                    debug!(limit, "Game limit reached");
                    break;
                }
                continue;
            }

            match terminal.read_line("Play again? [y/n] ")? {
                Some(answer) if is_yes(&answer) => continue,
                _ => break,
            }
        }

        Ok(self.tally)
    }
}

fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
