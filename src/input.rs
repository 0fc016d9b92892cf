//! Parsing of typed player commands.

use derive_more::{Display, Error};
use tictac_core::Coord;
use tracing::instrument;

/// What a human typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark.
    Place(Coord),
    /// Leave the session.
    Quit,
}

/// Typed line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Not two numbers separated by a space or comma.
    #[display("bad input: expected \"row col\" with values 0-{}", max)]
    Malformed {
        /// Largest accepted row or column.
        max: usize,
    },
}

/// Parses `row col`, `row,col`, `exit` or `quit` for a `size`x`size` board.
#[instrument]
pub fn parse_command(text: &str, size: usize) -> Result<Command, InputError> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("exit") || text.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    let malformed = InputError::Malformed { max: size - 1 };
    let parts: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    let [row, col] = parts.as_slice() else {
        return Err(malformed);
    };
    let row: usize = row.parse().map_err(|_| malformed.clone())?;
    let col: usize = col.parse().map_err(|_| malformed.clone())?;
    if row >= size || col >= size {
        return Err(malformed);
    }

    Ok(Command::Place(Coord::new(row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_and_comma_forms() {
        assert_eq!(parse_command("1 2", 3), Ok(Command::Place(Coord::new(1, 2))));
        assert_eq!(parse_command("0,0", 3), Ok(Command::Place(Coord::new(0, 0))));
        assert_eq!(parse_command(" 2 , 1 ", 3), Ok(Command::Place(Coord::new(2, 1))));
    }

    #[test]
    fn test_quit_words() {
        assert_eq!(parse_command("exit", 3), Ok(Command::Quit));
        assert_eq!(parse_command("QUIT", 3), Ok(Command::Quit));
    }

    #[test]
    fn test_rejects_bad_lines() {
        for text in ["", "1", "1 2 3", "a b", "3 0", "-1 0", "0 9"] {
            assert_eq!(
                parse_command(text, 3),
                Err(InputError::Malformed { max: 2 }),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_error_message() {
        let err = parse_command("nope", 3).unwrap_err();
        assert_eq!(err.to_string(), "bad input: expected \"row col\" with values 0-2");
    }
}
