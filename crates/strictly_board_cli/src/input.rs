//! Parsing of typed moves and board literals.

use strictly_board::{Board, BoardError, Marker};
use tracing::instrument;

/// A line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's marker.
    Place {
        /// Row index as typed.
        row: isize,
        /// Column index as typed.
        col: isize,
    },
    /// Start over on an empty board.
    Reset,
    /// Leave the game.
    Quit,
}

/// Error parsing user input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Empty input")]
    Empty,

    /// The text is not a known command or coordinate pair.
    #[display("Expected \"row col\", \"reset\" or \"quit\", got {:?}", _0)]
    Unrecognized(String),

    /// A board literal could not be turned into a board.
    #[display("Invalid board: {}", _0)]
    #[from]
    Board(BoardError),
}

impl std::error::Error for InputError {}

/// Parses one line of interactive input.
///
/// Coordinates are two integers separated by whitespace and/or a comma,
/// e.g. `1 2` or `1,2`. Negative numbers parse so the board can reject them.
#[instrument]
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    match trimmed.to_lowercase().as_str() {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "r" | "reset" => return Ok(Command::Reset),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [row, col] => match (row.parse(), col.parse()) {
            (Ok(row), Ok(col)) => Ok(Command::Place { row, col }),
            _ => Err(InputError::Unrecognized(trimmed.to_string())),
        },
        _ => Err(InputError::Unrecognized(trimmed.to_string())),
    }
}

/// Parses a board literal such as `XOX/OXX/O.O`.
///
/// Rows are separated by `/`; `.` and `_` mark empty squares and any other
/// character is a marker. The row count sets the board size.
#[instrument]
pub fn parse_board(literal: &str) -> Result<Board, InputError> {
    let rows = literal
        .trim()
        .split('/')
        .map(|row| {
            row.trim()
                .chars()
                .map(|ch| match ch {
                    '.' | '_' => Ok(None),
                    other => Marker::new(other).map(Some),
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Board::from_rows(rows)?)
}
