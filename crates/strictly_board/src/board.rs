//! The square board and its operations.

use crate::invariants::{BoardInvariants, InvariantSet, MarkersMonotonic, TransitionInvariant};
use crate::rules::{self, BoardStatus};
use crate::{BoardError, Line, Marker, Position, Square};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// A `size x size` grid of squares, each empty or holding one marker.
///
/// Squares are stored row-major. Once a square is occupied only
/// [`reset`](Board::reset) clears it. Reaching a won or tied state does not
/// block further placement; stopping play is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BoardSnapshot", try_from = "BoardSnapshot")]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Dimension of a classic tic-tac-toe board.
    pub const STANDARD_SIZE: usize = 3;

    /// Largest supported dimension.
    pub const MAX_SIZE: usize = 256;

    /// Checks a dimension and returns the number of squares it needs.
    pub fn square_count(size: usize) -> Result<usize, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize(size));
        }
        if size > Self::MAX_SIZE {
            return Err(BoardError::TooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        size.checked_mul(size).ok_or(BoardError::TooLarge {
            size,
            max: Self::MAX_SIZE,
        })
    }

    /// Creates an empty `size x size` board.
    ///
    /// Fails with [`BoardError::InvalidSize`] for 0 and
    /// [`BoardError::TooLarge`] above [`MAX_SIZE`](Board::MAX_SIZE).
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let count = Self::square_count(size)?;
        let mut board = Self {
            size,
            squares: Vec::with_capacity(count),
        };
        board.reset();
        Ok(board)
    }

    /// Creates an empty 3x3 board.
    pub fn standard() -> Self {
        Self {
            size: Self::STANDARD_SIZE,
            squares: vec![Square::Empty; Self::STANDARD_SIZE * Self::STANDARD_SIZE],
        }
    }

    /// Builds a board from rows of optional markers.
    ///
    /// The number of rows sets the size; every row must have that many
    /// entries.
    #[instrument(skip(rows), fields(rows = rows.len()))]
    pub fn from_rows(rows: Vec<Vec<Option<Marker>>>) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut squares = Vec::with_capacity(Self::square_count(size)?);
        for row in rows {
            if row.len() != size {
                return Err(BoardError::DimensionMismatch {
                    expected: size,
                    found: row.len(),
                });
            }
            squares.extend(row.into_iter().map(Square::from));
        }
        Ok(Self { size, squares })
    }

    /// Clears every square.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.squares.clear();
        self.squares.resize(self.size * self.size, Square::Empty);
        debug_assert!(BoardInvariants::check_all(self).is_ok());
    }

    /// Returns the board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates the board one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size)
    }

    /// Validates a coordinate pair against the board.
    ///
    /// Fails with [`BoardError::OutOfBounds`] when either index lies outside
    /// `[0, size)`.
    pub fn position(&self, row: isize, col: isize) -> Result<Position, BoardError> {
        let in_range = |index: isize| usize::try_from(index).ok().filter(|&i| i < self.size);
        match (in_range(row), in_range(col)) {
            (Some(row), Some(col)) => Ok(Position::new(row, col)),
            _ => Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size,
            }),
        }
    }

    /// Returns the square at a validated position, or `None` if the position
    /// does not fit this board.
    pub fn square(&self, pos: Position) -> Option<Square> {
        if pos.row < self.size && pos.col < self.size {
            self.squares.get(pos.index(self.size)).copied()
        } else {
            None
        }
    }

    /// Checks if the square at `(row, col)` holds no marker.
    #[instrument(skip(self))]
    pub fn is_empty(&self, row: isize, col: isize) -> Result<bool, BoardError> {
        let pos = self.position(row, col)?;
        Ok(self.squares[pos.index(self.size)].is_empty())
    }

    /// Returns the marker at `(row, col)`, or `None` if the square is empty.
    #[instrument(skip(self))]
    pub fn get(&self, row: isize, col: isize) -> Result<Option<Marker>, BoardError> {
        let pos = self.position(row, col)?;
        Ok(self.squares[pos.index(self.size)].marker())
    }

    /// Places `marker` at `(row, col)` if the square is empty.
    ///
    /// Placing on an occupied square is a silent no-op: the original marker
    /// stays and `Ok(())` is returned. Use [`try_place`](Board::try_place)
    /// to be told about it instead.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: isize, col: isize, marker: Marker) -> Result<(), BoardError> {
        match self.try_place(row, col, marker) {
            Err(BoardError::CellOccupied { existing, .. }) => {
                debug!(%existing, "Square already occupied, placement ignored");
                Ok(())
            }
            other => other,
        }
    }

    /// Places `marker` at `(row, col)`, failing with
    /// [`BoardError::CellOccupied`] if the square already holds a marker.
    #[instrument(skip(self))]
    pub fn try_place(&mut self, row: isize, col: isize, marker: Marker) -> Result<(), BoardError> {
        let pos = self.position(row, col)?;
        let index = pos.index(self.size);
        if let Square::Occupied(existing) = self.squares[index] {
            return Err(BoardError::CellOccupied {
                row: pos.row,
                col: pos.col,
                existing,
            });
        }

        let before = cfg!(debug_assertions).then(|| self.clone());
        self.squares[index] = Square::Occupied(marker);
        if let Some(before) = before {
            debug_assert!(
                MarkersMonotonic::holds(&before, self),
                "{}",
                MarkersMonotonic::description()
            );
        }

        debug!(%pos, %marker, "Marker placed");
        Ok(())
    }

    /// Returns the marker owning the first fully matched line (rows, then
    /// columns, then diagonals), or `None` if nobody has won.
    pub fn is_won(&self) -> Option<Marker> {
        rules::check_winner(self)
    }

    /// Returns the line that decides [`is_won`](Board::is_won), with its
    /// marker.
    pub fn winning_line(&self) -> Option<(Line, Marker)> {
        rules::find_winning_line(self)
    }

    /// Checks if the board is tied: nobody has won and no square is empty.
    pub fn is_tied(&self) -> bool {
        rules::is_tied(self)
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Summarizes the board as in progress, won, or tied.
    pub fn status(&self) -> BoardStatus {
        rules::evaluate(self)
    }

    /// Counts squares holding a marker.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Iterates every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Lists positions still open for placement.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions()
            .filter(|pos| self.square(*pos).is_some_and(Square::is_empty))
            .collect()
    }

    /// Iterates win lines in scan order.
    pub fn lines(&self) -> impl Iterator<Item = Line> + use<> {
        Line::all(self.size)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    /// Renders rows as `X|O|.` separated by `-+-+-` rules.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = vec!["-"; self.size].join("+");
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
                writeln!(f, "{rule}")?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|square| square.marker().map_or('.', Marker::as_char).to_string())
                .collect();
            write!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

/// Serialized form of a [`Board`]: its size and rows of optional markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Board dimension.
    pub size: usize,
    /// Rows top to bottom, `None` for empty squares.
    pub rows: Vec<Vec<Option<Marker>>>,
}

impl From<Board> for BoardSnapshot {
    fn from(board: Board) -> Self {
        let rows = board
            .rows()
            .map(|row| row.iter().map(|square| square.marker()).collect())
            .collect();
        Self {
            size: board.size,
            rows,
        }
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = BoardError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        if snapshot.rows.len() != snapshot.size {
            return Err(BoardError::DimensionMismatch {
                expected: snapshot.size,
                found: snapshot.rows.len(),
            });
        }
        Self::from_rows(snapshot.rows)
    }
}
