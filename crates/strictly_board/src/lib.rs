//! Strictly Board - square grid board-state tracker
//!
//! Holds the squares of a tic-tac-toe style board, validates coordinates,
//! places markers that never change once set, and reports whether the board
//! is won or tied.
//!
//! # Architecture
//!
//! - **Board**: the grid and its mutation/query operations
//! - **Rules**: pure win and tie evaluation over a board
//! - **Invariants**: properties checked after every mutation in debug builds
//!
//! Turn order, players, rendering, and stopping play after a terminal state
//! belong to the caller.
//!
//! # Example
//!
//! ```
//! use strictly_board::{Board, Marker};
//!
//! # fn example() -> Result<(), strictly_board::BoardError> {
//! let mut board = Board::standard();
//! board.place(0, 0, Marker::X)?;
//! board.place(0, 1, Marker::X)?;
//! board.place(0, 2, Marker::X)?;
//! assert_eq!(board.is_won(), Some(Marker::X));
//! assert!(!board.is_tied());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod line;
mod marker;
mod position;

pub mod invariants;
pub mod rules;

pub use board::{Board, BoardSnapshot};
pub use error::BoardError;
pub use line::{Line, LineKind};
pub use marker::{Marker, Square};
pub use position::Position;
pub use rules::BoardStatus;
