//! Terminal-state rules.
//!
//! Pure functions over a [`Board`](crate::Board). They never mutate the
//! board and never stop further placement; halting play once a game is over
//! is the caller's job.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tied};
pub use win::{check_winner, find_winning_line, line_owner};

use crate::{Board, Marker};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Where a board stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "state", content = "winner", rename_all = "snake_case")]
pub enum BoardStatus {
    /// No winner and at least one empty square.
    #[display("in progress")]
    InProgress,
    /// A line is filled by a single marker.
    #[display("won by {_0}")]
    Won(Marker),
    /// Every square is filled and nobody won.
    #[display("tied")]
    Tied,
}

impl BoardStatus {
    /// Checks if the status is won or tied.
    pub fn is_terminal(self) -> bool {
        !matches!(self, BoardStatus::InProgress)
    }
}

/// Evaluates the board. A win takes precedence over a full board.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate(board: &Board) -> BoardStatus {
    if let Some(winner) = check_winner(board) {
        BoardStatus::Won(winner)
    } else if is_full(board) {
        BoardStatus::Tied
    } else {
        BoardStatus::InProgress
    }
}
