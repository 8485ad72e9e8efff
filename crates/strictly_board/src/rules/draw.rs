//! Tie detection.

use super::win::check_winner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the game is tied: no winner and no empty square left.
///
/// A full board with a winner is not a tie.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_tied(board: &Board) -> bool {
    check_winner(board).is_none() && is_full(board)
}
