//! Turn sequencing over a board.

use crate::{AppConfig, Player};
use std::collections::HashSet;
use strictly_board::{Board, BoardError, BoardStatus, Line, Marker};
use tracing::{info, instrument, warn};

/// Result of a successful turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Game continues with `next` to move.
    Continue {
        /// Player whose turn it is now.
        next: Player,
    },
    /// The mover completed a line.
    Won {
        /// Winning player.
        winner: Player,
        /// Line that won.
        line: Line,
    },
    /// Board filled with no winner.
    Tied,
}

/// Error that can occur when playing a turn.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// The board already reports a win or tie.
    #[display("Game is already over ({})", _0)]
    GameOver(BoardStatus),

    /// The board rejected the placement.
    #[display("{}", _0)]
    #[from]
    Board(BoardError),

    /// Fewer than two players were supplied.
    #[display("A session needs at least two players, got {}", _0)]
    NotEnoughPlayers(usize),

    /// Two players were given the same marker.
    #[display("Marker {} is used by more than one player", _0)]
    DuplicateMarker(Marker),
}

impl std::error::Error for SessionError {}

/// A game between players taking turns on one board.
///
/// The board never refuses moves after a win, so the session does: once the
/// board is won or tied every further turn fails with
/// [`SessionError::GameOver`].
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    players: Vec<Player>,
    turn: usize,
}

impl GameSession {
    /// Creates a session on an empty board with players in turn order.
    ///
    /// Needs at least two players, each with a distinct marker.
    #[instrument(skip(players), fields(players = players.len()))]
    pub fn new(size: usize, players: Vec<Player>) -> Result<Self, SessionError> {
        if players.len() < 2 {
            return Err(SessionError::NotEnoughPlayers(players.len()));
        }
        let mut seen = HashSet::new();
        if let Some(player) = players.iter().find(|p| !seen.insert(*p.marker())) {
            return Err(SessionError::DuplicateMarker(*player.marker()));
        }
        let board = Board::new(size)?;
        info!(size, "Creating new game session");
        Ok(Self {
            board,
            players,
            turn: 0,
        })
    }

    /// Creates a session from validated configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, SessionError> {
        Self::new(*config.size(), config.players().clone())
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    /// Returns the board status.
    pub fn status(&self) -> BoardStatus {
        self.board.status()
    }

    /// Plays the current player's marker at `(row, col)`.
    ///
    /// Occupied squares are rejected rather than ignored, and the turn does
    /// not pass on any error.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn play(&mut self, row: isize, col: isize) -> Result<TurnOutcome, SessionError> {
        let status = self.board.status();
        if status.is_terminal() {
            warn!(%status, "Move attempted after game over");
            return Err(SessionError::GameOver(status));
        }

        let mover = self.current_player().clone();
        self.board.try_place(row, col, *mover.marker())?;

        if let Some((line, _)) = self.board.winning_line() {
            info!(winner = %mover, %line, "Game won");
            return Ok(TurnOutcome::Won {
                winner: mover,
                line,
            });
        }
        if self.board.is_tied() {
            info!("Game tied");
            return Ok(TurnOutcome::Tied);
        }

        self.turn = (self.turn + 1) % self.players.len();
        Ok(TurnOutcome::Continue {
            next: self.current_player().clone(),
        })
    }

    /// Clears the board and gives the first turn back to the first player.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = 0;
        info!("Session reset");
    }
}
