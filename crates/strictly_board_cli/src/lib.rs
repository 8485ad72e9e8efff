//! Strictly Board CLI - terminal front end for strictly_board
//!
//! The board only tracks squares; this crate supplies everything around it:
//! players, turn order, refusing moves once a game is over, input parsing,
//! and configuration.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod config;
mod input;
mod player;
mod session;

pub mod cli;

pub use app::{Evaluation, run_interactive};
pub use config::{AppConfig, ConfigError};
pub use input::{Command, InputError, parse_board, parse_command};
pub use player::Player;
pub use session::{GameSession, SessionError, TurnOutcome};
