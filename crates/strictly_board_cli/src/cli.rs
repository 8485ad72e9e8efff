//! Command-line interface for strictly_board.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Board - tic-tac-toe board tracker
#[derive(Parser, Debug)]
#[command(name = "strictly_board")]
#[command(about = "Play or evaluate tic-tac-toe style boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true, env = "STRICTLY_BOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on the terminal, reading moves from stdin
    Play {
        /// Board dimension (overrides the config file)
        #[arg(short, long)]
        size: Option<usize>,
    },

    /// Report whether a board is won, tied, or still in progress
    Evaluate {
        /// Board rows separated by '/', with '.' or '_' for empty squares
        board: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
