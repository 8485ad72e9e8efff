//! Strictly Board - terminal entry point.

use anyhow::Result;
use clap::Parser;
use std::io;
use strictly_board_cli::cli::{Cli, Command};
use strictly_board_cli::{AppConfig, Evaluation, GameSession, parse_board, run_interactive};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play { size } => play(config, size),
        Command::Evaluate { board, json } => evaluate(&board, json),
    }
}

/// Runs an interactive game on stdin/stdout.
#[instrument(skip(config))]
fn play(config: AppConfig, size: Option<usize>) -> Result<()> {
    let config = match size {
        Some(size) => config.with_size(size),
        None => config,
    };
    config.validate()?;

    let mut session = GameSession::from_config(&config)?;
    info!(size = session.board().size(), "Starting game");
    run_interactive(&mut session, io::stdin().lock(), io::stdout().lock())
}

/// Prints the status of a board literal.
#[instrument]
fn evaluate(literal: &str, json: bool) -> Result<()> {
    let evaluation = Evaluation::of(parse_board(literal)?);
    if json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        println!("{}", evaluation.render());
    }
    Ok(())
}
