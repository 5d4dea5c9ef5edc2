//! Window Tic-Tac-Toe - terminal front end
//!
//! Plays sliding-window tic-tac-toe against the heuristic or a second
//! human, or replays a move list and prints the resulting snapshot.

#![warn(missing_docs)]

mod cli;
mod config;
mod input;
mod mode;
mod orchestrator;
mod players;
mod render;
mod scoreboard;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use config::SessionConfig;
use input::{Action, Console};
use mode::GameMode;
use orchestrator::Orchestrator;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use window_tictactoe::{GameEngine, GameSnapshot, Player as Mark};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            delay_ms,
            computer,
            no_ages,
        } => {
            let config = session_config(config, mode, delay_ms, computer, no_ages)?;
            run_play(config).await
        }
        Command::Replay {
            moves,
            computer,
            pretty,
        } => {
            let snapshot = replay(&moves, computer)?;
            let json = if pretty {
                serde_json::to_string_pretty(&snapshot)
            } else {
                serde_json::to_string(&snapshot)
            }
            .context("Failed to serialize snapshot")?;
            println!("{}", json);
            Ok(())
        }
    }
}

/// Loads the config file (if any) and applies command-line overrides.
fn session_config(
    path: Option<PathBuf>,
    mode: Option<GameMode>,
    delay_ms: Option<u64>,
    computer: Option<Mark>,
    no_ages: bool,
) -> Result<SessionConfig> {
    let mut config = match path {
        Some(path) => SessionConfig::from_file(&path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => SessionConfig::default(),
    };

    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    if let Some(delay_ms) = delay_ms {
        config = config.with_thinking_delay_ms(delay_ms);
    }
    if let Some(computer) = computer {
        config = config.with_computer(computer);
    }
    if no_ages {
        config = config.with_show_ages(false);
    }
    Ok(config)
}

/// Runs an interactive session on stdin/stdout.
#[instrument]
async fn run_play(config: SessionConfig) -> Result<()> {
    info!("Starting interactive session");
    let mut orchestrator = Orchestrator::new(&config, Console::stdio());
    let scores = orchestrator.run().await?;
    info!(games = scores.games(), "Goodbye");
    Ok(())
}

/// Applies each move in order to a fresh engine.
///
/// Only squares and `cpu` are accepted; the first rejected move aborts.
#[instrument]
fn replay(moves: &[String], computer: Mark) -> Result<GameSnapshot> {
    let mut engine = GameEngine::with_computer(computer);
    let mut snapshot = engine.game();

    for (index, token) in moves.iter().enumerate() {
        let action: Action = token
            .parse()
            .with_context(|| format!("Move {} ({:?})", index + 1, token))?;
        snapshot = match action {
            Action::Place { row, col } => engine.make_move(row, col),
            Action::ComputerMove => engine.make_computer_move(),
            other => bail!("Move {} ({:?}): {:?} is not a move", index + 1, token, other),
        }
        .with_context(|| format!("Move {} ({:?}) rejected", index + 1, token))?;
    }

    Ok(snapshot)
}
