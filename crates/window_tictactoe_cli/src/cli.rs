//! Command-line interface for window_tictactoe.

use crate::mode::GameMode;
use clap::{Parser, Subcommand};
use strum::IntoEnumIterator;
use window_tictactoe::Player as Mark;

/// Window Tic-Tac-Toe - each player keeps only their three newest marks
#[derive(Parser, Debug)]
#[command(name = "window_tictactoe")]
#[command(about = "Sliding-window tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML session config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Who plays against you
        #[arg(short, long, value_enum)]
        mode: Option<GameMode>,

        /// Computer thinking pause in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Mark played by the computer (X or O)
        #[arg(long, value_parser = parse_mark)]
        computer: Option<Mark>,

        /// Hide the new/2nd/old badges
        #[arg(long)]
        no_ages: bool,
    },

    /// Apply a list of moves and print the final snapshot as JSON
    Replay {
        /// Moves in any form the game accepts ("1,1", "5", "center") or
        /// "cpu" for a heuristic move
        moves: Vec<String>,

        /// Mark played by the heuristic for "cpu" moves
        #[arg(long, value_parser = parse_mark, default_value = "O")]
        computer: Mark,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

/// Parses `X` or `O`, ignoring case.
pub fn parse_mark(s: &str) -> Result<Mark, String> {
    Mark::iter()
        .find(|mark| mark.to_string().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| format!("expected X or O, got {:?}", s))
}
