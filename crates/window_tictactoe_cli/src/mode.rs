//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Game mode - who is the opponent?
///
/// The engine never sees this; it only decides which seats the
/// orchestrator fills with a human or the heuristic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Human vs the greedy heuristic
    #[default]
    HumanVsComputer,
    /// Two humans sharing the terminal
    HumanVsHuman,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            GameMode::HumanVsComputer => "Human vs Computer",
            GameMode::HumanVsHuman => "Human vs Human",
        }
    }

    /// Returns true if one seat is played by the heuristic.
    pub fn has_computer(&self) -> bool {
        matches!(self, GameMode::HumanVsComputer)
    }
}
