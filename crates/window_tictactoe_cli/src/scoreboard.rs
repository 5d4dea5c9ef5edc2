//! Win tallies kept by the front end across games.

use tracing::{info, instrument};
use window_tictactoe::Player as Mark;

/// Per-process win counts keyed by mark.
///
/// There is no draw column: the window rule means a game only ends with a
/// completed line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one finished game.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, winner: Mark) {
        match winner {
            Mark::X => self.x_wins += 1,
            Mark::O => self.o_wins += 1,
        }
        info!(x = self.x_wins, o = self.o_wins, "Score updated");
    }

    /// Games won by the given mark.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Score - X: {}  O: {}", self.x_wins, self.o_wins)
    }
}
