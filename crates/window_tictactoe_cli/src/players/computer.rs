//! Heuristic player with a thinking pause.

use super::Player;
use crate::input::{Action, Console};
use anyhow::Result;
use std::time::Duration;
use tracing::debug;
use window_tictactoe::GameSnapshot;

/// Seat played by the engine's heuristic.
///
/// The pause only paces the UI; the engine call happens after it.
pub struct ComputerPlayer {
    name: String,
    delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer seat that waits `delay` before each move.
    pub fn new(name: impl Into<String>, delay: Duration) -> Self {
        Self {
            name: name.into(),
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    async fn next_action(&mut self, _game: &GameSnapshot, console: &mut Console) -> Result<Action> {
        debug!(ai = %self.name, delay_ms = self.delay.as_millis() as u64, "AI thinking");
        console.say(format!("{} is thinking...", self.name))?;
        tokio::time::sleep(self.delay).await;
        Ok(Action::ComputerMove)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        false
    }
}
