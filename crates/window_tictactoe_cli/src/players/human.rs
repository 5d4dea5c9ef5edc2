//! Human player that types commands.

use super::Player;
use crate::input::{Action, Console};
use anyhow::Result;
use tracing::debug;
use window_tictactoe::GameSnapshot;

/// Human player reading commands from the console.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn next_action(&mut self, game: &GameSnapshot, console: &mut Console) -> Result<Action> {
        loop {
            let prompt = if game.is_game_over() {
                format!("{} (new/reset/score/quit) > ", self.name)
            } else {
                format!("{} [{}] > ", self.name, game.current_player())
            };
            console.prompt(prompt)?;

            let Some(line) = console.read_line().await? else {
                debug!(player = %self.name, "Input closed");
                return Ok(Action::Quit);
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Action>() {
                Ok(action) => return Ok(action),
                Err(e) => console.say(format!("{}. Type 'help' for commands.", e))?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}
