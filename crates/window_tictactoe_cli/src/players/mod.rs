//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::input::{Action, Console};
use anyhow::Result;
use window_tictactoe::GameSnapshot;

/// Trait for seats that decide what happens next.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets the next action from this player.
    async fn next_action(&mut self, game: &GameSnapshot, console: &mut Console) -> Result<Action>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns true for seats driven by a person.
    fn is_human(&self) -> bool;
}
