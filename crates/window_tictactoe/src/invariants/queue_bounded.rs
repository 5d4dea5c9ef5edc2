//! Window invariant: no player ever holds more than three marks.

use super::super::queue::WINDOW;
use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: each player's move queue holds at most [`WINDOW`] positions.
pub struct QueueBoundedInvariant;

impl Invariant<GameState> for QueueBoundedInvariant {
    fn holds(state: &GameState) -> bool {
        [Player::X, Player::O]
            .into_iter()
            .all(|player| state.moves(player).len() <= WINDOW)
    }

    fn description() -> &'static str {
        "Each player holds at most three marks"
    }
}
