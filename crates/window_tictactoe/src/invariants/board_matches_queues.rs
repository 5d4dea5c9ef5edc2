//! Board/queue agreement: the board holds exactly the queued marks.

use super::super::{GameState, Player, Position, Square};
use super::Invariant;

/// Invariant: a square holds X iff it is in X's queue, O iff it is in O's
/// queue, and is empty otherwise.
pub struct BoardMatchesQueuesInvariant;

impl Invariant<GameState> for BoardMatchesQueuesInvariant {
    fn holds(state: &GameState) -> bool {
        Position::ALL.into_iter().all(|pos| {
            let in_x = state.moves(Player::X).contains(pos);
            let in_o = state.moves(Player::O).contains(pos);
            match state.board().get(pos) {
                Square::Empty => !in_x && !in_o,
                Square::Occupied(Player::X) => in_x && !in_o,
                Square::Occupied(Player::O) => in_o && !in_x,
            }
        })
    }

    fn description() -> &'static str {
        "Board squares match the players' move queues"
    }
}
