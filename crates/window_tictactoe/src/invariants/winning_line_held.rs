//! A recorded winning line is really on the board.

use super::super::{GameState, GameStatus, Square};
use super::Invariant;

/// Invariant: once the game is won, every square of the winning line holds
/// the winner's mark.
pub struct WinningLineHeldInvariant;

impl Invariant<GameState> for WinningLineHeldInvariant {
    fn holds(state: &GameState) -> bool {
        match state.status() {
            GameStatus::InProgress => true,
            GameStatus::Won { winner, line } => line
                .iter()
                .all(|pos| state.board().get(*pos) == Square::Occupied(*winner)),
        }
    }

    fn description() -> &'static str {
        "Winning line squares hold the winner's mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_won_game_holds() {
        let mut state = GameState::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::MiddleLeft,
            Position::TopRight,
            Position::BottomLeft,
        ] {
            state.apply_move(pos);
        }
        assert_eq!(state.winner(), Some(Player::X));
        assert!(WinningLineHeldInvariant::holds(&state));
    }

    #[test]
    fn test_erased_line_violates() {
        let mut state = GameState::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::MiddleLeft,
            Position::TopRight,
            Position::BottomLeft,
        ] {
            state.apply_move(pos);
        }
        state.board_mut().set(Position::MiddleLeft, Square::Empty);
        assert!(!WinningLineHeldInvariant::holds(&state));
    }
}
