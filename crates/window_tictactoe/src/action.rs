//! First-class action types for sliding-window tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
///
/// A rejected operation never changes engine state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column outside the 3x3 grid.
    #[display("Position ({}, {}) is off the board (rows and columns are 0-2)", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// The heuristic player was asked to move out of turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Player),

    /// The heuristic found no empty square.
    #[display("No legal move available")]
    NoLegalMove,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl MoveError {
    /// Returns true for rejections caused by the requested move itself
    /// (off-board, occupied, or game over), as opposed to turn order or
    /// engine faults.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            MoveError::OutOfBounds { .. } | MoveError::CellOccupied(_) | MoveError::GameAlreadyOver
        )
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_classification() {
        assert!(MoveError::OutOfBounds { row: 3, col: 0 }.is_invalid_move());
        assert!(MoveError::CellOccupied(Position::Center).is_invalid_move());
        assert!(MoveError::GameAlreadyOver.is_invalid_move());
        assert!(!MoveError::NotYourTurn(Player::O).is_invalid_move());
        assert!(!MoveError::NoLegalMove.is_invalid_move());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::CellOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(MoveError::NotYourTurn(Player::O).to_string(), "It's not O's turn");
    }
}
