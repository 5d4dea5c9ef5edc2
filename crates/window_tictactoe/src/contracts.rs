//! Contract-based validation for sliding-window tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, WindowInvariants};
use super::{GameState, Player, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the coordinates name a square on the board.
pub struct InBounds;

impl InBounds {
    /// Converts coordinates to a position or rejects them.
    #[instrument]
    pub fn check(row: usize, col: usize) -> Result<Position, MoveError> {
        Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto occupied squares.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if !state.board().is_empty(mov.position) {
            Err(MoveError::CellOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: no line has been completed yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once the game is won.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.is_over() {
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a mover that is not the current player.
    #[instrument(skip(state))]
    pub fn check(player: Player, state: &GameState) -> Result<(), MoveError> {
        if player != state.current_player() {
            Err(MoveError::NotYourTurn(player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for a placement: empty square, game still open,
/// and the mover is on turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        CellIsEmpty::check(mov, state)?;
        GameNotOver::check(state)?;
        PlayersTurn::check(mov.player, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Contracts (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Postconditions: every invariant in [`WindowInvariants`] holds.
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, state)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), MoveError> {
        WindowInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Contract for asking the heuristic to move. The action is the mark the
/// heuristic controls.
pub struct ComputerMoveContract;

impl Contract<GameState, Player> for ComputerMoveContract {
    fn pre(state: &GameState, computer: &Player) -> Result<(), MoveError> {
        GameNotOver::check(state)?;
        PlayersTurn::check(*computer, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        MoveContract::post(before, after)
    }
}
