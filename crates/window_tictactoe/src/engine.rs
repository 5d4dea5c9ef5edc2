//! The game engine: owns one session and exposes its five operations.
//!
//! Every operation returns an owned [`GameSnapshot`]; callers never hold
//! references into live state. Rejected operations leave state untouched.

use super::action::{Move, MoveError};
use super::contracts::{ComputerMoveContract, Contract, InBounds, MoveContract};
use super::game_id::GameId;
use super::heuristic;
use super::snapshot::GameSnapshot;
use super::{GameState, Player};
use tracing::{debug, info, instrument, warn};

/// In-memory state machine for one sliding-window tic-tac-toe session.
///
/// The engine is mode-agnostic: it knows whose turn it is and whether a
/// move is legal. Deciding when the heuristic should move is up to the
/// caller.
#[derive(Debug, Clone)]
pub struct GameEngine {
    game_id: GameId,
    state: GameState,
    computer: Player,
}

impl GameEngine {
    /// Creates an engine with a fresh session; the heuristic plays O.
    #[instrument]
    pub fn new() -> Self {
        Self::with_computer(Player::O)
    }

    /// Creates an engine whose heuristic controls the given mark.
    #[instrument]
    pub fn with_computer(computer: Player) -> Self {
        let game_id = GameId::generate();
        info!(%game_id, %computer, "Creating game engine");
        Self {
            game_id,
            state: GameState::new(),
            computer,
        }
    }

    /// Starts a brand-new game under a fresh id.
    #[instrument(skip(self), fields(old_game_id = %self.game_id))]
    pub fn new_game(&mut self) -> GameSnapshot {
        self.game_id = GameId::generate();
        self.state = GameState::new();
        info!(game_id = %self.game_id, "New game");
        self.game()
    }

    /// Returns the current state without changing it.
    pub fn game(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.game_id, &self.state)
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `row` or `col` is greater than 2
    /// - [`MoveError::CellOccupied`] if the square is taken
    /// - [`MoveError::GameAlreadyOver`] once a line has been completed
    #[instrument(skip(self), fields(game_id = %self.game_id))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<GameSnapshot, MoveError> {
        let position = InBounds::check(row, col).inspect_err(|e| warn!(%e, "Rejected move"))?;
        let action = Move::new(self.state.current_player(), position);
        MoveContract::pre(&self.state, &action).inspect_err(|e| warn!(%e, "Rejected move"))?;
        self.apply(action)
    }

    /// Lets the heuristic choose and play a move for its mark.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyOver`] once a line has been completed
    /// - [`MoveError::NotYourTurn`] if the heuristic's mark is not on turn
    /// - [`MoveError::NoLegalMove`] if the board has no empty square
    #[instrument(skip(self), fields(game_id = %self.game_id, computer = %self.computer))]
    pub fn make_computer_move(&mut self) -> Result<GameSnapshot, MoveError> {
        ComputerMoveContract::pre(&self.state, &self.computer)
            .inspect_err(|e| warn!(%e, "Rejected computer move"))?;

        let choice = heuristic::choose_move(self.state.board_mut(), self.computer)
            .ok_or(MoveError::NoLegalMove)
            .inspect_err(|e| warn!(%e, "Rejected computer move"))?;
        debug!(position = %choice.position, reason = %choice.reason, "Computer move");

        self.apply(Move::new(self.computer, choice.position))
    }

    /// Replays the session from scratch, keeping the current id.
    #[instrument(skip(self), fields(game_id = %self.game_id))]
    pub fn reset_game(&mut self) -> GameSnapshot {
        self.state = GameState::new();
        info!("Game reset");
        self.game()
    }

    /// Current session id.
    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    /// Mark controlled by the heuristic.
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// Player to move (or the winner once the game is over).
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// True once a line has been completed.
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Read-only view of the live state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies a validated move and checks postconditions in debug builds.
    ///
    /// A failed postcondition rolls the state back before reporting.
    fn apply(&mut self, action: Move) -> Result<GameSnapshot, MoveError> {
        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let evicted = self.state.apply_move(action.position);
        debug!(%action, ?evicted, "Move applied");

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, &self.state) {
            self.state = before;
            return Err(e);
        }

        if let Some(winner) = self.state.winner() {
            info!(%winner, "Game over");
        }
        Ok(self.game())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
