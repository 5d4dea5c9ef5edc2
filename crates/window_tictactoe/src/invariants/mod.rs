//! First-class invariants for sliding-window tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and serve as documentation of system guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two and three invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        collect(violations)
    }
}

pub mod board_matches_queues;
pub mod queue_bounded;
pub mod winning_line_held;

pub use board_matches_queues::BoardMatchesQueuesInvariant;
pub use queue_bounded::QueueBoundedInvariant;
pub use winning_line_held::WinningLineHeldInvariant;

/// All game invariants as a composable set.
pub type WindowInvariants = (
    QueueBoundedInvariant,
    BoardMatchesQueuesInvariant,
    WinningLineHeldInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        let state = GameState::new();
        assert!(WindowInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_evictions() {
        let mut state = GameState::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::BottomRight,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomLeft,
            Position::Center,
            Position::TopLeft,
        ] {
            state.apply_move(pos);
        }
        assert!(WindowInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut state = GameState::new();
        state.apply_move(Position::Center);
        state
            .board_mut()
            .set(Position::TopLeft, Square::Occupied(Player::O));

        let violations = WindowInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            BoardMatchesQueuesInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let state = GameState::new();

        type TwoInvariants = (QueueBoundedInvariant, WinningLineHeldInvariant);
        assert!(TwoInvariants::check_all(&state).is_ok());
    }
}
