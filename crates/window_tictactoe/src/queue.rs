//! Per-player sliding window of live marks.

use super::position::Position;
use std::collections::VecDeque;

/// Maximum number of marks a player may have on the board.
pub const WINDOW: usize = 3;

/// Ordered positions a player currently occupies, oldest first.
///
/// Never holds more than [`WINDOW`] entries: pushing a fourth evicts the
/// oldest in strict FIFO order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveQueue {
    positions: VecDeque<Position>,
}

impl MoveQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            positions: VecDeque::with_capacity(WINDOW + 1),
        }
    }

    /// Appends a position, returning the evicted oldest one if the window
    /// overflowed.
    pub fn push(&mut self, pos: Position) -> Option<Position> {
        self.positions.push_back(pos);
        if self.positions.len() > WINDOW {
            self.positions.pop_front()
        } else {
            None
        }
    }

    /// Positions, oldest first.
    pub fn positions(&self) -> Vec<Position> {
        self.positions.iter().copied().collect()
    }

    /// Iterates positions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }

    /// The mark that the next push would evict once the window is full.
    pub fn oldest(&self) -> Option<Position> {
        self.positions.front().copied()
    }

    /// Number of live marks.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the player has no marks on the board.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns true if the player occupies the position.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Age of a mark: 0 for the newest, `len - 1` for the oldest.
    pub fn age_of(&self, pos: Position) -> Option<usize> {
        self.positions
            .iter()
            .position(|p| *p == pos)
            .map(|index| self.positions.len() - 1 - index)
    }
}
