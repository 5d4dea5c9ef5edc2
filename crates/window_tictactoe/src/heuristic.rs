//! Greedy heuristic opponent.
//!
//! Priority order, first match wins: complete own line, block the
//! opponent's line, take the center, take a corner, take any empty square.
//! Lines are found by probing each empty square in row-major order.

use super::rules::check_winner;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Why the heuristic picked a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Reason {
    /// The move completes a line for the heuristic player.
    Win,
    /// The move occupies a square the opponent would win on.
    Block,
    /// The center was free.
    Center,
    /// The first free corner.
    Corner,
    /// The first free square in row-major order.
    FirstEmpty,
}

/// A square chosen by the heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    /// Where to move.
    pub position: Position,
    /// Which priority produced it.
    pub reason: Reason,
}

impl Choice {
    fn new(position: Position, reason: Reason) -> Self {
        Self { position, reason }
    }
}

/// Tests whether placing `player` at `pos` would complete a line.
///
/// Only the probed square is touched: its previous content is saved and
/// written back before returning, so the board is left exactly as found.
pub fn probe(board: &mut Board, pos: Position, player: Player) -> bool {
    let saved = board.get(pos);
    board.set(pos, Square::Occupied(player));
    let wins = check_winner(board) == Some(player);
    board.set(pos, saved);
    trace!(%pos, %player, wins, "Probed square");
    wins
}

/// First empty square (row-major) where `player` would complete a line.
pub fn find_winning_square(board: &mut Board, player: Player) -> Option<Position> {
    for pos in Position::ALL {
        if board.is_empty(pos) && probe(board, pos, player) {
            return Some(pos);
        }
    }
    None
}

/// Picks a move for `me`, or `None` if the board has no empty square.
#[instrument(skip(board), fields(player = %me))]
pub fn choose_move(board: &mut Board, me: Player) -> Option<Choice> {
    let choice = if let Some(pos) = find_winning_square(board, me) {
        Some(Choice::new(pos, Reason::Win))
    } else if let Some(pos) = find_winning_square(board, me.opponent()) {
        Some(Choice::new(pos, Reason::Block))
    } else if board.is_empty(Position::Center) {
        Some(Choice::new(Position::Center, Reason::Center))
    } else if let Some(pos) = Position::CORNERS.into_iter().find(|p| board.is_empty(*p)) {
        Some(Choice::new(pos, Reason::Corner))
    } else {
        Position::ALL
            .into_iter()
            .find(|p| board.is_empty(*p))
            .map(|pos| Choice::new(pos, Reason::FirstEmpty))
    };

    match &choice {
        Some(c) => debug!(position = %c.position, reason = %c.reason, "Heuristic chose square"),
        None => debug!("No empty square to choose"),
    }
    choice
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(cells: &str) -> Board {
        // Nine chars, row-major: 'X', 'O' or '.'.
        let mut board = Board::new();
        for (pos, c) in Position::ALL.into_iter().zip(cells.chars()) {
            match c {
                'X' => board.set(pos, Square::Occupied(Player::X)),
                'O' => board.set(pos, Square::Occupied(Player::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_probe_restores_square() {
        let mut board = board_from("XX.......");
        let before = board.clone();
        assert!(probe(&mut board, Position::TopRight, Player::X));
        assert!(!probe(&mut board, Position::Center, Player::X));
        assert_eq!(board, before);
    }

    #[test]
    fn test_prefers_win_over_block() {
        // O can win at 5, X threatens 2.
        let mut board = board_from("XX.OO....");
        let choice = choose_move(&mut board, Player::O).unwrap();
        assert_eq!(choice, Choice::new(Position::MiddleRight, Reason::Win));
    }

    #[test]
    fn test_blocks_opponent() {
        let mut board = board_from("XX..O....");
        let choice = choose_move(&mut board, Player::O).unwrap();
        assert_eq!(choice, Choice::new(Position::TopRight, Reason::Block));
    }

    #[test]
    fn test_takes_center() {
        let mut board = board_from("X........");
        let choice = choose_move(&mut board, Player::O).unwrap();
        assert_eq!(choice.reason, Reason::Center);
    }

    #[test]
    fn test_takes_first_free_corner() {
        let mut board = board_from("X...X....");
        let choice = choose_move(&mut board, Player::O).unwrap();
        // X threatens 0-4-8, so this is a block on the corner.
        assert_eq!(choice, Choice::new(Position::BottomRight, Reason::Block));

        let mut board = board_from("O...X....");
        let choice = choose_move(&mut board, Player::O).unwrap();
        assert_eq!(choice, Choice::new(Position::TopRight, Reason::Corner));
    }

    #[test]
    fn test_falls_back_to_first_empty() {
        let mut board = board_from("XOOOXXX.O");
        // Only square 7 is free; nobody wins there.
        let choice = choose_move(&mut board, Player::O).unwrap();
        assert_eq!(choice, Choice::new(Position::BottomCenter, Reason::FirstEmpty));
    }

    #[test]
    fn test_full_board_has_no_choice() {
        let mut board = board_from("XOXXOOOXX");
        assert_eq!(choose_move(&mut board, Player::O), None);
    }

    #[test]
    fn test_choose_move_leaves_board_untouched() {
        let mut board = board_from("XX.OO....");
        let before = board.clone();
        choose_move(&mut board, Player::O);
        assert_eq!(board, before);
    }
}
