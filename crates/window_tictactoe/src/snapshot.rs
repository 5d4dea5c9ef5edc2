//! Immutable copies of engine state handed to callers.

use super::game_id::GameId;
use super::rules::Line;
use super::{GameState, Player, Position, Square};
use serde::{Deserialize, Serialize};

/// A point-in-time copy of a game.
///
/// Owned outright by the caller; changing it has no effect on the engine.
/// Serializes with the camelCase field names front ends expect
/// (`gameId`, `currentPlayer`, `player1Moves`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    game_id: GameId,
    board: [[Square; 3]; 3],
    current_player: Player,
    winner: Option<Player>,
    is_game_over: bool,
    player1_moves: Vec<Position>,
    player2_moves: Vec<Position>,
    winning_line: Option<Line>,
}

impl GameSnapshot {
    pub(crate) fn capture(game_id: &GameId, state: &GameState) -> Self {
        Self {
            game_id: game_id.clone(),
            board: state.board().rows(),
            current_player: state.current_player(),
            winner: state.winner(),
            is_game_over: state.is_over(),
            player1_moves: state.moves(Player::X).positions(),
            player2_moves: state.moves(Player::O).positions(),
            winning_line: state.winning_line(),
        }
    }

    /// Session identifier.
    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    /// Board as three rows of three.
    pub fn board(&self) -> &[[Square; 3]; 3] {
        &self.board
    }

    /// Player to move, or the winner once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Winner, if a line has been completed.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// True once a line has been completed.
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// X's live marks, oldest first.
    pub fn player1_moves(&self) -> &[Position] {
        &self.player1_moves
    }

    /// O's live marks, oldest first.
    pub fn player2_moves(&self) -> &[Position] {
        &self.player2_moves
    }

    /// The completed line, ascending.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Square at a position.
    pub fn square(&self, pos: Position) -> Square {
        self.board[pos.row()][pos.col()]
    }

    /// Live marks of a player, oldest first.
    pub fn moves_of(&self, player: Player) -> &[Position] {
        match player {
            Player::X => &self.player1_moves,
            Player::O => &self.player2_moves,
        }
    }

    /// Age of the mark at `pos` within its owner's window: 0 for the newest
    /// up to 2 for the one that leaves next. `None` for empty squares.
    pub fn age_of(&self, pos: Position) -> Option<usize> {
        let owner = self.square(pos).player()?;
        let moves = self.moves_of(owner);
        moves
            .iter()
            .position(|p| *p == pos)
            .map(|index| moves.len() - 1 - index)
    }

    /// True if the position is part of the winning line.
    pub fn is_winning_square(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_after(moves: &[Position]) -> GameSnapshot {
        let mut state = GameState::new();
        for pos in moves {
            state.apply_move(*pos);
        }
        GameSnapshot::capture(&GameId::from("game-test0000".to_string()), &state)
    }

    #[test]
    fn test_json_shape() {
        let snapshot = snapshot_after(&[Position::Center]);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["gameId"], "game-test0000");
        assert_eq!(json["board"][1][1], "X");
        assert_eq!(json["board"][0][0], "");
        assert_eq!(json["currentPlayer"], "O");
        assert_eq!(json["winner"], serde_json::Value::Null);
        assert_eq!(json["isGameOver"], false);
        assert_eq!(json["player1Moves"], serde_json::json!([4]));
        assert_eq!(json["player2Moves"], serde_json::json!([]));
        assert_eq!(json["winningLine"], serde_json::Value::Null);
    }

    #[test]
    fn test_json_deserializes_back() {
        let snapshot = snapshot_after(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ]);
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
        assert!(json.contains("\"winningLine\":[0,1,2]"));
    }

    #[test]
    fn test_age_of() {
        let snapshot = snapshot_after(&[
            Position::TopLeft,
            Position::Center,
            Position::BottomRight,
            Position::TopRight,
            Position::MiddleLeft,
        ]);
        assert_eq!(snapshot.age_of(Position::MiddleLeft), Some(0));
        assert_eq!(snapshot.age_of(Position::BottomRight), Some(1));
        assert_eq!(snapshot.age_of(Position::TopLeft), Some(2));
        assert_eq!(snapshot.age_of(Position::TopRight), Some(0));
        assert_eq!(snapshot.age_of(Position::BottomCenter), None);
    }

    #[test]
    fn test_mutating_snapshot_copy_is_local() {
        let snapshot = snapshot_after(&[Position::Center]);
        let mut copy = snapshot.clone();
        copy.board[1][1] = Square::Empty;
        assert_eq!(snapshot.square(Position::Center), Square::Occupied(Player::X));
    }
}
