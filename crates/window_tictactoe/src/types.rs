//! Core domain types for sliding-window tic-tac-toe.

use super::position::Position;
use super::queue::MoveQueue;
use super::rules::{self, Line};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Error returned when a square symbol is not one of `""`, `"X"` or `"O"`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unknown square symbol {:?}", symbol)]
pub struct SquareParseError {
    /// The rejected symbol.
    pub symbol: String,
}

/// A square on the tic-tac-toe board.
///
/// Serializes as `""`, `"X"` or `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the display symbol (`""` for empty).
    pub fn symbol(self) -> &'static str {
        match self {
            Square::Empty => "",
            Square::Occupied(Player::X) => "X",
            Square::Occupied(Player::O) => "O",
        }
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.symbol().to_string()
    }
}

impl TryFrom<String> for Square {
    type Error = SquareParseError;

    fn try_from(symbol: String) -> Result<Self, Self::Error> {
        match symbol.as_str() {
            "" => Ok(Square::Empty),
            "X" => Ok(Square::Occupied(Player::X)),
            "O" => Ok(Square::Occupied(Player::O)),
            _ => Err(SquareParseError { symbol }),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Copies the board out as three rows of three.
    pub fn rows(&self) -> [[Square; 3]; 3] {
        let s = &self.squares;
        [[s[0], s[1], s[2]], [s[3], s[4], s[5]], [s[6], s[7], s[8]]]
    }

    /// Number of squares holding the given player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of non-empty squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their keypad number (1-9).
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Current status of the game.
///
/// There is no draw: each player holds at most three marks, so the
/// board never fills up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The player who completed the line.
        winner: Player,
        /// The completed line, ascending.
        line: Line,
    },
}

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    x_moves: MoveQueue,
    o_moves: MoveQueue,
}

impl GameState {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            x_moves: MoveQueue::new(),
            o_moves: MoveQueue::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (or the winner once the game is over).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns true once a line has been completed.
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Won { .. })
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won { winner, .. } => Some(winner),
            GameStatus::InProgress => None,
        }
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            GameStatus::Won { line, .. } => Some(line),
            GameStatus::InProgress => None,
        }
    }

    /// Returns the live marks of a player, oldest first.
    pub fn moves(&self, player: Player) -> &MoveQueue {
        match player {
            Player::X => &self.x_moves,
            Player::O => &self.o_moves,
        }
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Places the current player's mark (unchecked - validate with the
    /// move contracts first).
    ///
    /// The mover's oldest mark is evicted before the win check runs, so the
    /// check only ever sees the post-eviction board. Returns the evicted
    /// position, if any.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub(crate) fn apply_move(&mut self, pos: Position) -> Option<Position> {
        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));

        let queue = match player {
            Player::X => &mut self.x_moves,
            Player::O => &mut self.o_moves,
        };
        let evicted = queue.push(pos);
        if let Some(oldest) = evicted {
            debug!(evicted = %oldest, "Window full, removing oldest mark");
            self.board.set(oldest, Square::Empty);
        }

        match rules::winning_line(&self.board) {
            Some((winner, line)) => {
                info!(%winner, ?line, "Line completed");
                self.status = GameStatus::Won { winner, line };
            }
            None => self.current_player = player.opponent(),
        }

        evicted
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_symbols_round_trip() {
        for square in [Square::Empty, Square::Occupied(Player::X), Square::Occupied(Player::O)] {
            let symbol: String = square.into();
            assert_eq!(Square::try_from(symbol).unwrap(), square);
        }
        assert!(Square::try_from("Z".to_string()).is_err());
    }

    #[test]
    fn test_board_rows_are_row_major() {
        let mut board = Board::new();
        board.set(Position::MiddleRight, Square::Occupied(Player::O));
        let rows = board.rows();
        assert_eq!(rows[1][2], Square::Occupied(Player::O));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_display_shows_keypad_numbers() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_apply_move_alternates_turn() {
        let mut state = GameState::new();
        state.apply_move(Position::Center);
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.board().get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_fourth_mark_evicts_oldest() {
        let mut state = GameState::new();
        // X: 0, 8, 5 ; O: 1, 3
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::BottomRight,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomLeft,
        ] {
            state.apply_move(pos);
        }
        assert_eq!(state.moves(Player::X).len(), 3);

        let evicted = state.apply_move(Position::Center);
        assert_eq!(evicted, Some(Position::TopLeft));
        assert!(state.board().is_empty(Position::TopLeft));
        assert_eq!(state.moves(Player::X).len(), 3);
    }

    #[test]
    fn test_win_keeps_turn_with_winner() {
        let mut state = GameState::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ] {
            state.apply_move(pos);
        }
        assert!(state.is_over());
        assert_eq!(state.winner(), Some(Player::X));
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(
            state.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }
}
