//! Text rendering of snapshots.

use crate::mode::GameMode;
use window_tictactoe::{GameSnapshot, Player as Mark, Position, Square};

/// Command list shown by `help`.
pub const HELP: &str = "\
Moves:    'row col' or 'row,col' (0-2), a keypad digit 1-9, or a label like 'center'
Commands: new, reset, score, cpu, help, quit
Each player keeps only their three newest marks; a fourth removes the oldest.";

/// Badge for a mark's age: `new`, `2nd`, or `old`.
pub fn age_badge(age: usize) -> &'static str {
    match age {
        0 => "new",
        1 => "2nd",
        _ => "old",
    }
}

fn cell(snapshot: &GameSnapshot, pos: Position, show_ages: bool) -> String {
    let text = match snapshot.square(pos) {
        Square::Empty => return format!("   {}   ", pos.to_index() + 1),
        Square::Occupied(mark) => match snapshot.age_of(pos) {
            Some(age) if show_ages => format!("{} {}", mark, age_badge(age)),
            _ => mark.to_string(),
        },
    };
    if snapshot.is_winning_square(pos) {
        format!("{:^7}", format!("[{}]", text))
    } else {
        format!("{:^7}", text)
    }
}

/// Renders the board as a 3x3 grid. Empty squares show their keypad digit;
/// winning squares are bracketed.
pub fn board(snapshot: &GameSnapshot, show_ages: bool) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            (0..3)
                .filter_map(|col| Position::from_row_col(row, col))
                .map(|pos| cell(snapshot, pos, show_ages))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n-------+-------+-------\n")
}

/// One-line status for the current snapshot.
pub fn status(snapshot: &GameSnapshot, mode: GameMode, computer: Mark) -> String {
    match snapshot.winner() {
        Some(winner) if mode.has_computer() && winner == computer => {
            format!("GAME OVER - {} wins. The computer takes this round.", winner)
        }
        Some(winner) if mode.has_computer() => {
            format!("GAME OVER - {} wins. You beat the computer!", winner)
        }
        Some(winner) => format!("GAME OVER - Player {} wins!", winner),
        None if mode.has_computer() && snapshot.current_player() == computer => {
            "COMPUTER'S TURN".to_string()
        }
        None if mode.has_computer() => format!("YOUR TURN ({})", snapshot.current_player()),
        None => format!("PLAYER {}'S TURN", snapshot.current_player()),
    }
}
