//! Game rules for sliding-window tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules never mutate the
//! board, which is what lets the heuristic probe hypothetical placements
//! without side effects.

pub mod win;

pub use win::{LINES, Line, check_winner, winning_line};
