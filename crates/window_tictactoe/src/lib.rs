//! Sliding-window tic-tac-toe engine.
//!
//! Each player may have at most three marks on the board: placing a fourth
//! removes that player's oldest surviving mark. Games only end when a line
//! is completed, since the board can never fill up.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns one session and exposes `new_game`,
//!   `game`, `make_move`, `make_computer_move` and `reset_game`
//! - **Rules**: pure win detection over a [`Board`]
//! - **Heuristic**: greedy opponent (win > block > center > corner > any)
//! - **Contracts**: named preconditions plus invariants checked after every
//!   move in debug builds
//!
//! # Example
//!
//! ```
//! use window_tictactoe::{GameEngine, Player};
//!
//! let mut engine = GameEngine::new();
//! let snapshot = engine.make_move(1, 1)?;
//! assert_eq!(snapshot.current_player(), Player::O);
//!
//! let snapshot = engine.make_computer_move()?;
//! assert_eq!(snapshot.current_player(), Player::X);
//! # Ok::<(), window_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod game_id;
mod position;
mod queue;
mod snapshot;
mod types;

pub mod contracts;
pub mod heuristic;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use engine::GameEngine;
pub use game_id::GameId;
pub use position::{Position, PositionOutOfRange};
pub use queue::{MoveQueue, WINDOW};
pub use snapshot::GameSnapshot;
pub use types::{Board, GameState, GameStatus, Player, Square, SquareParseError};
