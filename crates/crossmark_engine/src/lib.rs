//! Crossmark engine - tic-tac-toe rules and a minimax opponent.
//!
//! # Architecture
//!
//! - **Rules**: [`GameState`] owns the board, validates moves and detects
//!   wins and draws.
//! - **AI**: [`AiPlanner`] picks a move for a board snapshot at a given
//!   [`Difficulty`].
//! - **Session**: [`Match`] wires the two together and keeps score.
//!
//! The engine is synchronous and does no I/O. Callers serialize access to a
//! game; `&mut self` on every mutating call enforces that within Rust.
//!
//! # Example
//!
//! ```
//! use crossmark_engine::{AiPlanner, Difficulty, GameState};
//!
//! let mut game = GameState::new();
//! game.apply_move(1, 1).unwrap();
//!
//! let mut ai = AiPlanner::with_seed(1);
//! let (row, col) = ai.choose_move_rc(&game.board(), Difficulty::Hard).unwrap();
//! game.apply_move(row, col).unwrap();
//! assert_eq!(game.move_count(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod ai;
mod game;
mod position;
pub mod rules;
mod session;
mod types;

// Crate-level exports - Core types
pub use types::{Board, GameStatus, Outcome, Player, Square};

// Crate-level exports - Positions and lines
pub use position::Position;
pub use rules::Line;

// Crate-level exports - Rules engine
pub use action::MoveError;
pub use game::{GameSnapshot, GameState};

// Crate-level exports - AI
pub use ai::{AiPlanner, Difficulty};

// Crate-level exports - Session management
pub use session::{GameMode, Match, MatchSettings, Scoreboard, Turn};

/// Alias matching the cell-value vocabulary used by presentation layers.
pub type Mark = Square;
