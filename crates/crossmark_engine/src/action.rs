//! Move rejection reasons.
//!
//! A rejected move never mutates the game, so every variant is recoverable:
//! the caller decides whether to re-prompt.

use super::Position;

/// Error returned when a move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column is outside 0-2.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
