//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board storage
//! so the game state and the AI search evaluate positions the same way.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{Line, check_winner, winning_line};

use super::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the terminal status of a board.
///
/// A completed line wins; otherwise a full board is a draw; otherwise the
/// game is still in progress.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
