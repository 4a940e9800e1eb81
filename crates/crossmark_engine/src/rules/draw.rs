//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is a finished draw: full, with no completed line.
#[instrument(level = "trace")]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
