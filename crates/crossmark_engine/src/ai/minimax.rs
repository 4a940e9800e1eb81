//! Exhaustive minimax search.
//!
//! Scores are from the AI's point of view: a win is worth `10 - depth`, a
//! loss `depth - 10` and a draw `0`, where `depth` counts plies since the
//! move being scored. Faster wins and slower losses therefore score higher.
//!
//! The 3x3 tree is at most nine plies deep, so there is no pruning, move
//! ordering or depth limit.

use crate::{Board, Line, Player, Position, Square};
use tracing::{debug, instrument};

/// Score of a won game at depth 0.
pub const WIN_SCORE: i32 = 10;

/// Scores `board` for `ai` with `to_move` to play next.
///
/// Works on a private copy; `board` is never modified.
#[instrument(level = "trace")]
pub fn score(board: &Board, ai: Player, to_move: Player) -> i32 {
    let mut scratch = *board;
    search(&mut scratch, ai, to_move, 0)
}

/// Picks the empty cell with the highest score for `ai`.
///
/// Ties go to the first cell in row-major order. Returns `None` when the
/// board is full.
#[instrument]
pub fn best_move(board: &Board, ai: Player) -> Option<Position> {
    let mut scratch = *board;
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::valid_moves(board) {
        scratch.set(pos, Square::Occupied(ai));
        let value = search(&mut scratch, ai, ai.opponent(), 0);
        scratch.set(pos, Square::Empty);

        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((pos, value));
        }
    }

    if let Some((pos, value)) = best {
        debug!(position = %pos, value, "Minimax choice");
    }
    best.map(|(pos, _)| pos)
}

/// Recursive step. Each tried cell is cleared again before the next one.
fn search(board: &mut Board, ai: Player, to_move: Player, depth: i32) -> i32 {
    if let Some((_, winner)) = Line::first_completed(board) {
        return if winner == ai {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }
    if board.is_full() {
        return 0;
    }

    let maximizing = to_move == ai;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::valid_moves(board) {
        board.set(pos, Square::Occupied(to_move));
        let value = search(board, ai, to_move.opponent(), depth + 1);
        board.set(pos, Square::Empty);

        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}
