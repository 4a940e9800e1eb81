//! Move selection for the computer opponent.

use super::{Difficulty, minimax};
use crate::{Board, Player, Position};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument, warn};

/// Chooses moves for the computer opponent.
///
/// The planner only ever reads a board snapshot; it owns its random number
/// generator so a seeded planner is fully reproducible.
#[derive(Debug, Clone)]
pub struct AiPlanner {
    mark: Player,
    rng: SmallRng,
}

impl AiPlanner {
    /// Creates a planner playing `O`, seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self {
            mark: Player::O,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a planner playing `O` with a fixed seed.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            mark: Player::O,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// The mark this planner plays.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// Picks a cell for the planner's mark on `board`.
    ///
    /// Callers must only ask while the game is running. A full board is a
    /// caller bug: debug builds panic, release builds log it and answer
    /// `None`.
    #[instrument(skip(self, board), fields(mark = ?self.mark))]
    pub fn choose_move(&mut self, board: &Board, difficulty: Difficulty) -> Option<Position> {
        let empty = board.empty_positions();
        debug_assert!(!empty.is_empty(), "AI asked to move on a full board");
        if empty.is_empty() {
            warn!("AI asked to move on a full board");
            return None;
        }

        let choice = match difficulty {
            Difficulty::Easy => self.random_move(&empty),
            Difficulty::Medium => {
                if self.rng.gen_bool(0.5) {
                    debug!("Medium: playing randomly");
                    self.random_move(&empty)
                } else {
                    debug!("Medium: searching");
                    minimax::best_move(board, self.mark)
                }
            }
            Difficulty::Hard => minimax::best_move(board, self.mark),
        };

        debug!(?choice, "AI chose move");
        choice
    }

    /// Same as [`choose_move`](Self::choose_move), answering in `(row, col)`.
    pub fn choose_move_rc(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
    ) -> Option<(usize, usize)> {
        self.choose_move(board, difficulty).map(Position::to_row_col)
    }

    fn random_move(&mut self, empty: &[Position]) -> Option<Position> {
        empty.choose(&mut self.rng).copied()
    }
}

impl Default for AiPlanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_easy_only_picks_empty_cells() {
        let x = Square::Occupied(Player::X);
        let o = Square::Occupied(Player::O);
        let e = Square::Empty;
        let board = Board::from_rows([[x, o, x], [e, o, x], [o, x, e]]);
        let mut planner = AiPlanner::with_seed(7);
        for _ in 0..50 {
            let pos = planner
                .choose_move(&board, Difficulty::Easy)
                .expect("board has empty cells");
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_easy_reaches_every_empty_cell() {
        let mut planner = AiPlanner::with_seed(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(planner.choose_move(&Board::new(), Difficulty::Easy));
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_same_seed_same_choices() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        let mut a = AiPlanner::with_seed(3);
        let mut b = AiPlanner::with_seed(3);
        for _ in 0..20 {
            assert_eq!(
                a.choose_move(&board, Difficulty::Medium),
                b.choose_move(&board, Difficulty::Medium)
            );
        }
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "full board"))]
    fn test_full_board_returns_none() {
        let mut planner = AiPlanner::with_seed(1);
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert_eq!(planner.choose_move(&board, Difficulty::Hard), None);
    }
}
