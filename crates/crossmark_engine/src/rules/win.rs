//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight lines that win the game.
///
/// Declaration order is scan order: rows, then columns, then diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// All lines in scan order.
    pub const ALL: [Line; 8] = [
        Line::TopRow,
        Line::MiddleRow,
        Line::BottomRow,
        Line::LeftColumn,
        Line::CenterColumn,
        Line::RightColumn,
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// The three cells making up this line.
    pub fn positions(self) -> [Position; 3] {
        match self {
            Line::TopRow => [Position::TopLeft, Position::TopCenter, Position::TopRight],
            Line::MiddleRow => [
                Position::MiddleLeft,
                Position::Center,
                Position::MiddleRight,
            ],
            Line::BottomRow => [
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
            Line::LeftColumn => [
                Position::TopLeft,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
            Line::CenterColumn => [
                Position::TopCenter,
                Position::Center,
                Position::BottomCenter,
            ],
            Line::RightColumn => [
                Position::TopRight,
                Position::MiddleRight,
                Position::BottomRight,
            ],
            Line::Diagonal => [Position::TopLeft, Position::Center, Position::BottomRight],
            Line::AntiDiagonal => [Position::TopRight, Position::Center, Position::BottomLeft],
        }
    }

    /// First completed line in scan order, with its owner.
    ///
    /// Not instrumented: the search calls this at every node.
    pub fn first_completed(board: &Board) -> Option<(Line, Player)> {
        Line::ALL
            .iter()
            .find_map(|line| line.owner(board).map(|player| (*line, player)))
    }

    /// Returns the player owning all three cells, if any.
    pub fn owner(self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.positions();
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            sq.player()
        } else {
            None
        }
    }
}

/// Returns the first completed line in scan order along with its owner.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<(Line, Player)> {
    Line::first_completed(board)
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(_, player)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(winning_line(&board), Some((Line::TopRow, Player::X)));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomLeft, Square::Occupied(Player::O));
        assert_eq!(winning_line(&board), Some((Line::AntiDiagonal, Player::O)));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        // Injected position with a completed row and a completed column.
        let mut board = Board::new();
        for pos in [Position::BottomLeft, Position::BottomCenter, Position::BottomRight] {
            board.set(pos, Square::Occupied(Player::O));
        }
        for pos in [Position::TopLeft, Position::MiddleLeft] {
            board.set(pos, Square::Occupied(Player::X));
        }
        board.set(Position::BottomLeft, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::O));
        board.set(Position::MiddleRight, Square::Occupied(Player::O));
        // X owns the left column, O owns the right column; no complete row.
        assert_eq!(winning_line(&board), Some((Line::LeftColumn, Player::X)));

        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        // X now also owns the top row, which is scanned first.
        assert_eq!(winning_line(&board), Some((Line::TopRow, Player::X)));
    }
}
