//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (always moves first).
    X,
    /// Player O (moves second; the AI's mark by default).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// `Board` is `Copy`: every snapshot handed out is an independent value, so
/// nothing outside [`GameState`](crate::GameState) can reach the engine's
/// own board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from three rows of squares.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, square) in row.iter().enumerate() {
                board.squares[r * 3 + c] = *square;
            }
        }
        board
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at `(row, col)`, or `None` when either is outside 0-2.
    pub fn get_rc(&self, row: usize, col: usize) -> Option<Square> {
        Position::from_row_col(row, col).map(|pos| self.get(pos))
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns the empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Counts the occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the board as three rows.
    pub fn rows(&self) -> [[Square; 3]; 3] {
        let s = &self.squares;
        [[s[0], s[1], s[2]], [s[3], s[4], s[5]], [s[6], s[7], s[8]]]
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based cell number.
    #[instrument(skip(self))]
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the terminal outcome, or `None` while the game is running.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(Outcome::Winner(*player)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
