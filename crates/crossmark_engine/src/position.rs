//! Named board cells and coordinate conversion.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the tic-tac-toe board, in row-major order.
///
/// Positions are the engine's internal currency; callers that think in
/// `(row, col)` convert through [`Position::from_row_col`], which is also
/// where out-of-range coordinates are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (row 0, col 0)
    TopLeft,
    /// Top-center (row 0, col 1)
    TopCenter,
    /// Top-right (row 0, col 2)
    TopRight,
    /// Middle-left (row 1, col 0)
    MiddleLeft,
    /// Center (row 1, col 1)
    Center,
    /// Middle-right (row 1, col 2)
    MiddleRight,
    /// Bottom-left (row 2, col 0)
    BottomLeft,
    /// Bottom-center (row 2, col 1)
    BottomCenter,
    /// Bottom-right (row 2, col 2)
    BottomRight,
}

impl Position {
    /// All 9 positions.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Creates a position from zero-based row and column.
    ///
    /// Returns `None` if either coordinate is outside 0-2.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row > 2 || col > 2 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// Zero-based row of this position.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column of this position.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Returns `(row, col)`.
    pub fn to_row_col(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parses a cell typed by a person.
    ///
    /// Accepts a cell number as shown by [`Board::display`] (`1`-`9`), a
    /// zero-based `row col` pair (`"1 2"` or `"1,2"`), or a label
    /// (case-insensitive).
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();

        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        if let [row, col] = parts.as_slice()
            && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
        {
            return Self::from_row_col(row, col);
        }

        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        if s.is_empty() {
            return None;
        }
        let s_lower = s.to_lowercase();
        <Position as strum::IntoEnumIterator>::iter().find(|pos| {
            let label = pos.label().to_lowercase();
            label == s_lower || label.replace('-', " ") == s_lower
        })
    }

    /// Filters positions by board state - returns only empty squares, in
    /// row-major order.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
