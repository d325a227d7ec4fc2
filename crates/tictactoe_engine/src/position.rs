//! Named board positions and `(row, column)` conversion.

use super::types::{BOARD_SIZE, Board};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board, in row-major order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0
    TopLeft,
    /// Row 0, column 1
    TopCenter,
    /// Row 0, column 2
    TopRight,
    /// Row 1, column 0
    MiddleLeft,
    /// Row 1, column 1
    Center,
    /// Row 1, column 2
    MiddleRight,
    /// Row 2, column 0
    BottomLeft,
    /// Row 2, column 1
    BottomCenter,
    /// Row 2, column 2
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

    /// Creates a position from `(row, column)`, each in `0..3`.
    #[instrument]
    pub fn from_coords(row: usize, column: usize) -> Option<Self> {
        if row >= BOARD_SIZE || column >= BOARD_SIZE {
            return None;
        }
        Self::from_index(row * BOARD_SIZE + column)
    }

    /// Creates position from row-major board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row of this position.
    pub fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Column of this position.
    pub fn column(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Returns `(row, column)`.
    pub fn coords(self) -> (usize, usize) {
        (self.row(), self.column())
    }

    /// Parses `"row,column"`, a board index, or a label.
    ///
    /// Labels match case-insensitively, so `"center"` and `"Top-left"` both work.
    #[instrument]
    pub fn parse(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Some((row, column)) = s.split_once(',') {
            let row = row.trim().parse().ok()?;
            let column = column.trim().parse().ok()?;
            return Self::from_coords(row, column);
        }

        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let s_lower = s.to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == s_lower)
    }

    /// Filters positions by board state, returning only empty cells.
    #[instrument(skip(board))]
    pub fn empty_on(board: &Board) -> Vec<Position> {
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
