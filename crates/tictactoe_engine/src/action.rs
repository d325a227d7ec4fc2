//! Moves and the errors raised when a move is rejected.
//!
//! A move is a domain event: it is validated against the engine before it
//! touches the board, and once applied it is recorded verbatim in history.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A mark placed at `(row, column)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Row of the target cell.
    pub row: usize,
    /// Column of the target cell.
    pub column: usize,
    /// The mark being placed.
    pub mark: Mark,
}

impl Move {
    /// Builds a move targeting a named position.
    pub fn at(position: Position, mark: Mark) -> Self {
        let (row, column) = position.coords();
        Self { row, column, mark }
    }

    /// Returns the target position, or `None` when off the board.
    pub fn position(&self) -> Option<Position> {
        Position::from_coords(self.row, self.column)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.mark, self.row, self.column)
    }
}

/// Why a move was refused even though it was the mover's turn.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InvalidMoveReason {
    /// The target cell already holds a mark.
    Occupied,
    /// Row or column lies outside `0..3`.
    OutOfBounds,
    /// The game already reached Won or Draw.
    GameOver,
}

/// Error that can occur when validating or applying a move.
///
/// Every variant except `InvariantViolation` is caller misuse and leaves
/// the engine untouched.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum MoveError {
    /// The mark does not belong to the player whose turn it is.
    #[display("Not {attempted}'s turn (expected {expected})")]
    #[from(ignore)]
    WrongTurn {
        /// Mark whose turn it is.
        expected: Mark,
        /// Mark that tried to move.
        attempted: Mark,
    },

    /// The move was refused for the given reason.
    #[display("Move not valid: {_0}")]
    InvalidMove(#[error(not(source))] InvalidMoveReason),

    /// A postcondition failed after applying a move.
    #[display("Invariant violation: {_0}")]
    #[from(ignore)]
    InvariantViolation(#[error(not(source))] String),
}

impl MoveError {
    /// Returns the reason for `InvalidMove` errors.
    pub fn reason(&self) -> Option<InvalidMoveReason> {
        match self {
            MoveError::InvalidMove(reason) => Some(*reason),
            _ => None,
        }
    }
}
