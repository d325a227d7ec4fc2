//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// A 3x3 snapshot of cells, indexed `[row][column]`.
pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// A player's symbol on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Mark {
    /// First player by default, shown as `X`.
    #[default]
    #[display("X")]
    PlayerA,
    /// Second player by default, shown as `O`.
    #[display("O")]
    PlayerB,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::PlayerA => Mark::PlayerB,
            Mark::PlayerB => Mark::PlayerA,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true if a mark occupies the cell.
    pub fn is_occupied(self) -> bool {
        matches!(self, Cell::Occupied(_))
    }
}

/// 3x3 tic-tac-toe board.
///
/// Only the engine writes to a board; everything outside the crate sees it
/// through shared borrows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.column()]
    }

    /// Gets the cell at `(row, column)`, or `None` when off the board.
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns the grid as rows.
    pub fn grid(&self) -> &Grid {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.is_occupied())
            .count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied_count() == BOARD_SIZE * BOARD_SIZE
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.column()] = cell;
    }
}

/// Current status of the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Board filled with no completed line.
    Draw,
    /// A player completed a line.
    Won,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Status and winner after a move, or at any point in between.
///
/// `winner` is set only when `status` is [`GameStatus::Won`]. Deserialized
/// values are checked against the same rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawGameResult")]
pub struct GameResult {
    status: GameStatus,
    winner: Option<Mark>,
}

/// Unchecked wire form of [`GameResult`].
#[derive(Deserialize)]
struct RawGameResult {
    status: GameStatus,
    #[serde(default)]
    winner: Option<Mark>,
}

impl TryFrom<RawGameResult> for GameResult {
    type Error = String;

    fn try_from(raw: RawGameResult) -> Result<Self, Self::Error> {
        match (raw.status, raw.winner) {
            (GameStatus::Won, Some(mark)) => Ok(Self::won(mark)),
            (GameStatus::Draw, None) => Ok(Self::draw()),
            (GameStatus::InProgress, None) => Ok(Self::in_progress()),
            (GameStatus::Won, None) => Err("Won result must name a winner".to_string()),
            (status, Some(mark)) => Err(format!("{} result cannot have winner {}", status, mark)),
        }
    }
}

impl GameResult {
    /// Result of a game that is still being played.
    pub fn in_progress() -> Self {
        Self::default()
    }

    /// Result of a drawn game.
    pub fn draw() -> Self {
        Self {
            status: GameStatus::Draw,
            winner: None,
        }
    }

    /// Result of a game won by `mark`.
    pub fn won(mark: Mark) -> Self {
        Self {
            status: GameStatus::Won,
            winner: Some(mark),
        }
    }

    /// Returns the status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, present only for won games.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner {
            Some(mark) => write!(f, "Player {} wins", mark),
            None => write!(f, "{}", self.status),
        }
    }
}
