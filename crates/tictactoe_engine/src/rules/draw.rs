//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::line_completed;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no completed line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !line_completed(board)
}
