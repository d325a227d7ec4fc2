//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, geometry};
use tracing::instrument;

/// Checks whether any row, column or diagonal is filled by one mark.
#[instrument]
pub fn line_completed(board: &Board) -> bool {
    let grid = board.grid();
    geometry::any_row_filled(grid)
        || geometry::any_row_filled(&geometry::transpose(grid))
        || geometry::any_diagonal_filled(grid)
}

/// Returns the mark owning a filled line, if there is one.
///
/// The engine credits the player who just moved instead; this is for
/// inspecting arbitrary boards.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    let grid = board.grid();
    let transposed = geometry::transpose(grid);
    grid.iter()
        .chain(transposed.iter())
        .copied()
        .chain([geometry::main_diagonal(grid), geometry::anti_diagonal(grid)])
        .find(geometry::row_is_uniform_and_full)
        .and_then(|line| line[0].mark())
}
