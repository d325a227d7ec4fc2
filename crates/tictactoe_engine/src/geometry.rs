//! Row, column and diagonal extraction over a 3x3 grid.
//!
//! These are total functions over a grid snapshot. Columns are handled by
//! transposing and reusing the row checks.

use super::types::{BOARD_SIZE, Cell, Grid};

/// Swaps rows and columns.
pub fn transpose(grid: &Grid) -> Grid {
    let mut out = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (r, row) in grid.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            out[c][r] = *cell;
        }
    }
    out
}

/// Cells at (0,0), (1,1), (2,2).
pub fn main_diagonal(grid: &Grid) -> [Cell; BOARD_SIZE] {
    std::array::from_fn(|i| grid[i][i])
}

/// Cells at (0,2), (1,1), (2,0).
pub fn anti_diagonal(grid: &Grid) -> [Cell; BOARD_SIZE] {
    std::array::from_fn(|i| grid[i][BOARD_SIZE - 1 - i])
}

/// True when every cell is occupied by the same mark.
pub fn row_is_uniform_and_full(row: &[Cell; BOARD_SIZE]) -> bool {
    match row[0] {
        Cell::Empty => false,
        first => row.iter().all(|cell| *cell == first),
    }
}

/// True when any row of `grid` is filled.
///
/// Pass a transposed grid to check columns.
pub fn any_row_filled(grid: &Grid) -> bool {
    grid.iter().any(row_is_uniform_and_full)
}

/// True when either diagonal is filled.
pub fn any_diagonal_filled(grid: &Grid) -> bool {
    row_is_uniform_and_full(&main_diagonal(grid))
        || row_is_uniform_and_full(&anti_diagonal(grid))
}
