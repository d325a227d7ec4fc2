//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board after a move. Rules are kept apart
//! from board storage so the engine and its contracts can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, line_completed};

use super::{Board, GameResult, Mark};
use tracing::{debug, instrument};

/// Determines the result after `last_mark` has just been placed.
///
/// A completed line wins for `last_mark`. The board-full check only runs
/// when no line was completed, so a winning final move is never a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, last_mark: Mark) -> GameResult {
    if line_completed(board) {
        debug!(winner = %last_mark, "Line completed");
        return GameResult::won(last_mark);
    }

    if is_full(board) {
        debug!("Board full without a completed line");
        return GameResult::draw();
    }

    GameResult::in_progress()
}
