//! Status invariant: the recorded result agrees with the board.

use super::super::{GameEngine, GameStatus, rules};
use super::Invariant;

/// Invariant: Status and winner match what the board shows.
///
/// - `Won` iff a line is complete, owned by the winner, who made the last move
/// - `Draw` iff the board is full with no complete line
/// - a winner is recorded only for `Won`
pub struct StatusConsistentInvariant;

impl Invariant<GameEngine> for StatusConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        let board = game.board();
        let result = game.game_state();
        let last_mark = game.history().last().map(|m| m.mark);

        match result.status() {
            GameStatus::Won => {
                let line_owner = rules::check_winner(board);
                line_owner.is_some() && result.winner() == line_owner && line_owner == last_mark
            }
            GameStatus::Draw => rules::is_draw(board) && result.winner().is_none(),
            GameStatus::InProgress => {
                !rules::line_completed(board)
                    && !rules::is_full(board)
                    && result.winner().is_none()
            }
        }
    }

    fn description() -> &'static str {
        "Status and winner agree with the board"
    }
}
