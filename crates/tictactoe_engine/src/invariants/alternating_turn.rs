//! Alternating turn invariant: marks alternate starting with the first mover.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// History starts with the first mover and never repeats a mark twice in a
/// row, and the mark to move next is the one after the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return game.current_turn() == game.first_mover();
        };

        if first.mark != game.first_mover() {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            game.first_mover()
        } else {
            game.first_mover().opponent()
        };

        game.current_turn() == expected_next
    }

    fn description() -> &'static str {
        "Marks alternate, starting with the first mover"
    }
}
