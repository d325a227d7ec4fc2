//! Monotonic board invariant: cells never change once set.

use super::super::{Board, Cell, GameEngine};
use super::Invariant;

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the history onto an empty board must only ever fill empty
/// cells, and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(game: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            let Some(pos) = mov.position() else {
                return false;
            };

            if !reconstructed.is_empty(pos) {
                return false;
            }

            reconstructed.set(pos, Cell::Occupied(mov.mark));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameId, Mark, Move, Position};

    #[test]
    fn test_empty_game_holds() {
        let game = GameEngine::new(GameId::from("mono"));
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let moves = [
            Move::new(0, 0, Mark::PlayerA),
            Move::new(1, 1, Mark::PlayerB),
            Move::new(0, 2, Mark::PlayerA),
        ];
        let game = GameEngine::replay(GameId::from("mono"), Mark::PlayerA, &moves).expect("valid");
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut game = GameEngine::new(GameId::from("mono"));
        game.attempt_move(1, 1, Mark::PlayerA).expect("legal move");

        game.board.set(Position::Center, Cell::Occupied(Mark::PlayerB));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_history_entry_violates() {
        let mut game = GameEngine::new(GameId::from("mono"));
        game.attempt_move(1, 1, Mark::PlayerA).expect("legal move");

        game.history.push(Move::new(1, 1, Mark::PlayerB));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
