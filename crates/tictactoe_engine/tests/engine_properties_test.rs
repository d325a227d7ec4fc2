//! Property tests over arbitrary move sequences.

use proptest::prelude::*;
use tictactoe_engine::{
    EngineInvariants, GameEngine, GameId, GameStatus, InvalidMoveReason, InvariantSet, Mark,
    MoveError,
};

/// Plays cells in the given order, always with the mark whose turn it is,
/// until the game ends or the order runs out.
fn play_order(first_mover: Mark, order: &[usize]) -> GameEngine {
    let mut game = GameEngine::with_first_mover(GameId::from("prop"), first_mover);
    for &index in order {
        if game.is_terminal() {
            break;
        }
        let mark = game.current_turn();
        game.attempt_move(index / 3, index % 3, mark).expect("empty cell on live board");
    }
    game
}

fn first_mover() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::PlayerA), Just(Mark::PlayerB)]
}

fn cell_order() -> impl Strategy<Value = Vec<usize>> {
    Just((0..9).collect::<Vec<usize>>()).prop_shuffle()
}

proptest! {
    #[test]
    fn marks_alternate(first in first_mover(), order in cell_order()) {
        let game = play_order(first, &order);
        prop_assert_eq!(game.history()[0].mark, first);
        for pair in game.history().windows(2) {
            prop_assert_ne!(pair[0].mark, pair[1].mark);
        }
    }

    #[test]
    fn history_tracks_occupied_cells(
        first in first_mover(),
        order in cell_order(),
        stop in 0usize..=9,
    ) {
        let game = play_order(first, &order[..stop]);
        prop_assert_eq!(game.history().len(), game.board().occupied_count());
        prop_assert_eq!(game.empty_cells().len(), 9 - game.history().len());
        prop_assert!(EngineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn every_full_order_ends_the_game(first in first_mover(), order in cell_order()) {
        let game = play_order(first, &order);
        let result = game.game_state();
        prop_assert!(result.is_terminal());
        match result.status() {
            GameStatus::Won => {
                prop_assert_eq!(result.winner(), game.history().last().map(|m| m.mark));
            }
            GameStatus::Draw => {
                prop_assert_eq!(result.winner(), None);
                prop_assert_eq!(game.history().len(), 9);
            }
            GameStatus::InProgress => prop_assert!(false, "game should have ended"),
        }
    }

    #[test]
    fn terminal_games_reject_everything(
        first in first_mover(),
        order in cell_order(),
        row in 0usize..5,
        column in 0usize..5,
        mark in first_mover(),
    ) {
        let mut game = play_order(first, &order);
        let snapshot = game.clone();
        prop_assert_eq!(
            game.attempt_move(row, column, mark),
            Err(MoveError::InvalidMove(InvalidMoveReason::GameOver))
        );
        prop_assert_eq!(game, snapshot);
    }

    #[test]
    fn rejected_moves_never_mutate(
        order in cell_order(),
        stop in 1usize..=4,
        row in 0usize..5,
        column in 0usize..5,
        mark in first_mover(),
    ) {
        let mut game = play_order(Mark::PlayerA, &order[..stop]);
        let snapshot = game.clone();
        if game.attempt_move(row, column, mark).is_err() {
            prop_assert_eq!(game, snapshot);
        }
    }
}
