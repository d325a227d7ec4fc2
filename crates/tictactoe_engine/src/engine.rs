//! The game engine: one mutable aggregate per game.
//!
//! Every turn goes through [`GameEngine::attempt_move`], which validates the
//! move against the engine's preconditions, applies it, and evaluates the
//! board. Validation happens strictly before mutation, so a rejected move
//! leaves the engine exactly as it was.

use super::action::{InvalidMoveReason, Move, MoveError};
use super::config::EngineConfig;
use super::contracts::{Contract, MoveContract};
use super::id::GameId;
use super::rules;
use super::{Board, Cell, GameResult, Mark, Position};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe rule engine for a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) id: GameId,
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) first_mover: Mark,
    pub(crate) next_player: Mark,
    pub(crate) result: GameResult,
}

impl GameEngine {
    /// Creates an empty game where [`Mark::PlayerA`] moves first.
    #[instrument(skip(id), fields(game_id = %id))]
    pub fn new(id: GameId) -> Self {
        Self::with_first_mover(id, Mark::default())
    }

    /// Creates an empty game where `first_mover` moves first.
    #[instrument(skip(id), fields(game_id = %id))]
    pub fn with_first_mover(id: GameId, first_mover: Mark) -> Self {
        info!(first_mover = %first_mover, "Creating new game");
        Self {
            id,
            board: Board::new(),
            history: Vec::new(),
            first_mover,
            next_player: first_mover,
            result: GameResult::in_progress(),
        }
    }

    /// Creates an empty game from config, drawing a fresh id.
    #[instrument(skip(config))]
    pub fn from_config(config: &EngineConfig) -> Self {
        let id = GameId::random_with_len(*config.id_length());
        Self::with_first_mover(id, *config.first_mover())
    }

    /// Rebuilds a game by applying `moves` in order.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument(skip(id, moves), fields(game_id = %id, moves = moves.len()))]
    pub fn replay(id: GameId, first_mover: Mark, moves: &[Move]) -> Result<Self, MoveError> {
        let mut engine = Self::with_first_mover(id, first_mover);
        for action in moves {
            engine.attempt_move(action.row, action.column, action.mark)?;
        }
        Ok(engine)
    }

    /// Places `mark` at `(row, column)` and returns the resulting game state.
    ///
    /// # Errors
    ///
    /// - `InvalidMove(GameOver)` once the game is won or drawn
    /// - `WrongTurn` if `mark` is not the player to move
    /// - `InvalidMove(OutOfBounds)` if row or column is outside `0..3`
    /// - `InvalidMove(Occupied)` if the cell already holds a mark
    ///
    /// In debug builds, `InvariantViolation` is returned if a postcondition
    /// fails after the move was applied.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn attempt_move(
        &mut self,
        row: usize,
        column: usize,
        mark: Mark,
    ) -> Result<GameResult, MoveError> {
        let action = Move::new(row, column, mark);

        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }
        let position = action
            .position()
            .ok_or(MoveError::InvalidMove(InvalidMoveReason::OutOfBounds))?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(position, Cell::Occupied(mark));
        self.history.push(action);
        self.next_player = mark.opponent();
        self.result = rules::evaluate(&self.board, mark);

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        debug!(
            position = %position,
            status = %self.result.status(),
            moves = self.history.len(),
            "Move applied"
        );
        if self.result.is_terminal() {
            info!(result = %self.result, "Game over");
        }

        Ok(self.result)
    }

    /// Mark at `(row, column)`, or `None` if empty or off the board.
    pub fn current_cell(&self, row: usize, column: usize) -> Option<Mark> {
        self.board.cell(row, column).and_then(Cell::mark)
    }

    /// The mark expected on the next move.
    pub fn current_turn(&self) -> Mark {
        self.next_player
    }

    /// The mark that moved first.
    pub fn first_mover(&self) -> Mark {
        self.first_mover
    }

    /// Current status and winner.
    pub fn game_state(&self) -> GameResult {
        self.result
    }

    /// Returns true once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.result.is_terminal()
    }

    /// Applied moves in the order they were played.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Coordinates of every empty cell.
    pub fn empty_cells(&self) -> BTreeSet<(usize, usize)> {
        Position::empty_on(&self.board)
            .into_iter()
            .map(Position::coords)
            .collect()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game identifier.
    pub fn id(&self) -> &GameId {
        &self.id
    }
}

impl Default for GameEngine {
    /// Empty game with a freshly generated id.
    fn default() -> Self {
        Self::new(GameId::random())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameStatus;

    fn engine() -> GameEngine {
        GameEngine::new(GameId::from("test"))
    }

    #[test]
    fn test_new_game_defaults() {
        let game = engine();
        assert_eq!(game.current_turn(), Mark::PlayerA);
        assert_eq!(game.game_state(), GameResult::in_progress());
        assert!(game.history().is_empty());
        assert_eq!(game.empty_cells().len(), 9);
    }

    #[test]
    fn test_move_flips_turn_and_records_history() {
        let mut game = engine();
        let result = game.attempt_move(1, 1, Mark::PlayerA).expect("legal move");
        assert_eq!(result.status(), GameStatus::InProgress);
        assert_eq!(game.current_turn(), Mark::PlayerB);
        assert_eq!(game.current_cell(1, 1), Some(Mark::PlayerA));
        assert_eq!(game.history(), &[Move::new(1, 1, Mark::PlayerA)]);
        assert!(!game.empty_cells().contains(&(1, 1)));
    }

    #[test]
    fn test_rejected_move_leaves_state_unchanged() {
        let mut game = engine();
        game.attempt_move(0, 0, Mark::PlayerA).expect("legal move");
        let snapshot = game.clone();

        let err = game.attempt_move(0, 0, Mark::PlayerB).unwrap_err();
        assert_eq!(err, MoveError::InvalidMove(InvalidMoveReason::Occupied));
        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_game_over_checked_before_turn() {
        let moves = [
            Move::new(0, 0, Mark::PlayerA),
            Move::new(1, 0, Mark::PlayerB),
            Move::new(0, 1, Mark::PlayerA),
            Move::new(1, 1, Mark::PlayerB),
            Move::new(0, 2, Mark::PlayerA),
        ];
        let mut game = GameEngine::replay(GameId::from("t"), Mark::PlayerA, &moves).expect("valid");
        assert_eq!(game.game_state(), GameResult::won(Mark::PlayerA));

        // Both marks get the same answer once the game has ended.
        for mark in [Mark::PlayerA, Mark::PlayerB] {
            assert_eq!(
                game.attempt_move(2, 2, mark),
                Err(MoveError::InvalidMove(InvalidMoveReason::GameOver))
            );
        }
    }

    #[test]
    fn test_default_draws_fresh_ids() {
        let a = GameEngine::default();
        let b = GameEngine::default();
        assert_eq!(a.id().as_str().len(), GameId::DEFAULT_LENGTH);
        assert_ne!(a.id(), b.id());
    }
}
