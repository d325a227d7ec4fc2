//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{InvalidMoveReason, Move, MoveError};
use super::engine::GameEngine;
use super::invariants::{EngineInvariants, InvariantSet};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game has not reached Won or Draw.
pub struct GameInPlay;

impl GameInPlay {
    /// Rejects every move once the game is over.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameEngine) -> Result<(), MoveError> {
        if game.is_terminal() {
            Err(MoveError::InvalidMove(InvalidMoveReason::GameOver))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the mover's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects marks other than the player to move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameEngine) -> Result<(), MoveError> {
        if mov.mark != game.current_turn() {
            Err(MoveError::WrongTurn {
                expected: game.current_turn(),
                attempted: mov.mark,
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: Row and column lie on the board.
pub struct WithinBounds;

impl WithinBounds {
    /// Rejects coordinates outside `0..3`.
    #[instrument(skip(_game))]
    pub fn check(mov: &Move, _game: &GameEngine) -> Result<(), MoveError> {
        match mov.position() {
            Some(_) => Ok(()),
            None => Err(MoveError::InvalidMove(InvalidMoveReason::OutOfBounds)),
        }
    }
}

/// Precondition: The target cell must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects occupied cells.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameEngine) -> Result<(), MoveError> {
        let pos = mov
            .position()
            .ok_or(MoveError::InvalidMove(InvalidMoveReason::OutOfBounds))?;
        if !game.board().is_empty(pos) {
            Err(MoveError::InvalidMove(InvalidMoveReason::Occupied))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for a legal move.
///
/// Checks run in a fixed order so a finished game always reports
/// `game_over`, whichever mark or cell the caller names.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameEngine) -> Result<(), MoveError> {
        GameInPlay::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        WithinBounds::check(mov, game)?;
        SquareIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game still in progress
/// - Must be mover's turn
/// - Target on the board and empty
///
/// Postconditions:
/// - Exactly one move appended
/// - Every engine invariant holds
pub struct MoveContract;

impl Contract<GameEngine, Move> for MoveContract {
    fn pre(game: &GameEngine, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "History did not grow by one move"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: exactly one move must be appended".to_string(),
            ));
        }

        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameId, Mark, Position};

    fn fresh() -> GameEngine {
        GameEngine::new(GameId::from("contracts"))
    }

    #[test]
    fn test_precondition_empty_square() {
        let game = fresh();
        let action = Move::new(1, 1, Mark::PlayerA);
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = fresh();
        game.attempt_move(1, 1, Mark::PlayerA).expect("legal move");

        let action = Move::new(1, 1, Mark::PlayerB);
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::InvalidMove(InvalidMoveReason::Occupied))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = fresh();
        let action = Move::new(1, 1, Mark::PlayerB);
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongTurn {
                expected: Mark::PlayerA,
                attempted: Mark::PlayerB
            })
        ));
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let game = fresh();
        for (row, column) in [(3, 0), (0, 3), (7, 7)] {
            let action = Move::new(row, column, Mark::PlayerA);
            assert_eq!(
                MoveContract::pre(&game, &action),
                Err(MoveError::InvalidMove(InvalidMoveReason::OutOfBounds))
            );
        }
    }

    #[test]
    fn test_wrong_turn_reported_before_bounds() {
        let game = fresh();
        let action = Move::new(9, 9, Mark::PlayerB);
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongTurn { .. })
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = fresh();
        let mut after = before.clone();
        after.attempt_move(1, 1, Mark::PlayerA).expect("legal move");
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = fresh();
        let mut after = before.clone();
        after.attempt_move(1, 1, Mark::PlayerA).expect("legal move");

        after.board.set(Position::TopLeft, Cell::Occupied(Mark::PlayerB));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_requires_one_new_move() {
        let before = fresh();
        assert!(MoveContract::post(&before, &before).is_err());
    }
}
