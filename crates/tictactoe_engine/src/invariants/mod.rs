//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every applied
//! move. They are testable independently and back the move postcondition.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !<$inv as Invariant<S>>::holds(state) {
                        violations.push(InvariantViolation::new(
                            <$inv as Invariant<S>>::description(),
                        ));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;
pub mod status_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use status_consistent::StatusConsistentInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    StatusConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameEngine, GameId, Mark, Move, Position};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        let game = GameEngine::new(GameId::from("inv"));
        assert!(EngineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let moves = [
            Move::new(0, 0, Mark::PlayerA),
            Move::new(1, 1, Mark::PlayerB),
            Move::new(0, 2, Mark::PlayerA),
        ];
        let game = GameEngine::replay(GameId::from("inv"), Mark::PlayerA, &moves).expect("valid");
        assert!(EngineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = GameEngine::new(GameId::from("inv"));
        game.attempt_move(1, 1, Mark::PlayerA).expect("legal move");

        // A cell filled behind the engine's back breaks replay and history length.
        game.board.set(Position::TopLeft, Cell::Occupied(Mark::PlayerB));

        let violations = EngineInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(violations.contains(&InvariantViolation::new(
            <MonotonicBoardInvariant as Invariant<GameEngine>>::description()
        )));
        assert!(violations.contains(&InvariantViolation::new(
            <HistoryConsistentInvariant as Invariant<GameEngine>>::description()
        )));
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameEngine::new(GameId::from("inv"));
        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
