//! Tic-tac-toe rule engine.
//!
//! One [`GameEngine`] holds one game. Callers submit a move per turn with
//! [`GameEngine::attempt_move`]; the engine validates it, applies it, and
//! reports the resulting [`GameResult`].
//!
//! # Architecture
//!
//! - **Engine**: the game aggregate and its move cycle
//! - **Geometry**: row/column/diagonal extraction over a 3x3 grid
//! - **Rules**: win and draw detection built on the geometry helpers
//! - **Contracts**: move preconditions, plus postconditions in debug builds
//! - **Invariants**: properties every reachable game satisfies
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameId, GameStatus, Mark};
//!
//! let mut game = GameEngine::new(GameId::from("example"));
//! game.attempt_move(0, 0, Mark::PlayerA)?;
//! game.attempt_move(1, 1, Mark::PlayerB)?;
//! game.attempt_move(0, 1, Mark::PlayerA)?;
//! game.attempt_move(1, 0, Mark::PlayerB)?;
//! let result = game.attempt_move(0, 2, Mark::PlayerA)?;
//!
//! assert_eq!(result.status(), GameStatus::Won);
//! assert_eq!(result.winner(), Some(Mark::PlayerA));
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod contracts;
mod engine;
mod id;
mod invariants;
mod position;
mod render;
mod types;

pub mod geometry;
pub mod rules;

// Crate-level exports - Domain types
pub use position::Position;
pub use types::{BOARD_SIZE, Board, Cell, GameResult, GameStatus, Grid, Mark};

// Crate-level exports - Moves and errors
pub use action::{InvalidMoveReason, Move, MoveError};

// Crate-level exports - Engine
pub use engine::GameEngine;

// Crate-level exports - Contracts
pub use contracts::{
    Contract, GameInPlay, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty, WithinBounds,
};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingTurnInvariant, EngineInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant, StatusConsistentInvariant,
};

// Crate-level exports - Collaborators
pub use config::{ConfigError, EngineConfig};
pub use id::GameId;
pub use render::BoardView;
