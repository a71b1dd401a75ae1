//! Commonly used types and utilities for ease of import.

pub use crate::{
    Direction, GameState, LevelChange, Move, Player, PuzzleEngine, PuzzleError, Ring,
    RotationOutcome, RotationSource, SolverPlayer, MAX_LEVEL,
};

#[cfg(feature = "std")]
pub use crate::{cli::print_state, Session};
