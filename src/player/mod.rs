//! Player trait and implementations
//!
//! A player looks at the current [`GameState`] and picks the next rotation.
//! - SolverPlayer: undoes each ring's shuffle along the shorter direction

use crate::common::{Direction, RotationOutcome};
use crate::game::{GameState, PuzzleEngine};

/// One single-step rotation of one ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub ring: usize,
    pub direction: Direction,
}

impl Move {
    pub fn new(ring: usize, direction: Direction) -> Self {
        Self { ring, direction }
    }
}

/// Interface implemented by different player types.
pub trait Player: Send {
    /// Choose the next rotation, or `None` when the player has nothing to do
    /// (e.g. the level is already solved).
    fn select_move(&mut self, engine: &PuzzleEngine, state: &GameState) -> Option<Move>;

    /// Inform the player of the outcome of its last move.
    fn handle_outcome(&mut self, _mv: Move, _outcome: RotationOutcome) {}
}

pub mod solver;
pub use solver::SolverPlayer;

#[cfg(feature = "std")]
pub mod node;
#[cfg(feature = "std")]
pub use node::{PlayerNode, RunSummary};
