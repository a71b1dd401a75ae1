use crate::common::Direction;
use crate::game::{GameState, PuzzleEngine};
use crate::ring::Ring;

use super::{Move, Player};

/// Player that solves rings outermost first, turning each one the short way
/// round. Ties go forward.
#[derive(Debug, Default)]
pub struct SolverPlayer;

impl SolverPlayer {
    pub fn new() -> Self {
        Self
    }
}

/// Smallest positive forward shift that maps `ring` onto itself.
fn period(ring: &Ring) -> usize {
    let n = ring.len();
    (1..=n).find(|&k| ring.rotated_by(k) == *ring).unwrap_or(n)
}

/// Shortest single-direction path from `ring` back to `target`, as
/// `(direction, steps)`. `None` when `ring` is not a rotation of `target`.
pub fn shortest_path(ring: &Ring, target: &Ring) -> Option<(Direction, usize)> {
    let offset = ring.offset_from(target)?;
    let forward = (period(target) - offset) % period(target);
    if forward <= offset {
        Some((Direction::Forward, forward))
    } else {
        Some((Direction::Backward, offset))
    }
}

impl Player for SolverPlayer {
    fn select_move(&mut self, _engine: &PuzzleEngine, state: &GameState) -> Option<Move> {
        if state.is_complete() {
            return None;
        }
        let next = state
            .rings()
            .iter()
            .zip(state.target_pattern())
            .enumerate()
            .find_map(|(i, (ring, target))| match shortest_path(ring, target)? {
                (_, 0) => None,
                (direction, _) => Some(Move::new(i, direction)),
            });
        // Every ring was dealt unshuffled: completion is only registered by a
        // rotation, so knock the outer ring off and bring it back next turn.
        Some(next.unwrap_or(Move::new(0, Direction::Forward)))
    }
}
