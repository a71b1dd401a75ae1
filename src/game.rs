use alloc::vec::Vec;
use log::{debug, info};

use crate::{
    common::{Direction, PuzzleError, RotationOutcome},
    config::{RingSpec, RING_SPECS},
    ring::Ring,
    source::RotationSource,
};

/// Snapshot of one level in play.
///
/// Only the engine builds these, and every constructor path goes through
/// [`GameState::assemble`], which enforces the ring/target/level agreement.
/// Deserialized states are routed through it as well.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGameState")
)]
pub struct GameState {
    rings: Vec<Ring>,
    target_pattern: Vec<Ring>,
    level: usize,
    is_complete: bool,
    moves: usize,
}

/// Wire shape of [`GameState`] before its invariants are checked.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawGameState {
    rings: Vec<Ring>,
    target_pattern: Vec<Ring>,
    level: usize,
    is_complete: bool,
    moves: usize,
}

#[cfg(feature = "std")]
impl TryFrom<RawGameState> for GameState {
    type Error = PuzzleError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        GameState::assemble(
            raw.rings,
            raw.target_pattern,
            raw.level,
            raw.is_complete,
            raw.moves,
        )
    }
}

impl GameState {
    fn assemble(
        rings: Vec<Ring>,
        target_pattern: Vec<Ring>,
        level: usize,
        is_complete: bool,
        moves: usize,
    ) -> Result<Self, PuzzleError> {
        if rings.len() != level || target_pattern.len() != level {
            return Err(PuzzleError::CorruptState("ring count does not match level"));
        }
        if rings.iter().zip(&target_pattern).any(|(r, t)| r.len() != t.len()) {
            return Err(PuzzleError::CorruptState("ring length differs from its target"));
        }
        Ok(Self {
            rings,
            target_pattern,
            level,
            is_complete,
            moves,
        })
    }

    /// Current ring sequences, outermost first.
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Canonical sequences the rings must be rotated into.
    pub fn target_pattern(&self) -> &[Ring] {
        &self.target_pattern
    }

    /// Number of active rings.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Rotations made since this level was initialized.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// `true` when every ring matches its target.
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Whether this state plays every ring of `engine`'s table.
    pub fn is_final_level(&self, engine: &PuzzleEngine) -> bool {
        self.level == engine.max_level()
    }

    /// Terminal success: the final level is solved.
    pub fn is_game_won(&self, engine: &PuzzleEngine) -> bool {
        self.is_complete && self.is_final_level(engine)
    }

    /// Re-check every structural invariant against `engine`'s ring table.
    /// Used on states that did not come straight from the engine.
    pub fn validate(&self, engine: &PuzzleEngine) -> Result<(), PuzzleError> {
        engine.check_level(self.level)?;
        if self.rings.len() != self.level || self.target_pattern.len() != self.level {
            return Err(PuzzleError::CorruptState("ring count does not match level"));
        }
        for (i, (ring, target)) in self.rings.iter().zip(&self.target_pattern).enumerate() {
            let spec = &engine.specs[i];
            if *target != Ring::canonical(spec.segments(), spec.palette_size()) {
                return Err(PuzzleError::CorruptState("target is not the canonical sequence"));
            }
            if ring.offset_from(target).is_none() {
                return Err(PuzzleError::CorruptState("ring is not a rotation of its target"));
            }
        }
        // A fresh level is never flagged complete, even if every ring was
        // drawn unshuffled; completion is only detected after a rotation.
        let solved = is_solved(&self.rings, &self.target_pattern);
        if self.is_complete != solved && !(solved && self.moves == 0) {
            return Err(PuzzleError::CorruptState("completion flag is stale"));
        }
        Ok(())
    }
}

/// Requested level change, to be followed by [`PuzzleEngine::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelChange {
    /// Moved on to the next level.
    Advanced { from: usize, to: usize },
    /// Already on the last level; nothing changed.
    AlreadyFinal { level: usize },
    /// Back to level one.
    Reset { from: usize },
}

impl LevelChange {
    /// Level the caller should initialize next.
    pub fn level(&self) -> usize {
        match *self {
            LevelChange::Advanced { to, .. } => to,
            LevelChange::AlreadyFinal { level } => level,
            LevelChange::Reset { .. } => 1,
        }
    }
}

/// `true` iff both slices hold the same number of rings and every ring
/// equals its target segment for segment.
pub fn is_solved(rings: &[Ring], target_pattern: &[Ring]) -> bool {
    rings.len() == target_pattern.len()
        && rings.iter().zip(target_pattern).all(|(ring, target)| ring == target)
}

/// Puzzle rules over a ring table: generation, rotation and level flow.
#[derive(Debug, Clone)]
pub struct PuzzleEngine {
    specs: Vec<RingSpec>,
}

impl PuzzleEngine {
    /// Engine over the reference four-ring table.
    pub fn new() -> Self {
        Self {
            specs: RING_SPECS.to_vec(),
        }
    }

    /// Engine over a custom ring table, outermost ring first.
    pub fn with_specs(specs: Vec<RingSpec>) -> Result<Self, PuzzleError> {
        if specs.is_empty() {
            return Err(PuzzleError::InvalidConfig("no rings"));
        }
        for spec in specs.iter() {
            if spec.segments() == 0 {
                return Err(PuzzleError::InvalidConfig("ring without segments"));
            }
            if spec.palette_size() == 0 {
                return Err(PuzzleError::InvalidConfig("empty palette"));
            }
            if spec.palette_size() > usize::from(u8::MAX) + 1 {
                return Err(PuzzleError::InvalidConfig("palette larger than 256 colors"));
            }
        }
        if specs.windows(2).any(|w| w[0].segments() >= w[1].segments()) {
            return Err(PuzzleError::InvalidConfig("segment counts must strictly increase"));
        }
        Ok(Self { specs })
    }

    /// Highest playable level (the number of rings in the table).
    pub fn max_level(&self) -> usize {
        self.specs.len()
    }

    /// Ring table in use.
    pub fn specs(&self) -> &[RingSpec] {
        &self.specs
    }

    fn check_level(&self, level: usize) -> Result<(), PuzzleError> {
        if level == 0 || level > self.max_level() {
            return Err(PuzzleError::InvalidLevel {
                level,
                max_level: self.max_level(),
            });
        }
        Ok(())
    }

    /// Build `level` rings: the canonical target for each, and a copy of it
    /// rotated forward by a count drawn from `source`.
    ///
    /// Returns `(rings, target_pattern)`.
    pub fn generate<S: RotationSource + ?Sized>(
        &self,
        level: usize,
        source: &mut S,
    ) -> Result<(Vec<Ring>, Vec<Ring>), PuzzleError> {
        self.check_level(level)?;
        let mut rings = Vec::with_capacity(level);
        let mut target_pattern = Vec::with_capacity(level);
        for (i, spec) in self.specs[..level].iter().enumerate() {
            let target = Ring::canonical(spec.segments(), spec.palette_size());
            let steps = source.next_rotation(spec.segments()) % spec.segments();
            debug!("ring {} shuffled by {} of {} segments", i, steps, spec.segments());
            rings.push(target.rotated_by(steps));
            target_pattern.push(target);
        }
        Ok((rings, target_pattern))
    }

    /// Fresh state for `level`: newly shuffled rings, no moves, not complete.
    pub fn initialize<S: RotationSource + ?Sized>(
        &self,
        level: usize,
        source: &mut S,
    ) -> Result<GameState, PuzzleError> {
        let (rings, target_pattern) = self.generate(level, source)?;
        info!("level {} initialized with {} rings", level, rings.len());
        GameState::assemble(rings, target_pattern, level, false, 0)
    }

    /// Re-shuffle the current level from scratch.
    pub fn restart_level<S: RotationSource + ?Sized>(
        &self,
        state: &GameState,
        source: &mut S,
    ) -> Result<GameState, PuzzleError> {
        self.initialize(state.level, source)
    }

    /// Rotate ring `ring` one step in `direction`.
    ///
    /// Every rotation counts as a move. Completion is recomputed over all
    /// rings, not only the one touched.
    pub fn rotate(
        &self,
        state: &GameState,
        ring: usize,
        direction: Direction,
    ) -> Result<(GameState, RotationOutcome), PuzzleError> {
        if ring >= state.level {
            return Err(PuzzleError::InvalidRing {
                ring,
                level: state.level,
            });
        }
        let mut rings = state.rings.clone();
        rings[ring] = rings[ring].rotated(direction);
        let is_complete = is_solved(&rings, &state.target_pattern);
        let moves = state.moves + 1;
        debug!(
            "ring {} rotated {:?}, move {}, complete: {}",
            ring, direction, moves, is_complete
        );
        let next = GameState::assemble(
            rings,
            state.target_pattern.clone(),
            state.level,
            is_complete,
            moves,
        )?;
        let outcome = if is_complete {
            RotationOutcome::Solved { ring }
        } else {
            RotationOutcome::Step { ring }
        };
        Ok((next, outcome))
    }

    /// Next level number, or no change when already on the last level.
    pub fn advance_level(&self, state: &GameState) -> LevelChange {
        if state.level >= self.max_level() {
            info!("already at final level {}", state.level);
            LevelChange::AlreadyFinal { level: state.level }
        } else {
            info!("advancing from level {} to {}", state.level, state.level + 1);
            LevelChange::Advanced {
                from: state.level,
                to: state.level + 1,
            }
        }
    }

    /// Go back to level one ("play again").
    pub fn reset_to_level_one(&self, state: &GameState) -> LevelChange {
        info!("resetting from level {} to level 1", state.level);
        LevelChange::Reset { from: state.level }
    }
}

impl Default for PuzzleEngine {
    fn default() -> Self {
        Self::new()
    }
}
