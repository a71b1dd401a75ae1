#![cfg(feature = "std")]

//! Stateful driver for presentation layers: owns the live [`GameState`] and
//! the delayed move to the next level after a solve.

use log::{debug, info, warn};
use tokio::time::{sleep_until, Duration, Instant};

use crate::{
    common::{Direction, PuzzleError, RotationOutcome},
    config::AUTO_ADVANCE_DELAY,
    game::{GameState, LevelChange, PuzzleEngine},
    source::RotationSource,
};

/// Pending level advance, valid only for the state it was scheduled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAdvance {
    generation: u64,
    deadline: Instant,
}

impl ScheduledAdvance {
    /// State generation this advance belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// When the advance becomes due.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

/// A level that was solved during this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct LevelRecord {
    pub level: usize,
    pub moves: usize,
}

pub struct Session<S: RotationSource> {
    engine: PuzzleEngine,
    state: GameState,
    source: S,
    advance_delay: Duration,
    generation: u64,
    pending: Option<ScheduledAdvance>,
    solved: Vec<LevelRecord>,
    // Whether the dealt level already has an entry in `solved`.
    recorded: bool,
}

impl<S: RotationSource> Session<S> {
    /// Start a session at `level`.
    pub fn new(engine: PuzzleEngine, mut source: S, level: usize) -> Result<Self, PuzzleError> {
        let state = engine.initialize(level, &mut source)?;
        Ok(Self {
            engine,
            state,
            source,
            advance_delay: AUTO_ADVANCE_DELAY,
            generation: 0,
            pending: None,
            solved: Vec::new(),
            recorded: false,
        })
    }

    /// Override the delay between solving a level and starting the next one.
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }

    pub fn engine(&self) -> &PuzzleEngine {
        &self.engine
    }

    /// Live state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Counter bumped every time the live state is replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending_advance(&self) -> Option<ScheduledAdvance> {
        self.pending
    }

    /// Levels solved so far, in order. Each dealt level is recorded once,
    /// at its first solve; solving it again after turning a ring away does
    /// not add another entry.
    pub fn solved_levels(&self) -> &[LevelRecord] {
        &self.solved
    }

    /// `true` once the final level is solved.
    pub fn is_won(&self) -> bool {
        self.state.is_game_won(&self.engine)
    }

    fn replace_state(&mut self, state: GameState) {
        if let Some(stale) = self.pending.take() {
            debug!("cancelled level advance for generation {}", stale.generation);
        }
        self.generation += 1;
        self.state = state;
    }

    fn deal(&mut self, state: GameState) {
        self.replace_state(state);
        self.recorded = false;
    }

    /// Rotate one ring of the live state. Solving an intermediate level
    /// schedules the advance; any rotation cancels an earlier one.
    pub fn rotate(&mut self, ring: usize, direction: Direction) -> Result<RotationOutcome, PuzzleError> {
        let (next, outcome) = self.engine.rotate(&self.state, ring, direction)?;
        self.replace_state(next);
        if outcome.is_solved() {
            if !self.recorded {
                self.solved.push(LevelRecord {
                    level: self.state.level(),
                    moves: self.state.moves(),
                });
                self.recorded = true;
            }
            if self.state.is_final_level(&self.engine) {
                info!("final level solved in {} moves", self.state.moves());
            } else {
                let advance = ScheduledAdvance {
                    generation: self.generation,
                    deadline: Instant::now() + self.advance_delay,
                };
                info!(
                    "level {} solved in {} moves, next level in {:?}",
                    self.state.level(),
                    self.state.moves(),
                    self.advance_delay
                );
                self.pending = Some(advance);
            }
        }
        Ok(outcome)
    }

    /// Re-shuffle the current level.
    pub fn restart_level(&mut self) -> Result<(), PuzzleError> {
        let state = self.engine.restart_level(&self.state, &mut self.source)?;
        self.deal(state);
        Ok(())
    }

    /// Start over from level one.
    pub fn reset(&mut self) -> Result<LevelChange, PuzzleError> {
        let change = self.engine.reset_to_level_one(&self.state);
        let state = self.engine.initialize(change.level(), &mut self.source)?;
        self.solved.clear();
        self.deal(state);
        Ok(change)
    }

    /// Move to the next level immediately. On the final level this is a
    /// no-op and the current state is kept.
    pub fn advance_now(&mut self) -> Result<LevelChange, PuzzleError> {
        let change = self.engine.advance_level(&self.state);
        if let LevelChange::Advanced { to, .. } = change {
            let state = self.engine.initialize(to, &mut self.source)?;
            self.deal(state);
        }
        Ok(change)
    }

    /// Apply `advance` if it still belongs to the live state. A stale advance
    /// is dropped and `Ok(None)` returned.
    pub fn fire_advance(&mut self, advance: ScheduledAdvance) -> Result<Option<LevelChange>, PuzzleError> {
        if self.pending != Some(advance) {
            warn!(
                "dropping stale level advance (generation {}, live generation {})",
                advance.generation, self.generation
            );
            return Ok(None);
        }
        self.pending = None;
        self.advance_now().map(Some)
    }

    /// Wait for the pending advance and apply it. Never resolves while
    /// nothing is scheduled, so it can sit in a `tokio::select!` next to
    /// input handling. Dropping the future leaves the advance pending.
    pub async fn advance_due(&mut self) -> Result<Option<LevelChange>, PuzzleError> {
        let advance = match self.pending {
            Some(advance) => advance,
            None => return std::future::pending().await,
        };
        sleep_until(advance.deadline).await;
        self.fire_advance(advance)
    }
}
