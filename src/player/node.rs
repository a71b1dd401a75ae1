#![cfg(feature = "std")]

use log::{debug, info};

use crate::{
    common::RotationOutcome,
    game::GameState,
    session::{LevelRecord, Session},
    source::RotationSource,
};

use super::{Move, Player};

/// Hard cap on rotations per level, so a player that never converges
/// cannot spin forever.
pub const MAX_MOVES_PER_LEVEL: usize = 1_000;

/// Outcome of driving a player through every level.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RunSummary {
    pub levels: Vec<LevelRecord>,
    pub total_moves: usize,
    pub won: bool,
}

/// Orchestrates a [`Player`] against a [`Session`], skipping the advance
/// delay between levels.
pub struct PlayerNode<S: RotationSource> {
    player: Box<dyn Player>,
    session: Session<S>,
}

impl<S: RotationSource> PlayerNode<S> {
    pub fn new(player: Box<dyn Player>, session: Session<S>) -> Self {
        Self { player, session }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Play until the final level is solved.
    pub fn run(&mut self) -> anyhow::Result<RunSummary> {
        self.run_with(|_, _, _| {})
    }

    /// Like [`run`](Self::run), calling `on_move` after every rotation.
    pub fn run_with<F>(&mut self, mut on_move: F) -> anyhow::Result<RunSummary>
    where
        F: FnMut(&GameState, Move, RotationOutcome),
    {
        loop {
            let level = self.session.state().level();
            let mut moves = 0;
            while !self.session.state().is_complete() {
                if moves >= MAX_MOVES_PER_LEVEL {
                    return Err(anyhow::anyhow!(
                        "Player did not solve level {} within {} moves",
                        level,
                        MAX_MOVES_PER_LEVEL
                    ));
                }
                let mv = self
                    .player
                    .select_move(self.session.engine(), self.session.state())
                    .ok_or_else(|| anyhow::anyhow!("Player gave up on level {}", level))?;
                let outcome = self.session.rotate(mv.ring, mv.direction)?;
                debug!("level {} move {:?} -> {:?}", level, mv, outcome);
                self.player.handle_outcome(mv, outcome);
                on_move(self.session.state(), mv, outcome);
                moves += 1;
            }
            if self.session.is_won() {
                break;
            }
            self.session.advance_now()?;
        }
        let levels = self.session.solved_levels().to_vec();
        let total_moves = levels.iter().map(|l| l.moves).sum();
        info!("run finished: {} levels, {} moves", levels.len(), total_moves);
        Ok(RunSummary {
            levels,
            total_moves,
            won: self.session.is_won(),
        })
    }
}
