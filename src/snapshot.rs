#![cfg(feature = "std")]

//! Binary save/restore of a [`GameState`]. Decoded states are validated
//! against the engine's ring table before they are handed out.

use anyhow::Context;

use crate::game::{GameState, PuzzleEngine};

/// Serialize `state` with bincode.
pub fn encode(state: &GameState) -> anyhow::Result<Vec<u8>> {
    bincode::serialize(state).context("encoding game state")
}

/// Deserialize a state and check it is one `engine` could have produced.
pub fn decode(engine: &PuzzleEngine, bytes: &[u8]) -> anyhow::Result<GameState> {
    let state: GameState = bincode::deserialize(bytes).context("decoding game state")?;
    state.validate(engine).map_err(|e| anyhow::anyhow!(e))?;
    Ok(state)
}
