//! Audio cue derivation for rotation outcomes. Playback is up to the caller.

use crate::common::RotationOutcome;

/// Tone to play after a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cue {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

const SUCCESS: Cue = Cue {
    frequency_hz: 800,
    duration_ms: 300,
};
const STEP_BASE_HZ: u32 = 400;
const STEP_HZ_PER_RING: u32 = 100;
const STEP_DURATION_MS: u32 = 100;

impl RotationOutcome {
    /// Success chime, or a short click pitched by ring position.
    pub fn cue(&self) -> Cue {
        match *self {
            RotationOutcome::Solved { .. } => SUCCESS,
            RotationOutcome::Step { ring } => Cue {
                frequency_hz: STEP_BASE_HZ + STEP_HZ_PER_RING * ring as u32,
                duration_ms: STEP_DURATION_MS,
            },
        }
    }
}
