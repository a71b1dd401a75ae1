//! Common types for the puzzle: rotation direction, rotation outcome and errors.

/// Direction of a single-step ring rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Last segment moves to the front.
    Forward,
    /// First segment moves to the back.
    Backward,
}

impl Direction {
    /// The direction that undoes this one.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Result of a rotation, used by presentation layers to pick a feedback cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationOutcome {
    /// The rotation left the puzzle unsolved.
    Step { ring: usize },
    /// The rotation completed every ring.
    Solved { ring: usize },
}

impl RotationOutcome {
    /// Ring that was rotated.
    pub fn ring(&self) -> usize {
        match *self {
            RotationOutcome::Step { ring } | RotationOutcome::Solved { ring } => ring,
        }
    }

    /// `true` when this rotation completed the level.
    pub fn is_solved(&self) -> bool {
        matches!(self, RotationOutcome::Solved { .. })
    }
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Level outside `1..=max_level`.
    InvalidLevel { level: usize, max_level: usize },
    /// Ring index does not name an active ring.
    InvalidRing { ring: usize, level: usize },
    /// Ring table cannot drive a puzzle.
    InvalidConfig(&'static str),
    /// A state failed structural validation (e.g. after decoding).
    CorruptState(&'static str),
}

impl core::fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PuzzleError::InvalidLevel { level, max_level } => {
                write!(f, "Level {} is out of range (1..={})", level, max_level)
            }
            PuzzleError::InvalidRing { ring, level } => {
                write!(f, "Ring {} does not exist at level {}", ring, level)
            }
            PuzzleError::InvalidConfig(reason) => write!(f, "Invalid ring table: {}", reason),
            PuzzleError::CorruptState(reason) => write!(f, "Corrupt game state: {}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PuzzleError {}
