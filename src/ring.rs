//! Circular segment sequences and their rotations.

use alloc::vec::Vec;
use core::fmt;

use crate::common::Direction;

/// Index into a ring position's palette.
pub type ColorIndex = u8;

/// One ring of the puzzle: an ordered, circular sequence of color indices.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring {
    segments: Vec<ColorIndex>,
}

impl Ring {
    /// Wrap an explicit segment sequence.
    pub fn new(segments: Vec<ColorIndex>) -> Self {
        Self { segments }
    }

    /// Unrotated sequence `k mod palette_size` for `k` in `0..segments`.
    ///
    /// `palette_size` must be in `1..=256`; the engine checks this when the
    /// ring table is built.
    pub fn canonical(segments: usize, palette_size: usize) -> Self {
        let segments = (0..segments)
            .map(|k| (k % palette_size) as ColorIndex)
            .collect();
        Self { segments }
    }

    /// Segment sequence, position 0 first.
    pub fn segments(&self) -> &[ColorIndex] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Color index at `position`, wrapping around the ring.
    pub fn get(&self, position: usize) -> Option<ColorIndex> {
        if self.segments.is_empty() {
            return None;
        }
        Some(self.segments[position % self.segments.len()])
    }

    /// Copy of this ring shifted one position in `direction`.
    pub fn rotated(&self, direction: Direction) -> Self {
        let mut segments = self.segments.clone();
        if !segments.is_empty() {
            match direction {
                Direction::Forward => segments.rotate_right(1),
                Direction::Backward => segments.rotate_left(1),
            }
        }
        Self { segments }
    }

    /// Copy of this ring after `steps` forward rotations.
    pub fn rotated_by(&self, steps: usize) -> Self {
        let mut segments = self.segments.clone();
        if !segments.is_empty() {
            let n = segments.len();
            segments.rotate_right(steps % n);
        }
        Self { segments }
    }

    /// Smallest forward offset `r` with `target.rotated_by(r) == *self`, or
    /// `None` when this ring is not a rotation of `target`.
    pub fn offset_from(&self, target: &Ring) -> Option<usize> {
        if self.len() != target.len() {
            return None;
        }
        if self.is_empty() {
            return Some(0);
        }
        let n = self.len();
        (0..n).find(|&r| {
            (0..n).all(|k| self.segments[(k + r) % n] == target.segments[k])
        })
    }
}

impl From<Vec<ColorIndex>> for Ring {
    fn from(segments: Vec<ColorIndex>) -> Self {
        Self::new(segments)
    }
}

impl fmt::Debug for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.segments.iter()).finish()
    }
}
