//! Randomness used when shuffling freshly generated rings.

use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

/// Supplies the number of forward steps each generated ring is shuffled by.
pub trait RotationSource {
    /// Return a rotation count in `0..segments`. `segments` is never zero.
    fn next_rotation(&mut self, segments: usize) -> usize;
}

impl RotationSource for SmallRng {
    fn next_rotation(&mut self, segments: usize) -> usize {
        self.random_range(0..segments)
    }
}

impl<S: RotationSource + ?Sized> RotationSource for &mut S {
    fn next_rotation(&mut self, segments: usize) -> usize {
        (**self).next_rotation(segments)
    }
}

/// Replays a fixed list of rotation counts, cycling when exhausted.
///
/// Counts are reduced modulo the ring's segment count. An empty list always
/// yields zero, i.e. every ring starts solved.
#[derive(Debug, Clone, Default)]
pub struct FixedRotations {
    counts: Vec<usize>,
    next: usize,
}

impl FixedRotations {
    pub fn new(counts: Vec<usize>) -> Self {
        Self { counts, next: 0 }
    }
}

impl RotationSource for FixedRotations {
    fn next_rotation(&mut self, segments: usize) -> usize {
        if self.counts.is_empty() {
            return 0;
        }
        let count = self.counts[self.next % self.counts.len()];
        self.next = self.next.wrapping_add(1);
        count % segments
    }
}
