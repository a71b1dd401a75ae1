//! Ring layout and timing constants for the reference puzzle.

use core::time::Duration;

/// Number of rings in the full puzzle. Level `n` plays the first `n` rings.
pub const MAX_LEVEL: usize = 4;

/// How long a solved intermediate level stays on screen before the next
/// level is generated.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(2000);

/// Segment count and color palette for one ring position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingSpec {
    segments: usize,
    palette: &'static [&'static str],
}

impl RingSpec {
    /// Create a ring spec.
    pub const fn new(segments: usize, palette: &'static [&'static str]) -> Self {
        Self { segments, palette }
    }

    /// Number of segments in this ring.
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Display colors for this ring. The engine only looks at the length.
    pub fn palette(&self) -> &'static [&'static str] {
        self.palette
    }

    /// Number of distinct color indices this ring can hold.
    pub fn palette_size(&self) -> usize {
        self.palette.len()
    }
}

const MARIGOLD: [&str; 6] = ["#FFD700", "#FFA500", "#FF8C00", "#FFB347", "#FFCC33", "#FF6347"];

const ROSE: [&str; 8] = [
    "#FF69B4", "#FF1493", "#DC143C", "#B22222", "#FF6B6B", "#FF4757", "#FF3838", "#FF5722",
];

const JASMINE: [&str; 10] = [
    "#FFFAF0", "#FFF8DC", "#FFFFE0", "#F0F8FF", "#F5F5DC", "#FAFAD2", "#FFFACD", "#FDF5E6",
    "#FFFFF0", "#FAF0E6",
];

const TROPICAL: [&str; 12] = [
    "#FF4081", "#E91E63", "#9C27B0", "#673AB7", "#3F51B5", "#2196F3", "#00BCD4", "#009688",
    "#4CAF50", "#8BC34A", "#CDDC39", "#FFEB3B",
];

/// Reference ring table, outermost ring first.
pub const RING_SPECS: [RingSpec; MAX_LEVEL] = [
    RingSpec::new(6, &MARIGOLD),
    RingSpec::new(8, &ROSE),
    RingSpec::new(10, &JASMINE),
    RingSpec::new(12, &TROPICAL),
];

/// Segment count of ring `position` in the reference table.
/// Returns `None` past the last ring.
pub fn segment_count_for(position: usize) -> Option<usize> {
    RING_SPECS.get(position).map(RingSpec::segments)
}

/// Palette size of ring `position` in the reference table.
pub fn palette_size_for(position: usize) -> Option<usize> {
    RING_SPECS.get(position).map(RingSpec::palette_size)
}
