//! Display derivation from color indices. Nothing here feeds back into the
//! engine; renderers call it on every redraw.

use crate::config::{RingSpec, RING_SPECS};
use crate::ring::ColorIndex;

/// Display color for `index` on ring `position` of the reference table.
pub fn color_for(position: usize, index: ColorIndex) -> Option<&'static str> {
    RING_SPECS.get(position).and_then(|spec| spec_color(spec, index))
}

/// Display color for `index` under an arbitrary ring spec, wrapping around
/// the palette.
pub fn spec_color(spec: &RingSpec, index: ColorIndex) -> Option<&'static str> {
    let palette = spec.palette();
    if palette.is_empty() {
        return None;
    }
    Some(palette[usize::from(index) % palette.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_ring_starts_with_marigold_gold() {
        assert_eq!(color_for(0, 0), Some("#FFD700"));
        assert_eq!(color_for(0, 6), color_for(0, 0));
        assert_eq!(color_for(4, 0), None);
    }

    #[test]
    fn small_palette_wraps() {
        let spec = RingSpec::new(6, &["#000000", "#FFFFFF"]);
        assert_eq!(spec_color(&spec, 3), Some("#FFFFFF"));
        assert_eq!(spec_color(&RingSpec::new(6, &[]), 0), None);
    }
}
