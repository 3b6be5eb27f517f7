//! Concentric scoring rings
//!
//! Each band is closed on its outer edge and open on its inner edge, so a
//! dart sitting exactly on a wire goes to the band inside that wire.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::notation::ThrowKind;

/// Ring hit by a dart, ordered from the centre outwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ring {
    /// 50-point bullseye
    InnerBull,
    /// 25-point ring
    OuterBull,
    /// Single bed between the bull and the treble ring
    InnerSingle,
    Treble,
    /// Single bed between the treble and double rings
    OuterSingle,
    Double,
    /// Board surface outside the double wire
    Out,
    /// Off the board
    Floor,
}

impl Ring {
    /// All rings from the centre outwards
    pub const ALL: [Ring; 8] = [
        Ring::InnerBull,
        Ring::OuterBull,
        Ring::InnerSingle,
        Ring::Treble,
        Ring::OuterSingle,
        Ring::Double,
        Ring::Out,
        Ring::Floor,
    ];

    /// Classify a distance from the board centre (in pixels) at the given
    /// pixels-per-millimetre scale
    pub fn classify(distance: f64, scale: f64) -> Ring {
        if distance <= INNER_BULL_DIAMETER / 2.0 * scale {
            return Ring::InnerBull;
        }
        if distance <= OUTER_BULL_DIAMETER / 2.0 * scale {
            return Ring::OuterBull;
        }
        if distance > OVERALL_DIAMETER / 2.0 * scale {
            return Ring::Floor;
        }

        let in_band = |outer: f64| distance <= outer * scale && distance > (outer - RING_WIDTH) * scale;
        if in_band(TREBLE_RADIUS) {
            Ring::Treble
        } else if in_band(DOUBLE_RADIUS) {
            Ring::Double
        } else if distance >= DOUBLE_RADIUS * scale {
            Ring::Out
        } else if distance <= (TREBLE_RADIUS - RING_WIDTH) * scale {
            Ring::InnerSingle
        } else {
            Ring::OuterSingle
        }
    }

    /// Inner and outer radius of the band in millimetres (Floor is unbounded)
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Ring::InnerBull => (0.0, INNER_BULL_DIAMETER / 2.0),
            Ring::OuterBull => (INNER_BULL_DIAMETER / 2.0, OUTER_BULL_DIAMETER / 2.0),
            Ring::InnerSingle => (OUTER_BULL_DIAMETER / 2.0, TREBLE_RADIUS - RING_WIDTH),
            Ring::Treble => (TREBLE_RADIUS - RING_WIDTH, TREBLE_RADIUS),
            Ring::OuterSingle => (TREBLE_RADIUS, DOUBLE_RADIUS - RING_WIDTH),
            Ring::Double => (DOUBLE_RADIUS - RING_WIDTH, DOUBLE_RADIUS),
            Ring::Out => (DOUBLE_RADIUS, OVERALL_DIAMETER / 2.0),
            Ring::Floor => (OVERALL_DIAMETER / 2.0, f64::INFINITY),
        }
    }

    /// Radius halfway across the band, in millimetres
    pub fn mid_radius(&self) -> f64 {
        match self {
            Ring::InnerBull => 0.0,
            Ring::Floor => OVERALL_DIAMETER / 2.0 + RING_WIDTH,
            ring => {
                let (inner, outer) = ring.bounds();
                (inner + outer) / 2.0
            }
        }
    }

    /// Throw kind scored by this ring
    pub fn kind(&self) -> ThrowKind {
        match self {
            Ring::InnerBull => ThrowKind::InnerBull,
            Ring::OuterBull => ThrowKind::OuterBull,
            Ring::InnerSingle | Ring::OuterSingle => ThrowKind::Single,
            Ring::Treble => ThrowKind::Treble,
            Ring::Double => ThrowKind::Double,
            Ring::Out => ThrowKind::Out,
            Ring::Floor => ThrowKind::Floor,
        }
    }

    /// True for rings that carry a board number
    pub fn is_numbered(&self) -> bool {
        !matches!(self, Ring::InnerBull | Ring::OuterBull | Ring::Floor)
    }
}
