//! Angular segment lookup
//!
//! Angles follow canvas conventions: 0 points right, y grows downwards, so
//! positive angles run clockwise on screen. Slot `i` is centred on
//! `i * 2π / 20` and maps to `SEGMENT_ORDER[(i + 5) mod 20]`, which puts 20
//! at the top and 6 on the right.

use std::f64::consts::{PI, TAU};

use crate::consts::{SEGMENT_ORDER, SEGMENT_ROTATION, SEGMENTS};
use crate::normalize_angle;

/// Angular width of one segment
pub const SEGMENT_ARC: f64 = TAU / SEGMENTS as f64;

/// Index into `SEGMENT_ORDER` for an angle from `atan2`
pub fn segment_index(angle: f64) -> usize {
    let slot = (((angle + PI / SEGMENTS as f64) / TAU) * SEGMENTS as f64).floor() as i64;
    (slot + (SEGMENTS + SEGMENT_ROTATION) as i64).rem_euclid(SEGMENTS as i64) as usize
}

/// Board number at an angle
pub fn segment_at(angle: f64) -> u8 {
    SEGMENT_ORDER[segment_index(angle)]
}

/// Angle through the middle of a numbered segment, None if not on the board
pub fn segment_angle(number: u8) -> Option<f64> {
    let index = SEGMENT_ORDER.iter().position(|&n| n == number)?;
    let slot = (index + SEGMENTS - SEGMENT_ROTATION) % SEGMENTS;
    Some(normalize_angle(slot as f64 * SEGMENT_ARC))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_compass_points() {
        assert_eq!(segment_at(0.0), 6);
        assert_eq!(segment_at(-FRAC_PI_2), 20);
        assert_eq!(segment_at(FRAC_PI_2), 3);
        assert_eq!(segment_at(PI), 11);
        assert_eq!(segment_at(-PI), 11);
    }

    #[test]
    fn test_segment_edges() {
        // 6 spans [-π/20, π/20)
        let half = SEGMENT_ARC / 2.0;
        assert_eq!(segment_at(-half), 6);
        assert_eq!(segment_at(half - 1e-9), 6);
        assert_eq!(segment_at(half + 1e-9), 10);
        assert_eq!(segment_at(-half - 1e-9), 13);
    }

    #[test]
    fn test_segment_angle_inverts_lookup() {
        for number in SEGMENT_ORDER {
            let angle = segment_angle(number).unwrap();
            assert_eq!(segment_at(angle), number);
        }
        assert!(segment_angle(0).is_none());
        assert!(segment_angle(21).is_none());
    }
}
