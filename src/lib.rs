//! Dart Scorer - click a rendered dartboard, keep a 301 score
//!
//! Core modules:
//! - `notation`: Throw notation codec (`t20`, `d16`, `b50`, `f`, ...)
//! - `board`: Hit-test from a canvas point to a notation token
//! - `game`: Throw log, turn scorekeeper (bust/checkout/undo), 301 session
//! - `practice`: Seeded throw simulator
//! - `renderer`: Scoreboard table and canvas painter
//! - `persistence`: Throw log storage
//! - `settings`: User preferences

pub mod board;
pub mod error;
pub mod game;
pub mod notation;
pub mod persistence;
pub mod practice;
pub mod renderer;
pub mod settings;

pub use board::{Board, Hit, Ring, score};
pub use error::{DartsError, Result};
pub use game::{Classic301, Game, Scoreboard, ThrowLog, ThrowRecord, derive};
pub use notation::{Throw, ThrowKind, format, parse};
pub use settings::Settings;

use glam::DVec2;

/// Board dimensions and game constants
///
/// Dimensions are in millimetres, taken from the regulation board:
///
/// ```text
/// 'Bull' inside diameter                        = 12.7 mm
/// '25' ring inside diameter                     = 31.8 mm
/// Outside edge of 'Double' wire to Centre Bull  = 170.0 mm
/// Outside edge of 'Treble' wire to Centre Bull  = 107.0 mm
/// Double and Treble width, inside to inside     = 8.0 mm
/// Overall dartboard diameter                    = 451.0 mm
/// ```
pub mod consts {
    pub const INNER_BULL_DIAMETER: f64 = 12.7;
    pub const OUTER_BULL_DIAMETER: f64 = 31.8;
    /// Radius to the outside edge of the double wire
    pub const DOUBLE_RADIUS: f64 = 170.0;
    /// Radius to the outside edge of the treble wire
    pub const TREBLE_RADIUS: f64 = 107.0;
    /// Radial width of the double and treble beds
    pub const RING_WIDTH: f64 = 8.0;
    pub const OVERALL_DIAMETER: f64 = 451.0;
    /// Wire thickness (drawing only)
    pub const WIRE_WIDTH: f64 = 1.0;

    /// Number of numbered segments
    pub const SEGMENTS: usize = 20;

    /// Board numbers clockwise from the top, starting at 20
    pub const SEGMENT_ORDER: [u8; SEGMENTS] = [
        20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5,
    ];

    /// Offset from raw angle index 0 (pointing right) into `SEGMENT_ORDER`
    pub const SEGMENT_ROTATION: usize = 5;

    /// Starting score of a 301 leg
    pub const CLASSIC_301_START: u32 = 301;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f64) -> f64 {
    use std::f64::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: DVec2) -> (f64, f64) {
    (pos.length(), pos.y.atan2(pos.x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(3.0 * PI) - (-PI)).abs() < 1e-9);
        assert!((normalize_angle(-PI / 2.0) - (-PI / 2.0)).abs() < 1e-9);
        assert!(normalize_angle(PI) < PI);
    }

    #[test]
    fn test_polar_roundtrip() {
        let p = polar_to_cartesian(100.0, 0.75);
        let (r, theta) = cartesian_to_polar(p);
        assert!((r - 100.0).abs() < 1e-9);
        assert!((theta - 0.75).abs() < 1e-9);
    }
}
