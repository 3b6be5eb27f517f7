//! Hit-test engine
//!
//! Maps a point on the drawing surface to a notation token. The board is
//! always evaluated as the same physical dartboard: millimetre dimensions
//! are multiplied by `scale = display size / overall board diameter`.
//!
//! Everything here is a pure function of its inputs.

pub mod layout;
pub mod ring;
pub mod segment;

pub use ring::Ring;
pub use segment::{SEGMENT_ARC, segment_angle, segment_at, segment_index};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::cartesian_to_polar;
use crate::consts::OVERALL_DIAMETER;
use crate::error::{DartsError, Result};
use crate::notation::{self, Throw};

/// A point in canvas pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

/// Outcome of a single hit test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub ring: Ring,
    /// Board number, None for bulls and floor
    pub segment: Option<u8>,
    /// Distance from the centre in millimetres
    pub distance_mm: f64,
}

impl Hit {
    /// Notation token for this hit (`b50`, `b25`, `f`, `t20`, `7`, `o3`, ...)
    pub fn token(&self) -> String {
        match (self.ring, self.segment) {
            (Ring::InnerBull, _) => "b50".to_string(),
            (Ring::OuterBull, _) => "b25".to_string(),
            (Ring::Floor, _) | (_, None) => "f".to_string(),
            (ring, Some(number)) => format!("{}{}", ring.kind().prefix(), number),
        }
    }

    /// Resolve the token through the notation codec
    pub fn throw(&self) -> Result<Throw> {
        notation::parse(&self.token())
    }
}

/// A dartboard placed on a drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Board {
    center: DVec2,
    /// Pixels per millimetre
    scale: f64,
}

impl Board {
    /// Board with an explicit centre and scale
    pub fn new(center: Point, scale: f64) -> Result<Self> {
        if !center.is_finite() {
            return Err(DartsError::GeometryDegenerate(format!(
                "centre ({}, {}) is not finite",
                center.x, center.y
            )));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(DartsError::GeometryDegenerate(format!(
                "scale {scale} must be positive"
            )));
        }
        Ok(Self {
            center: center.into(),
            scale,
        })
    }

    /// Board filling a square canvas of `size` pixels
    pub fn for_canvas(size: f64) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(DartsError::GeometryDegenerate(format!(
                "canvas size {size} must be positive"
            )));
        }
        Self::new(Point::new(size / 2.0, size / 2.0), size / OVERALL_DIAMETER)
    }

    /// Re-fit the board to a new square canvas size
    pub fn resize(&mut self, size: f64) -> Result<()> {
        *self = Self::for_canvas(size)?;
        Ok(())
    }

    pub fn center(&self) -> Point {
        self.center.into()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Canvas size this board fills (assuming a square, centred board)
    pub fn size(&self) -> f64 {
        self.scale * OVERALL_DIAMETER
    }

    /// Canvas position of a board-relative offset given in millimetres
    pub fn to_canvas(&self, offset_mm: DVec2) -> Point {
        (self.center + offset_mm * self.scale).into()
    }

    /// Classify a canvas point
    pub fn hit(&self, point: Point) -> Result<Hit> {
        if !point.is_finite() {
            return Err(DartsError::GeometryDegenerate(format!(
                "point ({}, {}) is not finite",
                point.x, point.y
            )));
        }

        let (distance, angle) = cartesian_to_polar(DVec2::from(point) - self.center);
        let ring = Ring::classify(distance, self.scale);
        let segment = ring.is_numbered().then(|| segment_at(angle));

        log::debug!(
            "hit ({:.1}, {:.1}): r={:.1}px angle={:.3} -> {:?} {:?}",
            point.x,
            point.y,
            distance,
            angle,
            ring,
            segment
        );

        Ok(Hit {
            ring,
            segment,
            distance_mm: distance / self.scale,
        })
    }

    /// Notation token for a canvas point
    pub fn score(&self, point: Point) -> Result<String> {
        Ok(self.hit(point)?.token())
    }
}

/// Score a point against a board centred at `center` with `scale` pixels per
/// millimetre
pub fn score(point: Point, center: Point, scale: f64) -> Result<String> {
    Board::new(center, scale)?.score(point)
}
