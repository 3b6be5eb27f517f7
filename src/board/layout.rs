//! Drawing layout
//!
//! Geometry the painter needs, in paint order (outside in). No colours are
//! chosen here, only which paint slot each shape uses.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::{Board, Point, SEGMENT_ARC};
use crate::consts::*;
use crate::polar_to_cartesian;

/// Paint slot, mapped to a concrete colour by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Paint {
    /// Dark single bed, also the numbered surround
    Dark,
    /// Light single bed
    Light,
    /// Red double/treble bed and bullseye
    Red,
    /// Green double/treble bed and 25 ring
    Green,
}

/// One shape of the board, painted over the previous ones
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layer {
    /// Full disc of a single paint
    Disc { radius: f64, paint: Paint },
    /// Twenty alternating wedges out to `radius`
    Wedges { radius: f64, even: Paint, odd: Paint },
}

impl Layer {
    /// Radius in millimetres
    pub fn radius(&self) -> f64 {
        match self {
            Layer::Disc { radius, .. } | Layer::Wedges { radius, .. } => *radius,
        }
    }
}

/// Layers from the outside in
pub fn layers() -> [Layer; 7] {
    [
        Layer::Disc {
            radius: OVERALL_DIAMETER / 2.0,
            paint: Paint::Dark,
        },
        Layer::Wedges {
            radius: DOUBLE_RADIUS,
            even: Paint::Red,
            odd: Paint::Green,
        },
        Layer::Wedges {
            radius: DOUBLE_RADIUS - RING_WIDTH,
            even: Paint::Dark,
            odd: Paint::Light,
        },
        Layer::Wedges {
            radius: TREBLE_RADIUS,
            even: Paint::Red,
            odd: Paint::Green,
        },
        Layer::Wedges {
            radius: TREBLE_RADIUS - RING_WIDTH,
            even: Paint::Dark,
            odd: Paint::Light,
        },
        Layer::Disc {
            radius: OUTER_BULL_DIAMETER / 2.0,
            paint: Paint::Green,
        },
        Layer::Disc {
            radius: INNER_BULL_DIAMETER / 2.0,
            paint: Paint::Red,
        },
    ]
}

/// Start and end angle of wedge `i`
pub fn wedge_span(i: usize) -> (f64, f64) {
    let start = SEGMENT_ARC / 2.0 + SEGMENT_ARC * i as f64;
    (start, start + SEGMENT_ARC)
}

/// A segment number printed in the surround
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label {
    pub number: u8,
    pub position: Point,
}

/// Distance of the number ring inside the board edge, in millimetres
pub const LABEL_INSET: f64 = 20.0;

/// Font size for segment numbers, in millimetres
pub const LABEL_FONT_SIZE: f64 = 20.0;

/// Segment numbers and their canvas positions
pub fn labels(board: &Board) -> Vec<Label> {
    let radius = OVERALL_DIAMETER / 2.0 - LABEL_INSET;
    (0..SEGMENTS)
        .map(|i| {
            let angle = TAU / SEGMENTS as f64 * i as f64;
            Label {
                number: SEGMENT_ORDER[(i + SEGMENT_ROTATION) % SEGMENTS],
                position: board.to_canvas(polar_to_cartesian(radius, angle)),
            }
        })
        .collect()
}
