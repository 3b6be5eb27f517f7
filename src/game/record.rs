//! Throw records
//!
//! A record is an immutable fact: this player, in this game, at this canvas
//! size, clicked this point, which resolved to this throw.

use serde::{Deserialize, Serialize};

use super::Game;
use crate::board::Point;
use crate::notation::Throw;

/// Canvas dimensions at the time of a throw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn square(size: f64) -> Self {
        Self {
            width: size,
            height: size,
        }
    }
}

/// One entry of the throw log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThrowRecord {
    /// Unix timestamp (ms)
    pub timestamp: f64,
    pub canvas: CanvasSize,
    pub point: Point,
    pub game: Game,
    pub player: String,
    pub throw: Throw,
}

impl ThrowRecord {
    /// The same record as it would appear on a square canvas of `size`
    /// pixels
    pub fn rescaled(&self, size: f64) -> Self {
        let sx = if self.canvas.width > 0.0 {
            size / self.canvas.width
        } else {
            1.0
        };
        let sy = if self.canvas.height > 0.0 {
            size / self.canvas.height
        } else {
            1.0
        };
        Self {
            canvas: CanvasSize::square(size),
            point: Point::new(self.point.x * sx, self.point.y * sy),
            ..self.clone()
        }
    }
}
