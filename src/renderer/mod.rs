//! Presentation
//!
//! Takes derived state and replaces the display wholesale; nothing here
//! decides a score.
//! - `table`: scoreboard as HTML
//! - `canvas`: Canvas2D board painter (wasm only)

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod table;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
pub use table::{render_body, render_table, render_text};

use crate::board::layout::Paint;

/// CSS colour for a paint slot
pub fn css_color(paint: Paint) -> &'static str {
    match paint {
        Paint::Dark => "#2e343a",
        Paint::Light => "#fde1d0",
        Paint::Red => "red",
        Paint::Green => "green",
    }
}

pub const WIRE_COLOR: &str = "grey";
pub const LABEL_COLOR: &str = "white";
pub const DART_COLOR: &str = "orange";
