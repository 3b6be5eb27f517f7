//! Canvas2D board painter
//!
//! Paints the board from `board::layout` and marks logged darts.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{DART_COLOR, LABEL_COLOR, WIRE_COLOR, css_color};
use crate::board::Board;
use crate::board::layout::{LABEL_FONT_SIZE, Layer, labels, layers, wedge_span};
use crate::consts::{SEGMENTS, WIRE_WIDTH};
use crate::game::ThrowRecord;

/// Dart marker radius in millimetres
const DART_RADIUS: f64 = 3.0;

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
    /// Draw grid lines and centre-to-dart rays
    pub debug: bool,
}

impl CanvasPainter {
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx, debug: false })
    }

    /// Size the canvas backing store to a square of `size` pixels
    pub fn resize(&self, size: f64) {
        if let Some(canvas) = self.ctx.canvas() {
            canvas.set_width(size as u32);
            canvas.set_height(size as u32);
        }
    }

    /// Clear and repaint the board with every logged dart
    pub fn draw(&self, board: &Board, darts: &[ThrowRecord]) {
        let size = board.size();
        self.ctx.clear_rect(0.0, 0.0, size, size);

        for (i, layer) in layers().into_iter().enumerate() {
            match layer {
                Layer::Disc { radius, paint } => self.disc(board, radius, css_color(paint)),
                Layer::Wedges { radius, even, odd } => {
                    for w in 0..SEGMENTS {
                        let paint = if w % 2 == 0 { even } else { odd };
                        self.wedge(board, radius, w, css_color(paint));
                    }
                }
            }
            // Numbers go on the surround, under everything else
            if i == 0 {
                self.labels(board);
            }
        }

        if self.debug {
            self.grid_lines(size, 10);
        }
        for dart in darts {
            self.dart(board, dart);
        }
    }

    fn disc(&self, board: &Board, radius: f64, fill: &str) {
        let c = board.center();
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(c.x, c.y, radius * board.scale(), 0.0, std::f64::consts::TAU);
        self.fill_and_stroke(board, fill);
    }

    fn wedge(&self, board: &Board, radius: f64, i: usize, fill: &str) {
        let c = board.center();
        let (start, end) = wedge_span(i);
        self.ctx.begin_path();
        self.ctx.move_to(c.x, c.y);
        let _ = self.ctx.arc(c.x, c.y, radius * board.scale(), start, end);
        self.ctx.line_to(c.x, c.y);
        self.fill_and_stroke(board, fill);
    }

    fn fill_and_stroke(&self, board: &Board, fill: &str) {
        self.ctx.set_fill_style_str(fill);
        self.ctx.set_line_width(WIRE_WIDTH * board.scale());
        self.ctx.set_stroke_style_str(WIRE_COLOR);
        self.ctx.fill();
        self.ctx.stroke();
    }

    fn labels(&self, board: &Board) {
        self.ctx
            .set_font(&format!("{}px Arial", LABEL_FONT_SIZE * board.scale()));
        self.ctx.set_fill_style_str(LABEL_COLOR);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        for label in labels(board) {
            let _ = self.ctx.fill_text(
                &label.number.to_string(),
                label.position.x,
                label.position.y,
            );
        }
    }

    fn dart(&self, board: &Board, dart: &ThrowRecord) {
        let p = dart.point;
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            p.x,
            p.y,
            DART_RADIUS * board.scale(),
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style_str(DART_COLOR);
        self.ctx.fill();

        if self.debug {
            let c = board.center();
            self.ctx.begin_path();
            self.ctx.move_to(p.x, p.y);
            self.ctx.line_to(c.x, c.y);
            self.ctx.stroke();
        }
    }

    fn grid_lines(&self, size: f64, count: u32) {
        self.ctx.set_stroke_style_str(WIRE_COLOR);
        for i in 0..count {
            let offset = size / count as f64 * i as f64;
            self.ctx.begin_path();
            self.ctx.move_to(offset, 0.0);
            self.ctx.line_to(offset, size);
            self.ctx.move_to(0.0, offset);
            self.ctx.line_to(size, offset);
            self.ctx.stroke();
        }
    }
}
