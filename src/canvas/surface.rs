//! Drawing seam between the renderer and the browser canvas.
//!
//! The renderer only talks to `DrawSurface`; `CanvasSurface` forwards to a
//! `CanvasRenderingContext2d`.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::Segment;
use crate::config::Viewport;

/// Canvas compositing modes the renderer switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// `source-over`, the canvas default.
    Normal,
    /// `lighter`: overlapping streaks add up instead of occluding.
    Additive,
}

impl BlendMode {
    pub fn as_css(&self) -> &'static str {
        match self {
            BlendMode::Normal => "source-over",
            BlendMode::Additive => "lighter",
        }
    }
}

pub trait DrawSurface {
    /// Fill `(0, 0, width, height)` in CSS pixels.
    fn fill_rect(&mut self, style: &str, width: f64, height: f64);
    fn set_blend(&mut self, mode: BlendMode);
    fn stroke_segment(&mut self, style: &str, line_width: f64, segment: &Segment);
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, context: CanvasRenderingContext2d) -> Self {
        Self { canvas, context }
    }

    /// Size the backing store for `viewport` and scale drawing so callers
    /// keep working in CSS pixels.
    pub fn resize(&self, viewport: &Viewport) -> Result<(), JsValue> {
        let (w, h) = viewport.backing_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);

        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", viewport.width))?;
        style.set_property("height", &format!("{}px", viewport.height))?;

        self.context
            .set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)
    }
}

impl DrawSurface for CanvasSurface {
    fn fill_rect(&mut self, style: &str, width: f64, height: f64) {
        self.context.set_fill_style_str(style);
        self.context.fill_rect(0.0, 0.0, width, height);
    }

    fn set_blend(&mut self, mode: BlendMode) {
        if let Err(e) = self.context.set_global_composite_operation(mode.as_css()) {
            crate::console_warn!("Failed to set composite mode {}: {:?}", mode.as_css(), e);
        }
    }

    fn stroke_segment(&mut self, style: &str, line_width: f64, segment: &Segment) {
        let ctx = &self.context;
        ctx.set_stroke_style_str(style);
        ctx.set_line_width(line_width);
        ctx.begin_path();
        ctx.move_to(segment.x0, segment.y0);
        ctx.line_to(segment.x1, segment.y1);
        ctx.stroke();
    }
}

/// In-memory surface that records every call, for renderer tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Fill { style: String, width: f64, height: f64 },
    Blend(BlendMode),
    Stroke { style: String, line_width: f64, segment: Segment },
}

#[cfg(test)]
impl RecordingSurface {
    pub fn strokes(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Stroke { .. }))
            .count()
    }
}

#[cfg(test)]
impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, style: &str, width: f64, height: f64) {
        self.ops.push(DrawOp::Fill { style: style.to_string(), width, height });
    }

    fn set_blend(&mut self, mode: BlendMode) {
        self.ops.push(DrawOp::Blend(mode));
    }

    fn stroke_segment(&mut self, style: &str, line_width: f64, segment: &Segment) {
        self.ops.push(DrawOp::Stroke {
            style: style.to_string(),
            line_width,
            segment: *segment,
        });
    }
}
