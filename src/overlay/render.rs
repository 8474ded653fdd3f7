//! Paint pass planning for the balloon
//!
//! The drawing surface belongs to a [`Canvas`] implementor. This module only
//! decides what to draw and in which order, including where high-quality
//! rendering gets switched on.

use serde::Serialize;

use super::geometry::{FontSpec, OverlayGeometry, OverlayStyle};
use crate::common::color::Rgba;
use crate::common::types::{OverlayRect, Visibility};
use crate::config::ConfigError;
use crate::constants::overlay::CORNER_RADIUS;

/// One drawing step, in bounds-local coordinates (origin at the balloon's top-left)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PaintOp {
    EnableHighQuality,
    FillRoundRect {
        width: i32,
        height: i32,
        radius: f64,
        color: Rgba,
    },
    DrawContent { foreground: Rgba, font: FontSpec },
}

/// Drawing backend driven by a paint plan
pub trait Canvas {
    fn enable_high_quality(&mut self);
    fn fill_round_rect(&mut self, width: i32, height: i32, radius: f64, color: Rgba);
    fn draw_content(&mut self, foreground: Rgba, font: &FontSpec);
}

/// Steps for one paint pass; empty while hidden.
///
/// High quality is enabled at most once: before the background when
/// `high_quality` is set, otherwise before the content when
/// `high_quality_text` is set.
pub fn plan_paint(visibility: Visibility, style: &OverlayStyle, bounds: OverlayRect) -> Vec<PaintOp> {
    if !visibility.is_shown() {
        return Vec::new();
    }

    let mut ops = Vec::with_capacity(4);
    if style.high_quality {
        ops.push(PaintOp::EnableHighQuality);
    }

    ops.push(PaintOp::FillRoundRect {
        width: bounds.width,
        height: bounds.height,
        radius: CORNER_RADIUS,
        color: style.background,
    });

    if style.high_quality_text && !style.high_quality {
        ops.push(PaintOp::EnableHighQuality);
    }

    ops.push(PaintOp::DrawContent {
        foreground: style.foreground,
        font: style.font.clone(),
    });
    ops
}

/// Replay a plan onto a canvas
pub fn replay(ops: &[PaintOp], canvas: &mut impl Canvas) {
    for op in ops {
        match op {
            PaintOp::EnableHighQuality => canvas.enable_high_quality(),
            PaintOp::FillRoundRect {
                width,
                height,
                radius,
                color,
            } => canvas.fill_round_rect(*width, *height, *radius, *color),
            PaintOp::DrawContent { foreground, font } => canvas.draw_content(*foreground, font),
        }
    }
}

impl OverlayGeometry {
    /// Plan a paint pass for `bounds` with the current style and visibility
    pub fn plan_paint(&self, bounds: OverlayRect) -> Result<Vec<PaintOp>, ConfigError> {
        if !self.is_visible() {
            return Ok(Vec::new());
        }
        let style = self.style()?;
        Ok(plan_paint(self.visibility(), &style, bounds))
    }

    /// Plan and replay a paint pass onto `canvas`
    pub fn paint(&self, canvas: &mut impl Canvas, bounds: OverlayRect) -> Result<(), ConfigError> {
        let ops = self.plan_paint(bounds)?;
        replay(&ops, canvas);
        Ok(())
    }
}
