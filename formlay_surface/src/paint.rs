// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paint seam and a recording implementation of it.

use kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::background::BackgroundImage;

/// How a line is stroked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    /// Continuous line.
    #[default]
    Solid,
    /// Dashed line.
    Dashed,
}

/// Drawing primitives the surface needs from a toolkit.
///
/// All coordinates are in viewport space. The surface decides where things
/// go; implementors decide how they are drawn.
pub trait PaintSurface {
    /// Draws `image` at its own size with its top-left corner at `origin`.
    fn draw_image(&mut self, origin: Point, image: &BackgroundImage);

    /// Strokes a one-pixel line from `from` to `to`.
    fn stroke_line(&mut self, from: Point, to: Point, color: Color, style: LineStyle);

    /// Fills `rect` with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws `text` centered in `rect`. Lines are separated by `\n`.
    fn draw_text(&mut self, rect: Rect, text: &str, color: Color);
}

/// Paint call captured by a [`PaintRecorder`].
#[derive(Clone, Debug)]
pub enum PaintOp {
    /// [`PaintSurface::draw_image`]; the image is recorded by size.
    Image {
        /// Top-left corner.
        origin: Point,
        /// Size of the drawn image.
        size: Size,
    },
    /// [`PaintSurface::stroke_line`].
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke color.
        color: Color,
        /// Stroke style.
        style: LineStyle,
    },
    /// [`PaintSurface::fill_rect`].
    FillRect {
        /// Filled area.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// [`PaintSurface::draw_text`].
    Text {
        /// Layout box.
        rect: Rect,
        /// Text contents.
        text: String,
        /// Text color.
        color: Color,
    },
}

/// A [`PaintSurface`] that records calls instead of drawing.
///
/// Intended for tests and for hosts that want to replay a frame onto their
/// own canvas.
#[derive(Clone, Debug, Default)]
pub struct PaintRecorder {
    ops: Vec<PaintOp>,
}

impl PaintRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded calls in order.
    #[must_use]
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Forgets every recorded call.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Takes the recorded calls, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<PaintOp> {
        std::mem::take(&mut self.ops)
    }
}

impl PaintSurface for PaintRecorder {
    fn draw_image(&mut self, origin: Point, image: &BackgroundImage) {
        self.ops.push(PaintOp::Image {
            origin,
            size: Size::new(f64::from(image.width()), f64::from(image.height())),
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color, style: LineStyle) {
        self.ops.push(PaintOp::Line {
            from,
            to,
            color,
            style,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(PaintOp::FillRect { rect, color });
    }

    fn draw_text(&mut self, rect: Rect, text: &str, color: Color) {
        self.ops.push(PaintOp::Text {
            rect,
            text: text.to_owned(),
            color,
        });
    }
}
