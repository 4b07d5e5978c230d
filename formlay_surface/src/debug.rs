// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debug overlay: a crosshair through the pointer and a coordinate readout.
//!
//! The readout shows the pointer in background space (the coordinates a
//! field definition uses) above the pointer in viewport space:
//!
//! ```text
//! X: 250, Y: 640
//! Widget: 350, 240
//! ```
//!
//! Text is measured with fixed per-character metrics, so the readout box is
//! deterministic regardless of the toolkit's font.

use kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::paint::{LineStyle, PaintSurface};
use crate::renderable::Renderable;

/// Crosshair color: translucent red.
pub const CROSSHAIR_COLOR: Color = Color::from_rgba8(255, 0, 0, 180);
/// Readout box fill: translucent black.
pub const READOUT_FILL: Color = Color::from_rgba8(0, 0, 0, 180);
/// Readout text color.
pub const READOUT_TEXT_COLOR: Color = Color::WHITE;

const CHAR_WIDTH: f64 = 7.0;
const LINE_HEIGHT: f64 = 14.0;
const PADDING: Size = Size::new(4.0, 16.0);
const POINTER_GAP: f64 = 10.0;
const BELOW_POINTER: f64 = 20.0;

/// The debug overlay layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DebugOverlay {
    enabled: bool,
    viewport: Size,
    pointer: Point,
    background_point: Point,
}

impl DebugOverlay {
    /// Creates an overlay, optionally enabled.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    /// Turns the overlay on or off.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns `true` while the overlay is drawn.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Records the pointer position in viewport and background space.
    pub fn set_pointer(&mut self, viewport_point: Point, background_point: Point) {
        self.pointer = viewport_point;
        self.background_point = background_point;
    }

    /// Returns the last pointer position in viewport space.
    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Returns the last pointer position in background space.
    #[must_use]
    pub fn background_point(&self) -> Point {
        self.background_point
    }

    /// Returns the readout text, in whole pixels.
    #[must_use]
    pub fn readout_text(&self) -> String {
        format!(
            "X: {}, Y: {}\nWidget: {}, {}",
            whole(self.background_point.x),
            whole(self.background_point.y),
            whole(self.pointer.x),
            whole(self.pointer.y)
        )
    }

    /// Returns the viewport rectangle of the readout box.
    ///
    /// The box sits up and to the right of the pointer. It moves to the left
    /// of the pointer when it would cross the right edge, and below the
    /// pointer when it would cross the top edge.
    #[must_use]
    pub fn readout_rect(&self) -> Rect {
        let size = readout_size(&self.readout_text());
        let mut x = self.pointer.x + POINTER_GAP;
        let mut y = self.pointer.y - size.height - POINTER_GAP;
        if x + size.width > self.viewport.width {
            x = self.pointer.x - size.width - POINTER_GAP;
        }
        if y < 0.0 {
            y = self.pointer.y + BELOW_POINTER;
        }
        Rect::from_origin_size((x, y), size)
    }
}

fn readout_size(text: &str) -> Size {
    let (lines, widest) = text
        .lines()
        .fold((0_usize, 0_usize), |(lines, widest), line| {
            (lines + 1, widest.max(line.chars().count()))
        });
    Size::new(
        widest as f64 * CHAR_WIDTH + PADDING.width,
        lines as f64 * LINE_HEIGHT + PADDING.height,
    )
}

impl Renderable for DebugOverlay {
    fn render(&self, surface: &mut dyn PaintSurface) {
        if !self.enabled {
            return;
        }
        let Point { x, y } = self.pointer;
        surface.stroke_line(
            Point::new(x, 0.0),
            Point::new(x, self.viewport.height),
            CROSSHAIR_COLOR,
            LineStyle::Dashed,
        );
        surface.stroke_line(
            Point::new(0.0, y),
            Point::new(self.viewport.width, y),
            CROSSHAIR_COLOR,
            LineStyle::Dashed,
        );
        let rect = self.readout_rect();
        surface.fill_rect(rect, READOUT_FILL);
        surface.draw_text(rect, &self.readout_text(), READOUT_TEXT_COLOR);
    }

    fn handle_resize(&mut self, size: Size) {
        self.viewport = size;
    }
}

/// Rounds for display; `+ 0.0` turns `-0` into `0`.
fn whole(value: f64) -> f64 {
    value.round() + 0.0
}
