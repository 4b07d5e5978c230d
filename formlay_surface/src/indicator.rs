// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scroll indicator seam.
//!
//! The surface pushes range, visibility, value and geometry into a
//! [`ScrollIndicator`]. Values flowing the other way (the user dragging the
//! indicator) come back through [`crate::Surface::indicator_moved`]. The
//! surface only pushes a value after the offset actually changed, so an
//! indicator that echoes every `set_value` back as a move does not loop.

use kurbo::{Rect, Size};

/// A toolkit scroll bar reflecting the surface's vertical offset.
pub trait ScrollIndicator {
    /// Sets the value range `[0, max_offset]` and the page step.
    fn set_range(&mut self, max_offset: f64, page_step: f64);

    /// Shows or hides the indicator.
    fn set_visible(&mut self, visible: bool);

    /// Moves the indicator to `offset`.
    fn set_value(&mut self, offset: f64);

    /// Places the indicator in viewport coordinates.
    fn set_geometry(&mut self, rect: Rect);
}

/// Returns the strip of `width` along the right edge of `viewport`.
#[must_use]
pub fn indicator_geometry(viewport: Size, width: f64) -> Rect {
    let width = width.clamp(0.0, viewport.width.max(0.0));
    Rect::new(viewport.width - width, 0.0, viewport.width, viewport.height)
}

/// A [`ScrollIndicator`] that only records what it was told.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeadlessIndicator {
    max_offset: f64,
    page_step: f64,
    value: f64,
    visible: bool,
    geometry: Rect,
    value_updates: u64,
}

impl HeadlessIndicator {
    /// Creates a hidden indicator with an empty range.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last maximum offset.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    /// Returns the last page step.
    #[must_use]
    pub fn page_step(&self) -> f64 {
        self.page_step
    }

    /// Returns the last value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns whether the indicator is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the last geometry.
    #[must_use]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Number of [`ScrollIndicator::set_value`] calls received.
    #[must_use]
    pub fn value_updates(&self) -> u64 {
        self.value_updates
    }
}

impl ScrollIndicator for HeadlessIndicator {
    fn set_range(&mut self, max_offset: f64, page_step: f64) {
        self.max_offset = max_offset;
        self.page_step = page_step;
        self.value = self.value.clamp(0.0, max_offset.max(0.0));
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_value(&mut self, offset: f64) {
        self.value = offset;
        self.value_updates += 1;
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.geometry = rect;
    }
}
