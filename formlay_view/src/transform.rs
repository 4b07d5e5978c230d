// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Point, Rect, Size, Vec2};

use crate::background::{BackgroundSource, InvalidImage, scaled_size_for_width};

/// Placement of a fixed-width background inside a resizable viewport.
///
/// `ViewportTransform` owns the background image and its scaled copy and
/// records the current viewport size and vertical scroll offset. From those it
/// derives:
/// - The scaled background size (`scaled_width == fixed_width` whenever a
///   background is loaded).
/// - The horizontal centering offset.
/// - The screen-space origin `(center_x, -scroll_offset)` at which the
///   background, and everything pinned to it, is anchored.
/// - The inverse mapping from viewport points to background space.
///
/// The transform does not clamp the scroll offset; it is expected to receive
/// offsets already clamped by [`crate::ScrollRange`].
#[derive(Clone, Debug)]
pub struct ViewportTransform<B> {
    background: Option<B>,
    scaled: Option<B>,
    scaled_size: Size,
    fixed_width: f64,
    viewport: Size,
    scroll_offset: f64,
}

impl<B: BackgroundSource> ViewportTransform<B> {
    /// Creates a transform with no background and a zero-sized viewport.
    ///
    /// Non-positive or non-finite widths are ignored and leave the fixed
    /// width at `1.0`.
    #[must_use]
    pub fn new(fixed_width: f64) -> Self {
        let mut transform = Self {
            background: None,
            scaled: None,
            scaled_size: Size::ZERO,
            fixed_width: 1.0,
            viewport: Size::ZERO,
            scroll_offset: 0.0,
        };
        transform.set_fixed_width(fixed_width);
        transform
    }

    /// Replaces the background and rescales it to the fixed width.
    ///
    /// An image with an empty or non-finite natural size is rejected and the
    /// previous background, if any, is retained.
    pub fn set_background_image(&mut self, image: B) -> Result<(), InvalidImage> {
        InvalidImage::check(image.natural_size())?;
        self.background = Some(image);
        self.update_scale();
        Ok(())
    }

    /// Returns the background at its natural size, if one is loaded.
    #[must_use]
    pub fn background(&self) -> Option<&B> {
        self.background.as_ref()
    }

    /// Returns the background resampled to [`Self::scaled_size`], if loaded.
    #[must_use]
    pub fn scaled_background(&self) -> Option<&B> {
        self.scaled.as_ref()
    }

    /// Sets the width the background is scaled to and rescales it.
    ///
    /// Non-positive or non-finite widths are ignored.
    pub fn set_fixed_width(&mut self, width: f64) {
        if !width.is_finite() || width <= 0.0 || width == self.fixed_width {
            return;
        }
        self.fixed_width = width;
        self.update_scale();
    }

    /// Returns the width the background is scaled to.
    #[must_use]
    pub fn fixed_width(&self) -> f64 {
        self.fixed_width
    }

    /// Records the current viewport size, used for centering.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport = size;
    }

    /// Returns the last recorded viewport size.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Records the current vertical scroll offset.
    ///
    /// The value is stored as given; clamping is the caller's responsibility.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    /// Returns the last recorded vertical scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Returns the scaled background size, or [`Size::ZERO`] when no
    /// background is loaded.
    #[must_use]
    pub fn scaled_size(&self) -> Size {
        self.scaled_size
    }

    /// Returns the horizontal offset that centers the scaled background.
    ///
    /// This is `floor((viewport_width - scaled_width) / 2)` when the
    /// background is narrower than the viewport and `0` otherwise, including
    /// when no background is loaded.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        if self.scaled.is_none() || self.scaled_size.width >= self.viewport.width {
            0.0
        } else {
            ((self.viewport.width - self.scaled_size.width) / 2.0).floor()
        }
    }

    /// Returns the screen-space top-left corner of the scaled background.
    ///
    /// The origin is `(center_x, -scroll_offset)`: the background moves up as
    /// the offset grows.
    #[must_use]
    pub fn background_origin(&self) -> Point {
        Point::new(self.center_x(), -self.scroll_offset)
    }

    /// Returns the screen-space rectangle covered by the scaled background.
    #[must_use]
    pub fn background_rect(&self) -> Rect {
        Rect::from_origin_size(self.background_origin(), self.scaled_size)
    }

    /// Converts a viewport point into background-space coordinates.
    ///
    /// This is the exact inverse of [`Self::background_to_viewport`].
    #[must_use]
    pub fn viewport_to_background(&self, pt: Point) -> Point {
        pt - self.background_origin().to_vec2()
    }

    /// Converts a background-space point into viewport coordinates.
    #[must_use]
    pub fn background_to_viewport(&self, pt: Point) -> Point {
        pt + self.background_origin().to_vec2()
    }

    /// Returns the translation from background space to viewport space.
    #[must_use]
    pub fn background_translation(&self) -> Vec2 {
        self.background_origin().to_vec2()
    }

    /// Snapshot of the current transform state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportTransformDebugInfo {
        ViewportTransformDebugInfo {
            natural_size: self.background.as_ref().map(B::natural_size),
            scaled_size: self.scaled_size,
            fixed_width: self.fixed_width,
            viewport: self.viewport,
            scroll_offset: self.scroll_offset,
            background_origin: self.background_origin(),
        }
    }

    fn update_scale(&mut self) {
        let Some(background) = &self.background else {
            return;
        };
        let size = scaled_size_for_width(background.natural_size(), self.fixed_width);
        self.scaled = Some(background.scaled_to(size));
        self.scaled_size = size;
    }
}

/// Debug snapshot of a [`ViewportTransform`] state.
#[derive(Clone, Debug)]
pub struct ViewportTransformDebugInfo {
    /// Natural size of the loaded background, if any.
    pub natural_size: Option<Size>,
    /// Size of the background after scaling to the fixed width.
    pub scaled_size: Size,
    /// Target width for the scaled background.
    pub fixed_width: f64,
    /// Current viewport size.
    pub viewport: Size,
    /// Current vertical scroll offset.
    pub scroll_offset: f64,
    /// Screen-space origin of the scaled background.
    pub background_origin: Point,
}
