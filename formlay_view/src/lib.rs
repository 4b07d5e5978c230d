// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=formlay_view --heading-base-level=0

//! Formlay View: background placement and vertical scroll range primitives.
//!
//! This crate provides the small, headless models behind a "document card"
//! surface: a background image (for example a scanned form) displayed at a
//! fixed width, centered horizontally in a resizable viewport and scrolled
//! vertically. It focuses on:
//! - Scaling a background to a fixed width while preserving aspect ratio.
//! - Centering the scaled background and deriving its screen-space origin.
//! - Converting points between viewport space and background space.
//! - Owning the valid vertical scroll range and clamping offsets into it.
//!
//! It does **not** decode images, draw pixels, or know about widgets. Callers
//! are expected to:
//! - Provide a background type implementing [`BackgroundSource`].
//! - Feed viewport sizes and scroll requests in, in a fixed order: viewport
//!   size first, then [`ScrollRange::set_range`], then field positions.
//! - Position any overlaid content from [`ViewportTransform::background_origin`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use formlay_view::{BackgroundSource, ScrollRange, ViewportTransform, derive_range};
//!
//! #[derive(Clone, Debug)]
//! struct Scan(Size);
//!
//! impl BackgroundSource for Scan {
//!     fn natural_size(&self) -> Size {
//!         self.0
//!     }
//!
//!     fn scaled_to(&self, size: Size) -> Self {
//!         Self(size)
//!     }
//! }
//!
//! let mut transform = ViewportTransform::new(600.0);
//! transform.set_viewport_size(Size::new(800.0, 800.0));
//! transform.set_background_image(Scan(Size::new(1000.0, 2000.0))).unwrap();
//! assert_eq!(transform.scaled_size(), Size::new(600.0, 1200.0));
//!
//! let mut range = ScrollRange::new();
//! let (max_offset, page_step) = derive_range(transform.scaled_size().height, 800.0);
//! range.set_range(max_offset, page_step);
//! range.set_offset(150.0);
//! transform.set_scroll_offset(range.offset());
//!
//! // The background is centered horizontally and drawn at `y = -offset`.
//! assert_eq!(transform.background_origin(), Point::new(100.0, -150.0));
//! // A point in the viewport maps back into background space.
//! let bg = transform.viewport_to_background(Point::new(150.0, 150.0));
//! assert_eq!(bg, Point::new(50.0, 300.0));
//! ```
//!
//! ## Design notes
//!
//! - Only vertical scrolling exists. There is no zoom or rotation; the only
//!   scale is the one that maps the background's natural width to the fixed
//!   width.
//! - Device-pixel quantities stay integral: scaled height is rounded,
//!   centering and page step floor, and scroll offsets are whole pixels.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod background;
mod modes;
mod scroll;
mod transform;

pub use background::{BackgroundSource, InvalidImage, scaled_size_for_width};
pub use modes::ScrollState;
pub use scroll::{
    DEFAULT_WHEEL_DIVISOR, ListenerId, RangeUpdate, ScrollRange, ScrollRangeDebugInfo,
    derive_range, wheel_scroll_amount,
};
pub use transform::{ViewportTransform, ViewportTransformDebugInfo};
