// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=formlay_surface --heading-base-level=0

//! Formlay Surface: a scrollable background image with interactive fields.
//!
//! A [`Surface`] shows a background image scaled to a fixed width, centered
//! horizontally and scrolled vertically, with interactive controls pinned to
//! positions on that image. It wires together:
//!
//! - `formlay_view`: background scaling, centering and the scroll range.
//! - `formlay_fields`: field descriptors, control construction and layout.
//! - `formlay_definitions`: where field descriptors are read from.
//!
//! and talks to the host toolkit through three seams:
//!
//! - [`PaintSurface`]: draw the background image and the debug overlay.
//! - [`ScrollIndicator`]: a scroll bar that mirrors and drives the offset.
//! - [`formlay_fields::ControlFactory`]: build the interactive controls.
//!
//! Input arrives as [`SurfaceEvent`]s. The surface never paints on its own; it
//! latches a repaint request that the host polls with
//! [`Surface::take_repaint_request`] and then renders with
//! [`Renderable::render`].
//!
//! ## Minimal example
//!
//! ```
//! use formlay_surface::{
//!     BackgroundImage, PaintOp, PaintRecorder, Renderable, Surface, SurfaceConfig, SurfaceEvent,
//! };
//! use image::RgbaImage;
//! use kurbo::{Point, Size};
//!
//! let mut surface = Surface::headless(SurfaceConfig::default().with_fixed_width(600.0));
//! surface.handle_event(SurfaceEvent::Resized(Size::new(600.0, 800.0)));
//! surface
//!     .set_background_image(BackgroundImage::from(RgbaImage::new(1000, 2000)))
//!     .unwrap();
//!
//! // One wheel notch towards the user scrolls 40px.
//! surface.handle_event(SurfaceEvent::Wheel { delta: -120.0 });
//! assert_eq!(surface.scroll_offset(), 40.0);
//! assert!(surface.indicator().is_visible());
//!
//! if surface.take_repaint_request() {
//!     let mut frame = PaintRecorder::new();
//!     surface.render(&mut frame);
//!     assert!(matches!(
//!         frame.ops()[0],
//!         PaintOp::Image { origin, .. } if origin == Point::new(0.0, -40.0)
//!     ));
//! }
//! ```
//!
//! Logging goes through the `log` facade; install any logger to see loads,
//! resizes and scroll range transitions.

mod background;
mod config;
mod debug;
mod error;
mod indicator;
mod input;
mod paint;
mod renderable;
mod surface;

pub use background::BackgroundImage;
pub use config::SurfaceConfig;
pub use debug::{CROSSHAIR_COLOR, DebugOverlay, READOUT_FILL, READOUT_TEXT_COLOR};
pub use error::SurfaceError;
pub use indicator::{HeadlessIndicator, ScrollIndicator, indicator_geometry};
pub use input::{PanDrag, PointerButton, SurfaceEvent};
pub use paint::{LineStyle, PaintOp, PaintRecorder, PaintSurface};
pub use renderable::Renderable;
pub use surface::{Surface, SurfaceDebugInfo};
