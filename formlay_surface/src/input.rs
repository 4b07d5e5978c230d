// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events understood by the surface, and the anchor used for panning.
//!
//! A pan drag remembers where the pointer went down and what the scroll
//! offset was at that moment. Every move maps back to an absolute offset, so
//! sub-pixel movement accumulates instead of being rounded away per event.
//!
//! ```
//! use formlay_surface::PanDrag;
//! use kurbo::Point;
//!
//! let mut drag = PanDrag::default();
//! drag.start(Point::new(10.0, 400.0), 200.0);
//! // Dragging the content up scrolls further down the page.
//! assert_eq!(drag.target_offset(Point::new(10.0, 375.0)), Some(225.0));
//! assert!(drag.end());
//! assert_eq!(drag.target_offset(Point::new(10.0, 0.0)), None);
//! ```

use kurbo::{Point, Size};

/// Pointer button of a press or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left button.
    Primary,
    /// Usually the right button.
    Secondary,
    /// Usually the wheel button.
    Auxiliary,
}

/// An input event delivered to [`crate::Surface::handle_event`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceEvent {
    /// The viewport changed size.
    Resized(Size),
    /// The wheel turned by `delta` angle units (120 per notch); positive
    /// away from the user.
    Wheel {
        /// Vertical angle delta.
        delta: f64,
    },
    /// The user moved the scroll indicator to this offset.
    IndicatorMoved(f64),
    /// The pointer moved to a viewport position.
    PointerMoved(Point),
    /// A pointer button went down.
    PointerPressed {
        /// Viewport position.
        position: Point,
        /// Button pressed.
        button: PointerButton,
    },
    /// A pointer button went up.
    PointerReleased {
        /// Viewport position.
        position: Point,
        /// Button released.
        button: PointerButton,
    },
}

/// Tracks a pointer drag that pans the content 1:1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanDrag {
    anchor: Option<PanAnchor>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PanAnchor {
    pointer: Point,
    offset: f64,
}

impl PanDrag {
    /// Starts a drag with the pointer at `pointer` and the content scrolled
    /// to `offset`.
    pub fn start(&mut self, pointer: Point, offset: f64) {
        self.anchor = Some(PanAnchor { pointer, offset });
    }

    /// Returns the scroll offset that keeps the content under the pointer,
    /// before any clamping.
    ///
    /// Returns `None` when no drag is active.
    #[must_use]
    pub fn target_offset(&self, pointer: Point) -> Option<f64> {
        self.anchor
            .map(|anchor| anchor.offset - (pointer.y - anchor.pointer.y))
    }

    /// Ends the drag. Returns `false` if none was active.
    pub fn end(&mut self) -> bool {
        self.anchor.take().is_some()
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }
}
