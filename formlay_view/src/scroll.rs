// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical scroll range: valid offsets, page step, and change notification.
//!
//! [`ScrollRange`] owns the scroll offset and the domain `[0, max_offset]` it
//! lives in. Every request goes through [`ScrollRange::set_offset`], which
//! clamps it and reports a change only when the stored value actually moves.
//! That "notify only on change" rule is what lets a host wire a scroll
//! indicator both ways (indicator → range → indicator) without feedback loops.
//!
//! ## Minimal example
//!
//! ```
//! use formlay_view::{ScrollRange, ScrollState, derive_range};
//!
//! let mut range = ScrollRange::new();
//!
//! // Content 1200px tall in an 800px viewport.
//! let (max_offset, page_step) = derive_range(1200.0, 800.0);
//! let update = range.set_range(max_offset, page_step);
//! assert_eq!(update.state, ScrollState::Active);
//! assert_eq!(range.page_step(), 400.0);
//!
//! // Requests are clamped into [0, 400].
//! assert_eq!(range.set_offset(500.0), Some(400.0));
//! // Asking for the same clamped value again is not a change.
//! assert_eq!(range.set_offset(9_000.0), None);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`/`round`

use crate::modes::ScrollState;

/// Scroll-amount divisor applied to wheel deltas by default.
///
/// A standard wheel notch reports an angle delta of 120, which scrolls 40
/// pixels with this divisor.
pub const DEFAULT_WHEEL_DIVISOR: f64 = 3.0;

/// Derives `(max_offset, page_step)` for content of `content_height` shown in
/// a viewport of `viewport_height`.
///
/// When the content overflows the viewport by at least a whole pixel, the
/// maximum offset is the overflow floored to whole pixels and the page step is
/// half the viewport (floored). Otherwise both are zero.
#[must_use]
pub fn derive_range(content_height: f64, viewport_height: f64) -> (f64, f64) {
    let viewport_height = viewport_height.max(0.0);
    let max_offset = (content_height - viewport_height).floor();
    if max_offset > 0.0 {
        (max_offset, (viewport_height / 2.0).floor())
    } else {
        (0.0, 0.0)
    }
}

/// Converts a wheel angle delta into a scroll amount in pixels.
///
/// The amount is `floor(-angle_delta / divisor)`: scrolling the wheel away
/// from the user (positive delta) moves the content down (negative amount).
/// The result is monotonic in the delta. A non-positive or non-finite divisor
/// yields `0`.
#[must_use]
pub fn wheel_scroll_amount(angle_delta: f64, divisor: f64) -> f64 {
    if !divisor.is_finite() || divisor <= 0.0 || !angle_delta.is_finite() {
        return 0.0;
    }
    (-angle_delta / divisor).floor()
}

/// Handle for a change listener registered with [`ScrollRange::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

/// Result of [`ScrollRange::set_range`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeUpdate {
    /// State after the update; hosts show a scroll indicator when active.
    pub state: ScrollState,
    /// New offset if re-clamping into the new range moved it.
    pub offset: Option<f64>,
}

/// Owner of the vertical scroll offset and its valid range.
///
/// The range is *inactive* while `max_offset == 0`: the offset is pinned at
/// zero and no scrolling is possible. It becomes *active* when content is
/// taller than the viewport. Both transitions happen through
/// [`ScrollRange::set_range`].
///
/// Offsets are whole device pixels; requests are rounded before clamping.
pub struct ScrollRange {
    max_offset: f64,
    page_step: f64,
    offset: f64,
    revision: u64,
    listeners: Vec<(ListenerId, Box<dyn FnMut(f64)>)>,
    next_listener: u32,
}

impl fmt::Debug for ScrollRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollRange")
            .field("max_offset", &self.max_offset)
            .field("page_step", &self.page_step)
            .field("offset", &self.offset)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .field("next_listener", &self.next_listener)
            .finish()
    }
}

impl Default for ScrollRange {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollRange {
    /// Creates an inactive range with the offset at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_offset: 0.0,
            page_step: 0.0,
            offset: 0.0,
            revision: 0,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Sets the valid range `[0, max_offset]` and the page step.
    ///
    /// `max_offset` is floored to whole pixels. A value below one or a
    /// non-finite one makes the range inactive and forces the page step to
    /// zero. The stored offset is re-clamped into the
    /// new range; if that moves it, listeners are notified exactly as for
    /// [`Self::set_offset`].
    pub fn set_range(&mut self, max_offset: f64, page_step: f64) -> RangeUpdate {
        let max_offset = max_offset.floor();
        if max_offset.is_finite() && max_offset > 0.0 {
            self.max_offset = max_offset;
            self.page_step = if page_step.is_finite() {
                page_step.max(0.0)
            } else {
                0.0
            };
        } else {
            self.max_offset = 0.0;
            self.page_step = 0.0;
        }
        let offset = self.set_offset(self.offset);
        RangeUpdate {
            state: self.state(),
            offset,
        }
    }

    /// Clamps `requested` into `[0, max_offset]` and stores it.
    ///
    /// Returns the new offset if it differs from the previously stored one and
    /// `None` otherwise. Listeners run only on an actual change. A NaN request
    /// is ignored.
    pub fn set_offset(&mut self, requested: f64) -> Option<f64> {
        if requested.is_nan() {
            return None;
        }
        let clamped = requested.round().clamp(0.0, self.max_offset);
        if clamped == self.offset {
            return None;
        }
        self.offset = clamped;
        self.revision += 1;
        for (_, listener) in &mut self.listeners {
            listener(clamped);
        }
        Some(clamped)
    }

    /// Moves the offset by `delta` pixels, clamping as [`Self::set_offset`].
    pub fn scroll_by(&mut self, delta: f64) -> Option<f64> {
        self.set_offset(self.offset + delta)
    }

    /// Moves the offset by a wheel angle delta using `divisor`.
    ///
    /// See [`wheel_scroll_amount`].
    pub fn scroll_by_wheel(&mut self, angle_delta: f64, divisor: f64) -> Option<f64> {
        self.scroll_by(wheel_scroll_amount(angle_delta, divisor))
    }

    /// Returns the current offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns the maximum valid offset.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    /// Returns the page step (zero while inactive).
    #[must_use]
    pub fn page_step(&self) -> f64 {
        self.page_step
    }

    /// Returns whether scrolling is currently possible.
    #[must_use]
    pub fn state(&self) -> ScrollState {
        if self.max_offset > 0.0 {
            ScrollState::Active
        } else {
            ScrollState::Inactive
        }
    }

    /// Returns a counter that increments on every actual offset change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a listener called with the new offset on every actual change.
    pub fn subscribe(&mut self, listener: impl FnMut(f64) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener = self.next_listener.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Snapshot of the current range state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ScrollRangeDebugInfo {
        ScrollRangeDebugInfo {
            state: self.state(),
            offset: self.offset,
            max_offset: self.max_offset,
            page_step: self.page_step,
            revision: self.revision,
            listeners: self.listeners.len(),
        }
    }
}

/// Debug snapshot of a [`ScrollRange`] state.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollRangeDebugInfo {
    /// Whether scrolling is possible.
    pub state: ScrollState,
    /// Current offset.
    pub offset: f64,
    /// Maximum valid offset.
    pub max_offset: f64,
    /// Page step.
    pub page_step: f64,
    /// Number of actual offset changes so far.
    pub revision: u64,
    /// Number of registered listeners.
    pub listeners: usize,
}
