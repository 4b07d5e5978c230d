// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Whether vertical scrolling is currently possible.
///
/// This is reported by [`crate::ScrollRange`] and is what hosts use to show or
/// hide a scroll indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScrollState {
    /// The content fits in the viewport: the maximum offset is zero and the
    /// offset is pinned at zero.
    #[default]
    Inactive,
    /// The content is taller than the viewport and the offset may move
    /// freely within `[0, max_offset]`.
    Active,
}

impl ScrollState {
    /// Returns `true` when a scroll indicator should be shown.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}
