// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

/// A background image as seen by [`crate::ViewportTransform`].
///
/// The transform never inspects pixels. It only needs the natural size of the
/// image and a way to obtain a resampled copy at a given device size. Pixel
/// formats, decoding, and the choice of resampling filter belong to the
/// implementor.
pub trait BackgroundSource: Sized {
    /// Natural (unscaled) size of the image in pixels.
    fn natural_size(&self) -> Size;

    /// Returns a copy of the image resampled to exactly `size`.
    ///
    /// `size` is computed by [`scaled_size_for_width`], so it always preserves
    /// the natural aspect ratio up to whole-pixel rounding.
    fn scaled_to(&self, size: Size) -> Self;
}

/// Error returned when a background cannot be used.
///
/// Rejecting an image is always a no-op for the transform: the previously
/// loaded background, if any, is retained.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[error("background image has unusable size {width}x{height}")]
pub struct InvalidImage {
    /// Natural width reported by the rejected image.
    pub width: f64,
    /// Natural height reported by the rejected image.
    pub height: f64,
}

impl InvalidImage {
    /// Validates a natural size, returning an error when it cannot be scaled.
    pub(crate) fn check(size: Size) -> Result<(), Self> {
        let usable = size.width.is_finite()
            && size.height.is_finite()
            && size.width > 0.0
            && size.height > 0.0;
        if usable {
            Ok(())
        } else {
            Err(Self {
                width: size.width,
                height: size.height,
            })
        }
    }
}

/// Computes the size of `natural` scaled so its width equals `width`.
///
/// The aspect ratio is preserved and the height is rounded to the nearest
/// whole pixel. Degenerate inputs produce [`Size::ZERO`].
#[must_use]
pub fn scaled_size_for_width(natural: Size, width: f64) -> Size {
    if InvalidImage::check(natural).is_err() || !width.is_finite() || width <= 0.0 {
        return Size::ZERO;
    }
    let height = (natural.height * width / natural.width).round();
    Size::new(width, height)
}
