// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoded background pixels and the background layer.

use std::path::Path;

use formlay_view::{BackgroundSource, InvalidImage, ViewportTransform};
use image::RgbaImage;
use image::imageops::{self, FilterType};
use kurbo::Size;

use crate::paint::PaintSurface;
use crate::renderable::Renderable;

/// An RGBA8 background image.
///
/// Scaling resamples with a Catmull-Rom filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackgroundImage {
    pixels: RgbaImage,
}

impl BackgroundImage {
    /// Decodes the image file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, image::ImageError> {
        Ok(Self::from(image::open(path)?.to_rgba8()))
    }

    /// Decodes an encoded image held in memory.
    pub fn from_memory(bytes: &[u8]) -> Result<Self, image::ImageError> {
        Ok(Self::from(image::load_from_memory(bytes)?.to_rgba8()))
    }

    /// Wraps tightly packed, row-major RGBA8 pixels.
    ///
    /// Fails when `data` does not hold exactly `width * height` pixels.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Result<Self, InvalidImage> {
        RgbaImage::from_raw(width, height, data)
            .map(Self::from)
            .ok_or(InvalidImage {
                width: f64::from(width),
                height: f64::from(height),
            })
    }

    /// Returns the pixel buffer.
    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Returns the width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Returns the height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

impl From<RgbaImage> for BackgroundImage {
    fn from(pixels: RgbaImage) -> Self {
        Self { pixels }
    }
}

impl BackgroundSource for BackgroundImage {
    fn natural_size(&self) -> Size {
        Size::new(f64::from(self.width()), f64::from(self.height()))
    }

    fn scaled_to(&self, size: Size) -> Self {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "scaled sizes are whole pixels well inside u32"
        )]
        let (width, height) = (
            size.width.round().max(1.0) as u32,
            size.height.round().max(1.0) as u32,
        );
        if (width, height) == self.pixels.dimensions() {
            return self.clone();
        }
        Self::from(imageops::resize(
            &self.pixels,
            width,
            height,
            FilterType::CatmullRom,
        ))
    }
}

/// The background layer: draws the scaled background at its origin.
impl Renderable for ViewportTransform<BackgroundImage> {
    fn render(&self, surface: &mut dyn PaintSurface) {
        if let Some(image) = self.scaled_background() {
            surface.draw_image(self.background_origin(), image);
        }
    }

    fn handle_resize(&mut self, size: Size) {
        self.set_viewport_size(size);
    }
}
