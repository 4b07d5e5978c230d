// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::paint::PaintSurface;

/// A layer of the surface that draws itself and follows viewport resizes.
///
/// Layers are independent: each one is told about the new viewport size and
/// each one paints into the same [`PaintSurface`], in the order the surface
/// chooses.
pub trait Renderable {
    /// Paints the layer.
    fn render(&self, surface: &mut dyn PaintSurface);

    /// Records a new viewport size.
    fn handle_resize(&mut self, size: Size);
}
