// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The surface controller: one background, one scroll range, one field set.

use std::fmt;
use std::path::Path;

use formlay_definitions::FieldDefinitionSource;
use formlay_fields::{
    ControlFactory, FieldDescriptor, FieldError, FieldLayout, FieldValue, HeadlessControlFactory,
    LoadReport,
};
use formlay_view::{
    ListenerId, ScrollRange, ScrollRangeDebugInfo, ScrollState, ViewportTransform,
    ViewportTransformDebugInfo, derive_range, wheel_scroll_amount,
};
use kurbo::{Point, Rect, Size};

use crate::background::BackgroundImage;
use crate::config::SurfaceConfig;
use crate::debug::DebugOverlay;
use crate::error::SurfaceError;
use crate::indicator::{HeadlessIndicator, ScrollIndicator, indicator_geometry};
use crate::input::{PanDrag, PointerButton, SurfaceEvent};
use crate::paint::PaintSurface;
use crate::renderable::Renderable;

/// A scrollable background image with interactive fields pinned to it.
///
/// The surface owns the viewport size and runs every update in a fixed
/// order, so the range always reflects the latest viewport and fields always
/// reflect the latest range:
///
/// - background load: rescale, then range, then field positions;
/// - field load: build controls, then field positions;
/// - resize: background layer, indicator, overlay, then range, then field
///   positions;
/// - offset change: range, then (only on an actual change) background
///   offset, indicator value, field positions, and a repaint request.
///
/// ## Minimal example
///
/// ```
/// use formlay_fields::{ControlKind, FieldDescriptor, FieldPlacement};
/// use formlay_surface::{BackgroundImage, Surface, SurfaceConfig};
/// use image::RgbaImage;
/// use kurbo::{Point, Size};
///
/// let mut surface = Surface::headless(SurfaceConfig::default().with_fixed_width(600.0));
/// surface.resize(Size::new(800.0, 800.0));
/// surface
///     .set_background_image(BackgroundImage::from(RgbaImage::new(1000, 2000)))
///     .unwrap();
/// surface
///     .load_fields(vec![FieldDescriptor::new(
///         FieldPlacement::new("name", 50.0, 300.0, 120.0, 24.0),
///         ControlKind::LineEdit,
///     )])
///     .unwrap();
///
/// // 600x1200 background centered in an 800x800 viewport.
/// assert_eq!(surface.max_offset(), 400.0);
/// assert_eq!(surface.scroll_to(150.0), Some(150.0));
/// assert_eq!(surface.field_rect("name").unwrap().origin(), Point::new(150.0, 150.0));
/// assert_eq!(
///     surface.point_to_background_space(Point::new(150.0, 150.0)),
///     Point::new(50.0, 300.0)
/// );
/// ```
pub struct Surface<I = HeadlessIndicator> {
    config: SurfaceConfig,
    viewport: Size,
    transform: ViewportTransform<BackgroundImage>,
    range: ScrollRange,
    fields: FieldLayout,
    factory: Box<dyn ControlFactory>,
    indicator: I,
    debug: DebugOverlay,
    drag: PanDrag,
    repaint: bool,
}

impl<I: fmt::Debug> fmt::Debug for Surface<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("config", &self.config)
            .field("viewport", &self.viewport)
            .field("transform", &self.transform.debug_info())
            .field("range", &self.range)
            .field("fields", &self.fields)
            .field("indicator", &self.indicator)
            .field("debug", &self.debug)
            .field("drag", &self.drag)
            .field("repaint", &self.repaint)
            .finish_non_exhaustive()
    }
}

impl Surface<HeadlessIndicator> {
    /// Creates a surface with headless controls and a headless indicator.
    #[must_use]
    pub fn headless(config: SurfaceConfig) -> Self {
        Self::new(config, HeadlessControlFactory, HeadlessIndicator::new())
    }
}

impl<I: ScrollIndicator> Surface<I> {
    /// Creates an empty surface: no background, no fields, zero viewport.
    pub fn new(
        config: SurfaceConfig,
        factory: impl ControlFactory + 'static,
        mut indicator: I,
    ) -> Self {
        indicator.set_range(0.0, 0.0);
        indicator.set_visible(false);
        let transform = ViewportTransform::new(config.fixed_width);
        Self {
            config: config.with_fixed_width(transform.fixed_width()),
            viewport: Size::ZERO,
            transform,
            range: ScrollRange::new(),
            fields: FieldLayout::new(),
            factory: Box::new(factory),
            indicator,
            debug: DebugOverlay::new(config.debug),
            drag: PanDrag::default(),
            repaint: false,
        }
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    // --- loading ---

    /// Replaces the background image.
    ///
    /// An unusable image is rejected and the previous background, range,
    /// and field positions stay as they were.
    pub fn set_background_image(&mut self, image: BackgroundImage) -> Result<(), SurfaceError> {
        if let Err(err) = self.transform.set_background_image(image) {
            log::warn!("background rejected: {err}");
            return Err(err.into());
        }
        log::debug!(
            "background scaled to {}x{}",
            self.transform.scaled_size().width,
            self.transform.scaled_size().height
        );
        self.sync_range();
        self.relayout();
        self.request_repaint();
        Ok(())
    }

    /// Decodes the image file at `path` and makes it the background.
    ///
    /// Decode failures leave the surface unchanged.
    pub fn load_background(&mut self, path: impl AsRef<Path>) -> Result<(), SurfaceError> {
        let path = path.as_ref();
        let image = BackgroundImage::open(path)
            .inspect_err(|err| log::warn!("background {} not loaded: {err}", path.display()))?;
        self.set_background_image(image)
    }

    /// Sets the width backgrounds are scaled to and re-lays out.
    ///
    /// Non-positive or non-finite widths are ignored.
    pub fn set_fixed_width(&mut self, width: f64) {
        self.transform.set_fixed_width(width);
        if self.transform.fixed_width() == self.config.fixed_width {
            return;
        }
        self.config.fixed_width = self.transform.fixed_width();
        self.sync_range();
        self.relayout();
        self.request_repaint();
    }

    /// Replaces the field set and positions the new controls.
    ///
    /// A rejected set leaves the previous fields loaded. Fields whose
    /// control kind is unknown get a placeholder control and are listed in
    /// the returned report.
    pub fn load_fields(
        &mut self,
        descriptors: Vec<FieldDescriptor>,
    ) -> Result<LoadReport, SurfaceError> {
        let report = self
            .fields
            .load_placements(descriptors, self.factory.as_mut())?;
        self.relayout();
        self.request_repaint();
        Ok(report)
    }

    /// Reads field definitions from `path` with `source` and loads them.
    pub fn load_fields_from(
        &mut self,
        source: &dyn FieldDefinitionSource,
        path: &Path,
    ) -> Result<LoadReport, SurfaceError> {
        let descriptors = source.load_definitions(path)?;
        self.load_fields(descriptors)
    }

    /// Destroys every field control.
    pub fn clear_fields(&mut self) {
        self.fields.clear();
        self.request_repaint();
    }

    // --- viewport and scrolling ---

    /// Records a new viewport size and re-lays out everything.
    pub fn resize(&mut self, size: Size) {
        self.viewport = size;
        self.transform.handle_resize(size);
        self.indicator
            .set_geometry(indicator_geometry(size, self.config.indicator_width));
        self.debug.handle_resize(size);
        log::debug!("viewport resized to {}x{}", size.width, size.height);
        self.sync_range();
        self.relayout();
        self.request_repaint();
    }

    /// Requests scroll offset `offset`, clamped into the valid range.
    ///
    /// Returns the new offset if it changed. Nothing downstream happens
    /// when it did not.
    pub fn scroll_to(&mut self, offset: f64) -> Option<f64> {
        let changed = self.range.set_offset(offset)?;
        self.apply_offset(changed);
        Some(changed)
    }

    /// Scrolls by `delta` pixels.
    pub fn scroll_by(&mut self, delta: f64) -> Option<f64> {
        self.scroll_to(self.range.offset() + delta)
    }

    /// Scrolls by a wheel angle delta using the configured divisor.
    pub fn wheel(&mut self, angle_delta: f64) -> Option<f64> {
        self.scroll_by(wheel_scroll_amount(angle_delta, self.config.wheel_divisor))
    }

    /// Handles the user moving the scroll indicator to `offset`.
    pub fn indicator_moved(&mut self, offset: f64) -> Option<f64> {
        self.scroll_to(offset)
    }

    // --- pointer input ---

    /// Handles a pointer move: drags pan the content and the debug overlay
    /// follows the pointer.
    pub fn pointer_moved(&mut self, position: Point) {
        if let Some(target) = self.drag.target_offset(position) {
            self.scroll_to(target);
        }
        self.debug
            .set_pointer(position, self.point_to_background_space(position));
        if self.debug.is_enabled() {
            self.request_repaint();
        }
    }

    /// Handles a pointer press.
    ///
    /// A primary press on a focusable field focuses it. Anywhere else it
    /// clears focus from every field, and on empty background it also starts
    /// a pan drag.
    pub fn pointer_pressed(&mut self, position: Point, button: PointerButton) {
        if button != PointerButton::Primary {
            return;
        }
        let hit = self.field_at(position).map(str::to_owned);
        self.fields.clear_focus();
        match hit {
            Some(id) => {
                if let Ok(control) = self.fields.control_mut(&id) {
                    control.focus();
                }
            }
            None => self.drag.start(position, self.range.offset()),
        }
    }

    /// Handles a pointer release, ending any pan drag.
    pub fn pointer_released(&mut self, _position: Point, button: PointerButton) {
        if button == PointerButton::Primary && self.drag.end() {
            log::trace!("pan drag ended at offset {}", self.range.offset());
        }
    }

    /// Dispatches an input event.
    pub fn handle_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::Resized(size) => self.resize(size),
            SurfaceEvent::Wheel { delta } => {
                self.wheel(delta);
            }
            SurfaceEvent::IndicatorMoved(offset) => {
                self.indicator_moved(offset);
            }
            SurfaceEvent::PointerMoved(position) => self.pointer_moved(position),
            SurfaceEvent::PointerPressed { position, button } => {
                self.pointer_pressed(position, button);
            }
            SurfaceEvent::PointerReleased { position, button } => {
                self.pointer_released(position, button);
            }
        }
    }

    // --- queries ---

    /// Converts a viewport point into background space.
    #[must_use]
    pub fn point_to_background_space(&self, point: Point) -> Point {
        self.transform.viewport_to_background(point)
    }

    /// Reads the value of field `id`.
    pub fn field_value(&self, id: &str) -> Result<FieldValue, FieldError> {
        self.fields.get_value(id)
    }

    /// Writes the value of field `id`.
    pub fn set_field_value(&mut self, id: &str, value: FieldValue) -> Result<(), FieldError> {
        self.fields.set_value(id, value)
    }

    /// Returns the current viewport rectangle of field `id`.
    pub fn field_rect(&self, id: &str) -> Result<Rect, FieldError> {
        self.fields.absolute_rect(
            id,
            self.transform.background_origin(),
            self.range.offset(),
        )
    }

    /// Returns the topmost field under a viewport point.
    #[must_use]
    pub fn field_at(&self, point: Point) -> Option<&str> {
        self.fields
            .field_at(point, self.transform.background_origin(), self.range.offset())
    }

    /// Turns the debug overlay on or off.
    pub fn set_debug_mode(&mut self, enabled: bool) {
        self.debug.set_enabled(enabled);
        self.request_repaint();
    }

    /// Returns `true` while the debug overlay is on.
    #[must_use]
    pub fn debug_mode(&self) -> bool {
        self.debug.is_enabled()
    }

    /// Returns whether a repaint was requested since the last call, and
    /// clears the request.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint)
    }

    /// Registers a callback run with the new offset after every actual
    /// offset change.
    pub fn on_scroll(&mut self, listener: impl FnMut(f64) + 'static) -> ListenerId {
        self.range.subscribe(listener)
    }

    /// Removes a callback registered with [`Self::on_scroll`].
    pub fn remove_scroll_listener(&mut self, id: ListenerId) -> bool {
        self.range.unsubscribe(id)
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Returns the scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.range.offset()
    }

    /// Returns the largest valid scroll offset.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        self.range.max_offset()
    }

    /// Returns the page step.
    #[must_use]
    pub fn page_step(&self) -> f64 {
        self.range.page_step()
    }

    /// Returns whether scrolling is possible.
    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.range.state()
    }

    /// Returns the background transform.
    #[must_use]
    pub fn transform(&self) -> &ViewportTransform<BackgroundImage> {
        &self.transform
    }

    /// Returns the loaded fields.
    #[must_use]
    pub fn fields(&self) -> &FieldLayout {
        &self.fields
    }

    /// Returns the loaded fields for direct control access.
    ///
    /// Positions are refreshed by the surface on its own triggers; call
    /// [`Self::resize`] or scroll to re-lay out after changing geometry
    /// by hand.
    pub fn fields_mut(&mut self) -> &mut FieldLayout {
        &mut self.fields
    }

    /// Returns the scroll indicator.
    #[must_use]
    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// Returns the scroll indicator for toolkit configuration.
    pub fn indicator_mut(&mut self) -> &mut I {
        &mut self.indicator
    }

    /// Returns the debug overlay.
    #[must_use]
    pub fn debug_overlay(&self) -> &DebugOverlay {
        &self.debug
    }

    /// Returns `true` while a pan drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Snapshot of the surface state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SurfaceDebugInfo {
        SurfaceDebugInfo {
            viewport: self.viewport,
            transform: self.transform.debug_info(),
            range: self.range.debug_info(),
            fields: self.fields.len(),
            debug_mode: self.debug.is_enabled(),
            dragging: self.drag.is_dragging(),
        }
    }

    // --- internals ---

    /// Derives the range from the scaled height and viewport height and
    /// pushes it to the indicator. A re-clamped offset is applied to the
    /// background and indicator; the caller re-lays out fields.
    fn sync_range(&mut self) {
        let (max_offset, page_step) =
            derive_range(self.transform.scaled_size().height, self.viewport.height);
        let before = self.range.state();
        let update = self.range.set_range(max_offset, page_step);
        if update.state != before {
            log::debug!(
                "scroll range {before:?} -> {:?} (max offset {})",
                update.state,
                self.range.max_offset()
            );
        }
        self.indicator
            .set_range(self.range.max_offset(), self.range.page_step());
        self.indicator.set_visible(update.state.is_active());
        if let Some(offset) = update.offset {
            self.transform.set_scroll_offset(offset);
            self.indicator.set_value(offset);
        }
    }

    fn apply_offset(&mut self, offset: f64) {
        self.transform.set_scroll_offset(offset);
        self.indicator.set_value(offset);
        self.relayout();
        self.request_repaint();
    }

    fn relayout(&mut self) {
        let origin = self.transform.background_origin();
        self.fields.update_all_positions(origin, self.range.offset());
        let pointer = self.debug.pointer();
        self.debug
            .set_pointer(pointer, self.transform.viewport_to_background(pointer));
    }

    fn request_repaint(&mut self) {
        self.repaint = true;
    }
}

/// Paints the background layer, then the debug overlay.
///
/// Field controls are toolkit widgets placed through their geometry; they
/// are not painted here.
impl<I: ScrollIndicator> Renderable for Surface<I> {
    fn render(&self, surface: &mut dyn PaintSurface) {
        self.transform.render(surface);
        self.debug.render(surface);
    }

    fn handle_resize(&mut self, size: Size) {
        self.resize(size);
    }
}

/// Debug snapshot of a [`Surface`].
#[derive(Clone, Debug)]
pub struct SurfaceDebugInfo {
    /// Viewport size.
    pub viewport: Size,
    /// Background transform state.
    pub transform: ViewportTransformDebugInfo,
    /// Scroll range state.
    pub range: ScrollRangeDebugInfo,
    /// Number of loaded fields.
    pub fields: usize,
    /// Whether the debug overlay is on.
    pub debug_mode: bool,
    /// Whether a pan drag is active.
    pub dragging: bool,
}
