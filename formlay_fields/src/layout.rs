// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field layout engine: placements in background space, controls on screen.
//!
//! [`FieldLayout`] owns one placement and one runtime control per field. On
//! every layout pass it maps each placement into viewport space:
//!
//! ```text
//! x = origin.x + placement.x
//! y = placement.y - scroll_offset
//! ```
//!
//! Horizontally, fields follow the background's centering offset.
//! Vertically, they move opposite to the scroll offset, exactly like the
//! background itself, which is drawn at `y = -scroll_offset`.
//!
//! ## Minimal example
//!
//! ```
//! use formlay_fields::{
//!     ControlKind, FieldDescriptor, FieldLayout, FieldPlacement, HeadlessControlFactory,
//! };
//! use kurbo::{Point, Rect};
//!
//! let mut layout = FieldLayout::new();
//! let name = FieldDescriptor::new(
//!     FieldPlacement::new("name", 50.0, 300.0, 120.0, 24.0),
//!     ControlKind::LineEdit,
//! );
//! layout.load_placements(vec![name], &mut HeadlessControlFactory).unwrap();
//!
//! // Background centered at x = 100 and scrolled by 150.
//! let rect = layout.absolute_rect("name", Point::new(100.0, -150.0), 150.0).unwrap();
//! assert_eq!(rect, Rect::new(150.0, 150.0, 270.0, 174.0));
//! ```

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use kurbo::{Point, Rect};

use crate::control::{CapabilityMut, Control, FieldValue, ValueKind};
use crate::descriptor::{FieldDescriptor, FieldPlacement};
use crate::error::{DefinitionError, FieldError};
use crate::factory::ControlFactory;

#[derive(Debug)]
struct FieldEntry {
    placement: FieldPlacement,
    control: Box<dyn Control>,
}

/// Outcome of a successful [`FieldLayout::load_placements`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of fields now loaded.
    pub loaded: usize,
    /// Ids of fields whose control could not be built and that show an error
    /// placeholder instead.
    pub placeholders: Vec<String>,
}

/// Owner of field placements and their runtime controls.
///
/// Fields keep their load order, which is also their stacking order: later
/// fields are on top for hit testing.
#[derive(Debug, Default)]
pub struct FieldLayout {
    fields: Vec<FieldEntry>,
    index: HashMap<String, usize>,
}

impl FieldLayout {
    /// Creates an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that every id in `descriptors` is non-empty and unique.
    pub fn validate(descriptors: &[FieldDescriptor]) -> Result<(), DefinitionError> {
        let mut seen = HashSet::with_capacity(descriptors.len());
        for (index, descriptor) in descriptors.iter().enumerate() {
            let id = descriptor.id();
            if id.is_empty() {
                return Err(DefinitionError::EmptyId { index });
            }
            if !seen.insert(id) {
                return Err(DefinitionError::DuplicateId { id: id.to_string() });
            }
        }
        Ok(())
    }

    /// Replaces every loaded field with `descriptors`.
    ///
    /// The whole set is validated first; on a [`DefinitionError`] nothing is
    /// created and the current fields stay loaded. A descriptor whose control
    /// kind the factory cannot build gets a placeholder control instead, so
    /// one bad field does not break the rest of the set.
    ///
    /// New controls have no geometry until the next layout pass
    /// ([`Self::update_all_positions`]).
    pub fn load_placements(
        &mut self,
        descriptors: Vec<FieldDescriptor>,
        factory: &mut dyn ControlFactory,
    ) -> Result<LoadReport, DefinitionError> {
        Self::validate(&descriptors)?;
        self.clear();

        let mut report = LoadReport::default();
        self.fields.reserve(descriptors.len());
        for descriptor in descriptors {
            let control = match factory.create_control(&descriptor) {
                Ok(control) => control,
                Err(err) => {
                    log::warn!(
                        "field `{}`: {err}; showing a placeholder",
                        descriptor.id()
                    );
                    report.placeholders.push(descriptor.id().to_string());
                    factory.create_placeholder(&descriptor, &err)
                }
            };
            self.index
                .insert(descriptor.placement.id.clone(), self.fields.len());
            self.fields.push(FieldEntry {
                placement: descriptor.placement,
                control,
            });
        }
        report.loaded = self.fields.len();
        log::debug!(
            "loaded {} fields ({} placeholders)",
            report.loaded,
            report.placeholders.len()
        );
        Ok(report)
    }

    /// Returns the viewport rectangle of `id` for the given background origin
    /// and scroll offset.
    ///
    /// `x = origin.x + placement.x`, `y = placement.y - scroll_offset`; the
    /// size is copied from the placement.
    pub fn absolute_rect(
        &self,
        id: &str,
        origin: Point,
        scroll_offset: f64,
    ) -> Result<Rect, FieldError> {
        let entry = self.entry(id)?;
        Ok(place(&entry.placement, origin, scroll_offset))
    }

    /// Moves every control to its viewport rectangle for the given background
    /// origin and scroll offset. Placements are not modified.
    pub fn update_all_positions(&mut self, origin: Point, scroll_offset: f64) {
        for entry in &mut self.fields {
            let rect = place(&entry.placement, origin, scroll_offset);
            entry.control.set_geometry(rect);
        }
    }

    /// Returns the topmost field whose viewport rectangle contains `point`.
    #[must_use]
    pub fn field_at(&self, point: Point, origin: Point, scroll_offset: f64) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|entry| place(&entry.placement, origin, scroll_offset).contains(point))
            .map(|entry| entry.placement.id.as_str())
    }

    /// Reads the value of `id` through its control's capability.
    pub fn get_value(&self, id: &str) -> Result<FieldValue, FieldError> {
        let entry = self.entry(id)?;
        entry
            .control
            .capability()
            .value()
            .ok_or_else(|| FieldError::NoCapability { id: id.to_string() })
    }

    /// Writes `value` to `id` through its control's capability.
    ///
    /// Text values may also be written to selection-bearing controls. The
    /// selection only changes when the text matches one of the options.
    pub fn set_value(&mut self, id: &str, value: FieldValue) -> Result<(), FieldError> {
        let entry = self.entry_mut(id)?;
        let mismatch = |expected: ValueKind, found: ValueKind| FieldError::TypeMismatch {
            id: id.to_string(),
            expected,
            found,
        };
        match (entry.control.capability_mut(), value) {
            (CapabilityMut::Text(control), FieldValue::Text(text)) => control.set_text(&text),
            (CapabilityMut::Boolean(control), FieldValue::Bool(checked)) => {
                control.set_checked(checked);
            }
            (
                CapabilityMut::Selection(control),
                FieldValue::Selection(text) | FieldValue::Text(text),
            ) => {
                if !control.select_text(&text) {
                    log::debug!("field `{id}`: `{text}` is not one of its options");
                }
            }
            (CapabilityMut::Text(_), other) => return Err(mismatch(ValueKind::Text, other.kind())),
            (CapabilityMut::Boolean(_), other) => {
                return Err(mismatch(ValueKind::Boolean, other.kind()));
            }
            (CapabilityMut::Selection(_), other) => {
                return Err(mismatch(ValueKind::Selection, other.kind()));
            }
            (CapabilityMut::None, _) => {
                return Err(FieldError::NoCapability { id: id.to_string() });
            }
        }
        Ok(())
    }

    /// Returns the placement of `id`.
    pub fn placement(&self, id: &str) -> Result<&FieldPlacement, FieldError> {
        self.entry(id).map(|entry| &entry.placement)
    }

    /// Returns the runtime control of `id`.
    pub fn control(&self, id: &str) -> Result<&dyn Control, FieldError> {
        self.entry(id).map(|entry| &*entry.control)
    }

    /// Returns the runtime control of `id` for direct manipulation.
    pub fn control_mut(&mut self, id: &str) -> Result<&mut dyn Control, FieldError> {
        self.entry_mut(id).map(|entry| &mut *entry.control as &mut dyn Control)
    }

    /// Iterates placements in load order.
    pub fn placements(&self) -> impl Iterator<Item = &FieldPlacement> + '_ {
        self.fields.iter().map(|entry| &entry.placement)
    }

    /// Returns `true` if `id` is loaded.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Returns the number of loaded fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Drops keyboard focus from every control.
    pub fn clear_focus(&mut self) {
        for entry in &mut self.fields {
            entry.control.clear_focus();
        }
    }

    /// Destroys every control and forgets every placement.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.index.clear();
    }

    fn entry(&self, id: &str) -> Result<&FieldEntry, FieldError> {
        self.index
            .get(id)
            .map(|&i| &self.fields[i])
            .ok_or_else(|| FieldError::NotFound { id: id.to_string() })
    }

    fn entry_mut(&mut self, id: &str) -> Result<&mut FieldEntry, FieldError> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.fields[i]),
            None => Err(FieldError::NotFound { id: id.to_string() }),
        }
    }
}

fn place(placement: &FieldPlacement, origin: Point, scroll_offset: f64) -> Rect {
    let x = origin.x + placement.origin.x;
    let y = placement.origin.y - scroll_offset;
    Rect::from_origin_size((x, y), placement.size)
}
