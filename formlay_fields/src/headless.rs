// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model-only controls for tests and headless hosts.
//!
//! [`HeadlessControl`] keeps the state a real widget would (text, checked
//! state, combo selection, focus, geometry) without drawing anything. Toolkit
//! adapters can use it as a reference for the semantics their widgets should
//! expose through the capability traits.

use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::control::{
    BooleanBearing, Capability, CapabilityMut, Control, SelectionBearing, TextBearing,
};
use crate::descriptor::{Appearance, ControlKind, FieldDescriptor};
use crate::error::UnknownControlKind;
use crate::factory::ControlFactory;

/// Text contents of a label, line edit, or text edit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextState(pub String);

impl TextBearing for TextState {
    fn text(&self) -> String {
        self.0.clone()
    }

    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.0);
    }
}

/// Checked state and caption of a checkbox.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckState {
    /// Caption shown next to the box.
    pub caption: String,
    /// Whether the box is checked.
    pub checked: bool,
}

impl BooleanBearing for CheckState {
    fn is_checked(&self) -> bool {
        self.checked
    }

    fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }
}

/// Options and current selection of a combo box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComboState {
    /// Options in display order.
    pub options: Vec<String>,
    /// Index of the selected option, if any.
    pub selected: Option<usize>,
    /// Text shown when no option is selected.
    pub text: String,
}

impl ComboState {
    /// Builds a combo box that selects `initial` if it is one of `options`
    /// and otherwise shows it as free text.
    #[must_use]
    pub fn new(options: Vec<String>, initial: &str) -> Self {
        let selected = options.iter().position(|o| o == initial);
        let text = if selected.is_some() {
            String::new()
        } else {
            initial.into()
        };
        Self {
            options,
            selected,
            text,
        }
    }
}

impl SelectionBearing for ComboState {
    fn current_text(&self) -> String {
        match self.selected.and_then(|i| self.options.get(i)) {
            Some(option) => option.clone(),
            None => self.text.clone(),
        }
    }

    fn select_text(&mut self, text: &str) -> bool {
        match self.options.iter().position(|o| o == text) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }
}

/// Value held by a [`HeadlessControl`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadlessValue {
    /// Label, line edit, or text edit.
    Text(TextState),
    /// Checkbox.
    Check(CheckState),
    /// Combo box.
    Combo(ComboState),
    /// Error placeholder showing a message; carries no value.
    Placeholder(String),
}

/// A control that records state and geometry without rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessControl {
    value: HeadlessValue,
    focusable: bool,
    focused: bool,
    geometry: Rect,
    appearance: Appearance,
}

impl HeadlessControl {
    fn with_value(value: HeadlessValue, focusable: bool) -> Self {
        Self {
            value,
            focusable,
            focused: false,
            geometry: Rect::ZERO,
            appearance: Appearance::default(),
        }
    }

    /// A read-only text control.
    #[must_use]
    pub fn label(text: impl Into<String>) -> Self {
        Self::with_value(HeadlessValue::Text(TextState(text.into())), false)
    }

    /// An editable single-line text control.
    #[must_use]
    pub fn line_edit(text: impl Into<String>) -> Self {
        Self::with_value(HeadlessValue::Text(TextState(text.into())), true)
    }

    /// A checkbox, initially unchecked.
    #[must_use]
    pub fn checkbox(caption: impl Into<String>) -> Self {
        Self::with_value(
            HeadlessValue::Check(CheckState {
                caption: caption.into(),
                checked: false,
            }),
            true,
        )
    }

    /// A combo box. See [`ComboState::new`] for how `initial` is applied.
    #[must_use]
    pub fn combo_box(options: Vec<String>, initial: &str) -> Self {
        Self::with_value(HeadlessValue::Combo(ComboState::new(options, initial)), true)
    }

    /// A visible error stand-in for `field_id`.
    #[must_use]
    pub fn placeholder(field_id: &str) -> Self {
        Self::with_value(
            HeadlessValue::Placeholder(format!("Error: {field_id}")),
            false,
        )
    }

    /// Returns the held value.
    #[must_use]
    pub fn value(&self) -> &HeadlessValue {
        &self.value
    }

    /// Returns the styling applied by the factory.
    #[must_use]
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }
}

impl Control for HeadlessControl {
    fn set_geometry(&mut self, rect: Rect) {
        self.geometry = rect;
    }

    fn geometry(&self) -> Rect {
        self.geometry
    }

    fn capability(&self) -> Capability<'_> {
        match &self.value {
            HeadlessValue::Text(state) => Capability::Text(state),
            HeadlessValue::Check(state) => Capability::Boolean(state),
            HeadlessValue::Combo(state) => Capability::Selection(state),
            HeadlessValue::Placeholder(_) => Capability::None,
        }
    }

    fn capability_mut(&mut self) -> CapabilityMut<'_> {
        match &mut self.value {
            HeadlessValue::Text(state) => CapabilityMut::Text(state),
            HeadlessValue::Check(state) => CapabilityMut::Boolean(state),
            HeadlessValue::Combo(state) => CapabilityMut::Selection(state),
            HeadlessValue::Placeholder(_) => CapabilityMut::None,
        }
    }

    fn accepts_focus(&self) -> bool {
        self.focusable
    }

    fn focus(&mut self) {
        self.focused = self.focusable;
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn clear_focus(&mut self) {
        self.focused = false;
    }
}

/// Factory for [`HeadlessControl`]s covering every built-in [`ControlKind`].
///
/// Custom kinds are not known to this factory; wrap it in a
/// [`crate::ControlRegistry`] to add them.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadlessControlFactory;

impl HeadlessControlFactory {
    /// Builds the concrete headless control for `descriptor`.
    pub fn build(descriptor: &FieldDescriptor) -> Result<HeadlessControl, UnknownControlKind> {
        let text = descriptor.default_text.as_str();
        let mut control = match &descriptor.kind {
            ControlKind::Label => HeadlessControl::label(text),
            ControlKind::LineEdit | ControlKind::TextEdit => HeadlessControl::line_edit(text),
            ControlKind::Checkbox => HeadlessControl::checkbox(text),
            ControlKind::ComboBox => HeadlessControl::combo_box(descriptor.options.clone(), text),
            ControlKind::Custom => {
                return Err(UnknownControlKind::Custom(descriptor.custom_class.clone()));
            }
            kind @ ControlKind::Unknown(_) => return Err(UnknownControlKind::Kind(kind.clone())),
        };
        control.appearance = descriptor.appearance.clone();
        Ok(control)
    }
}

impl ControlFactory for HeadlessControlFactory {
    fn create_control(
        &mut self,
        descriptor: &FieldDescriptor,
    ) -> Result<Box<dyn Control>, UnknownControlKind> {
        Ok(Box::new(Self::build(descriptor)?))
    }

    fn create_placeholder(
        &mut self,
        descriptor: &FieldDescriptor,
        _error: &UnknownControlKind,
    ) -> Box<dyn Control> {
        Box::new(HeadlessControl::placeholder(descriptor.id()))
    }
}
