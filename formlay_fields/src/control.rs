// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime controls and the narrow capability contracts used to read and
//! write their values.
//!
//! The layout engine never knows a control's concrete type. It positions
//! controls through [`Control::set_geometry`] and moves values through exactly
//! one [`Capability`]:
//!
//! - [`TextBearing`]: labels, line edits, text edits.
//! - [`BooleanBearing`]: checkboxes.
//! - [`SelectionBearing`]: combo boxes.

use alloc::string::String;
use core::fmt;

use kurbo::Rect;

/// Shape of a value moved through a capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Free text.
    Text,
    /// On/off.
    Boolean,
    /// One of a fixed set of options.
    Selection,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Selection => "selection",
        })
    }
}

/// A field value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    /// Text of a text-bearing control.
    Text(String),
    /// State of a boolean-bearing control.
    Bool(bool),
    /// Current option text of a selection-bearing control.
    Selection(String),
}

impl FieldValue {
    /// Returns the shape of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Selection(_) => ValueKind::Selection,
        }
    }

    /// Returns the text of a text or selection value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::Selection(text) => Some(text),
            Self::Bool(_) => None,
        }
    }
}

/// A control that displays and edits text.
pub trait TextBearing {
    /// Returns the current text.
    fn text(&self) -> String;
    /// Replaces the current text.
    fn set_text(&mut self, text: &str);
}

/// A control that holds an on/off state.
pub trait BooleanBearing {
    /// Returns whether the control is checked.
    fn is_checked(&self) -> bool;
    /// Sets the checked state.
    fn set_checked(&mut self, checked: bool);
}

/// A control that selects one of a fixed set of options.
pub trait SelectionBearing {
    /// Returns the text of the current selection (or the free text shown when
    /// nothing is selected).
    fn current_text(&self) -> String;
    /// Selects the option whose text equals `text`.
    ///
    /// Returns `false`, leaving the selection unchanged, when no option
    /// matches.
    fn select_text(&mut self, text: &str) -> bool;
}

/// Shared view of a control's value capability.
#[derive(Clone, Copy)]
pub enum Capability<'a> {
    /// Text-bearing control.
    Text(&'a dyn TextBearing),
    /// Boolean-bearing control.
    Boolean(&'a dyn BooleanBearing),
    /// Selection-bearing control.
    Selection(&'a dyn SelectionBearing),
    /// Control without a value, such as an error placeholder.
    None,
}

impl fmt::Debug for Capability<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text(_) => "Capability::Text",
            Self::Boolean(_) => "Capability::Boolean",
            Self::Selection(_) => "Capability::Selection",
            Self::None => "Capability::None",
        })
    }
}

impl Capability<'_> {
    /// Returns the value shape this capability carries.
    #[must_use]
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Text(_) => Some(ValueKind::Text),
            Self::Boolean(_) => Some(ValueKind::Boolean),
            Self::Selection(_) => Some(ValueKind::Selection),
            Self::None => None,
        }
    }

    /// Reads the current value.
    #[must_use]
    pub fn value(&self) -> Option<FieldValue> {
        match self {
            Self::Text(c) => Some(FieldValue::Text(c.text())),
            Self::Boolean(c) => Some(FieldValue::Bool(c.is_checked())),
            Self::Selection(c) => Some(FieldValue::Selection(c.current_text())),
            Self::None => None,
        }
    }
}

/// Mutable view of a control's value capability.
pub enum CapabilityMut<'a> {
    /// Text-bearing control.
    Text(&'a mut dyn TextBearing),
    /// Boolean-bearing control.
    Boolean(&'a mut dyn BooleanBearing),
    /// Selection-bearing control.
    Selection(&'a mut dyn SelectionBearing),
    /// Control without a value.
    None,
}

impl fmt::Debug for CapabilityMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text(_) => "CapabilityMut::Text",
            Self::Boolean(_) => "CapabilityMut::Boolean",
            Self::Selection(_) => "CapabilityMut::Selection",
            Self::None => "CapabilityMut::None",
        })
    }
}

/// A live interactive control owned by the layout engine.
///
/// Toolkit adapters implement this for their widgets. The engine only ever
/// moves controls and routes values through their capability.
pub trait Control {
    /// Moves and resizes the control to `rect` in viewport coordinates.
    fn set_geometry(&mut self, rect: Rect);

    /// Returns the rectangle last applied with [`Self::set_geometry`].
    fn geometry(&self) -> Rect;

    /// Returns the control's value capability.
    fn capability(&self) -> Capability<'_>;

    /// Returns the control's value capability for writing.
    fn capability_mut(&mut self) -> CapabilityMut<'_>;

    /// Returns `true` if clicking the control should give it keyboard focus.
    fn accepts_focus(&self) -> bool {
        false
    }

    /// Gives the control keyboard focus if it accepts focus.
    fn focus(&mut self) {}

    /// Returns `true` while the control holds keyboard focus.
    fn has_focus(&self) -> bool {
        false
    }

    /// Drops keyboard focus, if held.
    fn clear_focus(&mut self) {}
}

impl fmt::Debug for dyn Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("geometry", &self.geometry())
            .field("capability", &self.capability())
            .finish_non_exhaustive()
    }
}
