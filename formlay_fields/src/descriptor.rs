// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field placements and the appearance data that travels with them.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect, Size};

/// Position and size of a field in background-image coordinates.
///
/// Placements are immutable once loaded. The on-screen rectangle is derived
/// from the placement and the current background origin on every layout pass;
/// it is never stored here.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldPlacement {
    /// Unique, non-empty identifier of the field.
    pub id: String,
    /// Top-left corner in background space.
    pub origin: Point,
    /// Size in pixels; not scaled with the background.
    pub size: Size,
}

impl FieldPlacement {
    /// Default width of a field when the definition does not specify one.
    pub const DEFAULT_WIDTH: f64 = 100.0;
    /// Default height of a field when the definition does not specify one.
    pub const DEFAULT_HEIGHT: f64 = 30.0;

    /// Creates a placement at `(x, y)` in background space.
    #[must_use]
    pub fn new(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Returns the placement rectangle in background space.
    #[must_use]
    pub fn background_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

impl Default for FieldPlacement {
    fn default() -> Self {
        Self::new(String::new(), 0.0, 0.0, Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

/// Kind of interactive control a field is rendered with.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ControlKind {
    /// Read-only text.
    #[default]
    Label,
    /// Single-line text input.
    LineEdit,
    /// Multi-line text input.
    TextEdit,
    /// Boolean toggle.
    Checkbox,
    /// Pick one of a fixed set of options.
    ComboBox,
    /// Control built by a registered constructor keyed by
    /// [`FieldDescriptor::custom_class`].
    Custom,
    /// A kind name no factory knows about.
    Unknown(String),
}

impl ControlKind {
    /// Parses a kind name as used in field definitions.
    ///
    /// Unrecognized names are preserved as [`ControlKind::Unknown`] so the
    /// factory can report them.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "label" => Self::Label,
            "line_edit" => Self::LineEdit,
            "text_edit" => Self::TextEdit,
            "checkbox" => Self::Checkbox,
            "combo_box" => Self::ComboBox,
            "custom" => Self::Custom,
            other => Self::Unknown(other.into()),
        }
    }

    /// Returns the definition name of this kind.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Label => "label",
            Self::LineEdit => "line_edit",
            Self::TextEdit => "text_edit",
            Self::Checkbox => "checkbox",
            Self::ComboBox => "combo_box",
            Self::Custom => "custom",
            Self::Unknown(name) => name,
        }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text alignment inside a control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// Align to the left edge.
    #[default]
    Left,
    /// Center horizontally and vertically.
    Center,
    /// Align to the right edge.
    Right,
    /// Align to the top edge.
    Top,
    /// Align to the bottom edge.
    Bottom,
}

impl Alignment {
    /// Parses an alignment name, returning `None` for unknown names.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }
}

/// Styling attributes a control factory applies. The layout engine never
/// reads these.
#[derive(Clone, Debug, PartialEq)]
pub struct Appearance {
    /// Font size in points.
    pub font_size: f64,
    /// Whether text is bold.
    pub bold: bool,
    /// Text alignment.
    pub alignment: Alignment,
    /// CSS background color, if any.
    pub background_color: Option<String>,
    /// CSS text color, if any.
    pub text_color: Option<String>,
}

impl Appearance {
    /// Default font size in points.
    pub const DEFAULT_FONT_SIZE: f64 = 12.0;
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            font_size: Self::DEFAULT_FONT_SIZE,
            bold: false,
            alignment: Alignment::default(),
            background_color: None,
            text_color: None,
        }
    }
}

/// Everything needed to place a field and construct its control.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldDescriptor {
    /// Where the field sits on the background.
    pub placement: FieldPlacement,
    /// Which control to build.
    pub kind: ControlKind,
    /// Initial text (label caption, input contents, or combo selection).
    pub default_text: String,
    /// Styling attributes.
    pub appearance: Appearance,
    /// Options offered by a combo box, in display order.
    pub options: Vec<String>,
    /// Registry key of a [`ControlKind::Custom`] control.
    pub custom_class: String,
    /// Free-form properties passed to a custom control constructor.
    pub custom_properties: BTreeMap<String, String>,
}

impl FieldDescriptor {
    /// Creates a descriptor with default appearance and no options.
    #[must_use]
    pub fn new(placement: FieldPlacement, kind: ControlKind) -> Self {
        Self {
            placement,
            kind,
            ..Self::default()
        }
    }

    /// Sets the initial text.
    #[must_use]
    pub fn with_default_text(mut self, text: impl Into<String>) -> Self {
        self.default_text = text.into();
        self
    }

    /// Sets the combo box options.
    #[must_use]
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the registry key for a custom control.
    #[must_use]
    pub fn with_custom_class(mut self, class: impl Into<String>) -> Self {
        self.custom_class = class.into();
        self
    }

    /// Returns the field id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.placement.id
    }
}
