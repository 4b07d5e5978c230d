// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The field record every document format decodes into before it becomes a
//! [`FieldDescriptor`].

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use formlay_fields::{Alignment, Appearance, ControlKind, FieldDescriptor, FieldPlacement};
use serde::Deserialize;
use serde_json::Value;

use crate::error::SourceError;

pub(crate) fn read_document(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Boolean written either as a JSON boolean or as text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Flag {
    Bool(bool),
    Text(String),
}

impl Default for Flag {
    fn default() -> Self {
        Self::Bool(false)
    }
}

impl Flag {
    /// `true`, `1` and `yes` (any case) are set; any other text is not.
    pub(crate) fn get(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Text(text) => {
                let text = text.trim();
                ["true", "1", "yes"]
                    .iter()
                    .any(|truthy| text.eq_ignore_ascii_case(truthy))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct RawField {
    pub(crate) field_id: String,
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) default_text: String,
    pub(crate) font_size: f64,
    pub(crate) bold: Flag,
    pub(crate) alignment: String,
    pub(crate) background_color: String,
    pub(crate) text_color: String,
    pub(crate) options: Vec<String>,
    pub(crate) custom_widget_class: String,
    pub(crate) custom_properties: BTreeMap<String, Value>,
}

impl Default for RawField {
    fn default() -> Self {
        Self {
            field_id: String::new(),
            kind: ControlKind::Label.name().to_owned(),
            x: 0.0,
            y: 0.0,
            width: FieldPlacement::DEFAULT_WIDTH,
            height: FieldPlacement::DEFAULT_HEIGHT,
            default_text: String::new(),
            font_size: Appearance::DEFAULT_FONT_SIZE,
            bold: Flag::default(),
            alignment: String::from("left"),
            background_color: String::new(),
            text_color: String::new(),
            options: Vec::new(),
            custom_widget_class: String::new(),
            custom_properties: BTreeMap::new(),
        }
    }
}

impl RawField {
    pub(crate) fn into_descriptor(self) -> FieldDescriptor {
        let alignment = Alignment::parse(&self.alignment).unwrap_or_else(|| {
            log::warn!(
                "field `{}`: unknown alignment `{}`, using left",
                self.field_id,
                self.alignment
            );
            Alignment::default()
        });
        let appearance = Appearance {
            font_size: self.font_size,
            bold: self.bold.get(),
            alignment,
            background_color: non_empty(self.background_color),
            text_color: non_empty(self.text_color),
        };
        let custom_properties = self
            .custom_properties
            .into_iter()
            .map(|(key, value)| (key, property_text(value)))
            .collect();

        FieldDescriptor {
            placement: FieldPlacement::new(self.field_id, self.x, self.y, self.width, self.height),
            kind: ControlKind::parse(&self.kind),
            default_text: self.default_text,
            appearance,
            options: self.options,
            custom_class: self.custom_widget_class,
            custom_properties,
        }
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}

fn property_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::Flag;

    #[test]
    fn bold_accepts_text_forms() {
        for (text, expected) in [
            ("true", true),
            ("1", true),
            ("YES", true),
            (" yes\n", true),
            ("no", false),
            ("False", false),
            ("", false),
        ] {
            assert_eq!(Flag::Text(text.into()).get(), expected, "{text:?}");
        }
        assert!(Flag::Bool(true).get());
        assert!(!Flag::default().get());
    }
}
