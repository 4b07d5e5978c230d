// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! XML field definitions.
//!
//! Each `<field>` child of the root element is one field. Its properties are
//! child elements whose text is the value. Elements not listed here are
//! ignored, and missing ones take the same defaults as the JSON form.
//!
//! ```xml
//! <fields>
//!   <field>
//!     <field_id>country</field_id>
//!     <type>combo_box</type>
//!     <x>400</x>
//!     <y>300</y>
//!     <bold>yes</bold>
//!     <options>
//!       <option>NZ</option>
//!       <option>AU</option>
//!     </options>
//!     <custom_properties>
//!       <hint>pick one</hint>
//!     </custom_properties>
//!   </field>
//! </fields>
//! ```

use std::path::Path;

use formlay_fields::FieldDescriptor;
use roxmltree::{Document, Node};
use serde_json::Value;

use crate::FieldDefinitionSource;
use crate::error::SourceError;
use crate::raw::{Flag, RawField, read_document};

/// Reads field definitions from XML documents.
#[derive(Clone, Copy, Debug, Default)]
pub struct XmlDefinitionSource;

impl XmlDefinitionSource {
    /// Creates an XML source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parses an XML document into descriptors, in document order.
    pub fn parse_definitions(text: &str) -> Result<Vec<FieldDescriptor>, SourceError> {
        let document = Document::parse(text)?;
        document
            .root_element()
            .children()
            .filter(|node| node.has_tag_name("field"))
            .map(|node| read_field(node).map(RawField::into_descriptor))
            .collect()
    }
}

impl FieldDefinitionSource for XmlDefinitionSource {
    fn load_definitions(&self, path: &Path) -> Result<Vec<FieldDescriptor>, SourceError> {
        let descriptors = Self::parse_definitions(&read_document(path)?)?;
        log::debug!(
            "read {} field definitions from {}",
            descriptors.len(),
            path.display()
        );
        Ok(descriptors)
    }
}

fn read_field(field: Node<'_, '_>) -> Result<RawField, SourceError> {
    let mut raw = RawField::default();
    for child in field.children().filter(Node::is_element) {
        let text = child.text().unwrap_or_default();
        match child.tag_name().name() {
            "field_id" => raw.field_id = text.to_owned(),
            "type" => raw.kind = text.to_owned(),
            "x" => raw.x = number(&child, text)?,
            "y" => raw.y = number(&child, text)?,
            "width" => raw.width = number(&child, text)?,
            "height" => raw.height = number(&child, text)?,
            "default_text" => raw.default_text = text.to_owned(),
            "font_size" => raw.font_size = number(&child, text)?,
            "bold" => raw.bold = Flag::Text(text.to_owned()),
            "alignment" => raw.alignment = text.to_owned(),
            "background_color" => raw.background_color = text.to_owned(),
            "text_color" => raw.text_color = text.to_owned(),
            "custom_widget_class" => raw.custom_widget_class = text.to_owned(),
            "options" => {
                raw.options = child
                    .children()
                    .filter(|node| node.has_tag_name("option"))
                    .map(|option| option.text().unwrap_or_default().to_owned())
                    .collect();
            }
            "custom_properties" => {
                raw.custom_properties = child
                    .children()
                    .filter(Node::is_element)
                    .map(|property| {
                        let value = property.text().unwrap_or_default().to_owned();
                        (property.tag_name().name().to_owned(), Value::String(value))
                    })
                    .collect();
            }
            other => log::debug!("ignoring <{other}> in field definition"),
        }
    }
    Ok(raw)
}

fn number(element: &Node<'_, '_>, text: &str) -> Result<f64, SourceError> {
    text.trim()
        .parse()
        .map_err(|source| SourceError::InvalidNumber {
            element: element.tag_name().name().to_owned(),
            value: text.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use formlay_fields::{Alignment, ControlKind, FieldPlacement};

    use super::XmlDefinitionSource;
    use crate::SourceError;

    #[test]
    fn empty_field_takes_defaults() {
        let fields = XmlDefinitionSource::parse_definitions("<fields><field/></fields>").unwrap();
        assert_eq!(fields.len(), 1);
        let field = &fields[0];
        assert_eq!(field.kind, ControlKind::Label);
        assert_eq!(field.placement, FieldPlacement::new("", 0.0, 0.0, 100.0, 30.0));
        assert_eq!(field.appearance.font_size, 12.0);
        assert_eq!(field.appearance.alignment, Alignment::Left);
        assert!(!field.appearance.bold);
        assert!(field.options.is_empty());
    }

    #[test]
    fn only_field_elements_are_read() {
        let fields = XmlDefinitionSource::parse_definitions(
            "<form><title>Intake</title><field><field_id>a</field_id></field></form>",
        )
        .unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].id(), "a");
        assert!(XmlDefinitionSource::parse_definitions("<fields/>").unwrap().is_empty());
    }

    #[test]
    fn child_elements_fill_every_property() {
        let fields = XmlDefinitionSource::parse_definitions(
            r#"<fields>
                 <field>
                   <field_id>stamp</field_id>
                   <type>custom</type>
                   <x> 12 </x><y>40</y><width>64</width><height>64</height>
                   <default_text>Fish &amp; chips</default_text>
                   <font_size>9</font_size>
                   <bold>Yes</bold>
                   <alignment>center</alignment>
                   <background_color>#fff</background_color>
                   <text_color></text_color>
                   <custom_widget_class>stamp</custom_widget_class>
                   <custom_properties><angle>15</angle><caption/></custom_properties>
                 </field>
               </fields>"#,
        )
        .unwrap();
        let field = &fields[0];
        assert_eq!(field.placement, FieldPlacement::new("stamp", 12.0, 40.0, 64.0, 64.0));
        assert_eq!(field.kind, ControlKind::Custom);
        assert_eq!(field.default_text, "Fish & chips");
        assert_eq!(field.appearance.font_size, 9.0);
        assert!(field.appearance.bold);
        assert_eq!(field.appearance.alignment, Alignment::Center);
        assert_eq!(field.appearance.background_color.as_deref(), Some("#fff"));
        assert_eq!(field.appearance.text_color, None);
        assert_eq!(field.custom_class, "stamp");
        assert_eq!(field.custom_properties["angle"], "15");
        assert_eq!(field.custom_properties["caption"], "");
    }

    #[test]
    fn options_keep_document_order() {
        let fields = XmlDefinitionSource::parse_definitions(
            "<fields><field><type>combo_box</type>\
             <options><option>NZ</option><option>AU</option><option/></options>\
             </field></fields>",
        )
        .unwrap();
        assert_eq!(fields[0].options, ["NZ", "AU", ""]);
    }

    #[test]
    fn bad_numbers_and_bad_markup_are_reported() {
        let err = XmlDefinitionSource::parse_definitions(
            "<fields><field><x>left</x></field></fields>",
        )
        .unwrap_err();
        match err {
            SourceError::InvalidNumber { element, value, .. } => {
                assert_eq!((element.as_str(), value.as_str()), ("x", "left"));
            }
            other => panic!("expected an invalid number, got {other:?}"),
        }

        let err = XmlDefinitionSource::parse_definitions("<fields><field>").unwrap_err();
        assert!(matches!(err, SourceError::MalformedXml(_)));
    }
}
