// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading definition files from disk and feeding them to a layout.

use std::fs;
use std::path::PathBuf;

use formlay_definitions::{
    FieldDefinitionSource, JsonDefinitionSource, SourceError, XmlDefinitionSource,
};
use formlay_fields::{ControlKind, FieldLayout, FieldValue, HeadlessControlFactory};

const FORM: &str = r##"{
  "fields": [
    { "field_id": "name", "type": "line_edit", "x": 50, "y": 300, "width": 240, "height": 24,
      "default_text": "Jane", "font_size": 14, "alignment": "left", "text_color": "#222" },
    { "field_id": "agree", "type": "checkbox", "x": 50, "y": 900, "bold": true },
    { "field_id": "country", "type": "combo_box", "x": 400, "y": 300,
      "options": ["NZ", "AU"], "default_text": "AU" },
    { "field_id": "dial", "type": "slider", "x": 0, "y": 1200 }
  ]
}"##;

const FORM_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<fields>
  <field>
    <field_id>name</field_id>
    <type>line_edit</type>
    <x>50</x>
    <y>300</y>
    <width>240</width>
    <height>24</height>
    <default_text>Jane</default_text>
    <font_size>14</font_size>
    <alignment>left</alignment>
    <text_color>#222</text_color>
  </field>
  <field>
    <field_id>agree</field_id>
    <type>checkbox</type>
    <x>50</x>
    <y>900</y>
    <bold>true</bold>
  </field>
  <field>
    <field_id>country</field_id>
    <type>combo_box</type>
    <x>400</x>
    <y>300</y>
    <options>
      <option>NZ</option>
      <option>AU</option>
    </options>
    <default_text>AU</default_text>
  </field>
  <field>
    <field_id>dial</field_id>
    <type>slider</type>
    <x>0</x>
    <y>1200</y>
  </field>
</fields>
"#;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("formlay-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_a_form_in_document_order() {
    let path = temp_file("form.json", FORM);
    let fields = JsonDefinitionSource::new().load_definitions(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let ids: Vec<&str> = fields.iter().map(|f| f.id()).collect();
    assert_eq!(ids, ["name", "agree", "country", "dial"]);
    assert_eq!(fields[0].placement.size.width, 240.0);
    assert_eq!(fields[0].appearance.font_size, 14.0);
    assert_eq!(fields[0].appearance.text_color.as_deref(), Some("#222"));
    assert!(fields[1].appearance.bold);
    assert_eq!(fields[2].options, ["NZ", "AU"]);
    assert_eq!(fields[3].kind, ControlKind::Unknown("slider".into()));
}

#[test]
fn loaded_definitions_drive_a_layout() {
    let fields = JsonDefinitionSource::parse_definitions(FORM).unwrap();
    let mut layout = FieldLayout::new();
    let report = layout
        .load_placements(fields, &mut HeadlessControlFactory)
        .unwrap();

    assert_eq!(report.loaded, 4);
    assert_eq!(report.placeholders, ["dial"]);
    assert_eq!(
        layout.get_value("name").unwrap(),
        FieldValue::Text("Jane".into())
    );
    assert_eq!(
        layout.get_value("country").unwrap(),
        FieldValue::Selection("AU".into())
    );
    assert_eq!(layout.get_value("agree").unwrap(), FieldValue::Bool(false));
}

#[test]
fn missing_file_is_a_read_error() {
    let path = std::env::temp_dir().join("formlay-definitely-missing.json");
    let err = JsonDefinitionSource::new()
        .load_definitions(&path)
        .unwrap_err();
    match err {
        SourceError::Read { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn malformed_file_is_reported() {
    let path = temp_file("broken.json", r#"{ "fields": [ { "width": [] } ] }"#);
    let err = JsonDefinitionSource::new()
        .load_definitions(&path)
        .unwrap_err();
    fs::remove_file(&path).unwrap();
    assert!(matches!(err, SourceError::Malformed(_)));
}

#[test]
fn xml_form_matches_its_json_twin() {
    let path = temp_file("form.xml", FORM_XML);
    let from_xml = XmlDefinitionSource::new().load_definitions(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(from_xml, JsonDefinitionSource::parse_definitions(FORM).unwrap());

    let mut layout = FieldLayout::new();
    let report = layout
        .load_placements(from_xml, &mut HeadlessControlFactory)
        .unwrap();
    assert_eq!(report.placeholders, ["dial"]);
    assert_eq!(
        layout.get_value("country").unwrap(),
        FieldValue::Selection("AU".into())
    );
}

#[test]
fn malformed_xml_file_is_reported() {
    let path = temp_file("broken.xml", "<fields><field><x>1</y></field></fields>");
    let err = XmlDefinitionSource::new()
        .load_definitions(&path)
        .unwrap_err();
    fs::remove_file(&path).unwrap();
    assert!(matches!(err, SourceError::MalformedXml(_)));
}
