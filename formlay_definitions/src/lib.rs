// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=formlay_definitions --heading-base-level=0

//! Formlay Definitions: where field descriptors come from.
//!
//! [`FieldDefinitionSource`] is the seam a surface loads its fields through.
//! [`JsonDefinitionSource`] implements it for JSON documents of the shape
//!
//! ```json
//! { "fields": [ { "field_id": "name", "type": "line_edit", "x": 50, "y": 300 } ] }
//! ```
//!
//! and [`XmlDefinitionSource`] for the equivalent XML, one `<field>` element
//! per field with a child element per property:
//!
//! ```xml
//! <fields>
//!   <field><field_id>name</field_id><type>line_edit</type><x>50</x><y>300</y></field>
//! </fields>
//! ```
//!
//! Every key of a field entry is optional. Missing keys take the defaults of
//! [`formlay_fields::FieldDescriptor`]: kind `label`, position `(0, 0)`, size
//! `100 x 30`, font size 12, left alignment. Validation of ids (non-empty,
//! unique) is left to [`formlay_fields::FieldLayout::load_placements`], so a
//! source reports everything it read.
//!
//! ## Minimal example
//!
//! ```
//! use formlay_definitions::JsonDefinitionSource;
//! use formlay_fields::{ControlKind, FieldValue};
//!
//! let descriptors = JsonDefinitionSource::parse_definitions(
//!     r#"{ "fields": [
//!         { "field_id": "agree", "type": "checkbox", "x": 40, "y": 900, "bold": "yes" }
//!     ] }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(descriptors[0].id(), "agree");
//! assert_eq!(descriptors[0].kind, ControlKind::Checkbox);
//! assert!(descriptors[0].appearance.bold);
//! ```

mod error;
mod json;
mod raw;
mod xml;

use std::path::Path;

use formlay_fields::FieldDescriptor;

pub use error::SourceError;
pub use json::JsonDefinitionSource;
pub use xml::XmlDefinitionSource;

/// A loader of field descriptors.
pub trait FieldDefinitionSource {
    /// Reads the ordered field descriptors stored at `path`.
    fn load_definitions(&self, path: &Path) -> Result<Vec<FieldDescriptor>, SourceError>;
}
