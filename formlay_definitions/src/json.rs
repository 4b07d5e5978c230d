// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON field definitions.

use std::path::Path;

use formlay_fields::FieldDescriptor;
use serde::Deserialize;

use crate::FieldDefinitionSource;
use crate::error::SourceError;
use crate::raw::{RawField, read_document};

/// Reads field definitions from JSON documents.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonDefinitionSource;

impl JsonDefinitionSource {
    /// Creates a JSON source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parses a JSON document into descriptors, in document order.
    pub fn parse_definitions(text: &str) -> Result<Vec<FieldDescriptor>, SourceError> {
        let document: Document = serde_json::from_str(text)?;
        Ok(document.fields.into_iter().map(RawField::into_descriptor).collect())
    }
}

impl FieldDefinitionSource for JsonDefinitionSource {
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

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    fields: Vec<RawField>,
}
