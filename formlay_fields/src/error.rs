// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::control::ValueKind;
use crate::descriptor::ControlKind;

/// A field set that cannot be loaded.
///
/// A rejected load is never partially applied: the previously loaded fields
/// stay in place.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    /// A descriptor has an empty field id.
    #[error("field definition #{index} has an empty field id")]
    EmptyId {
        /// Position of the descriptor in the rejected set.
        index: usize,
    },
    /// Two descriptors share a field id.
    #[error("field id `{id}` is defined more than once")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },
}

/// A failed query or update of a single field.
///
/// These errors never affect other fields.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// No field with this id is loaded.
    #[error("no field with id `{id}`")]
    NotFound {
        /// The unknown id.
        id: String,
    },
    /// The value shape does not match the control's capability.
    #[error("field `{id}` holds a {expected} value, got {found}")]
    TypeMismatch {
        /// The field id.
        id: String,
        /// Shape the control accepts.
        expected: ValueKind,
        /// Shape that was supplied.
        found: ValueKind,
    },
    /// The control carries no value, as with an error placeholder.
    #[error("field `{id}` has no value")]
    NoCapability {
        /// The field id.
        id: String,
    },
}

/// A control factory was asked for a kind it cannot build.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UnknownControlKind {
    /// The kind name itself is not recognized.
    #[error("unknown control kind `{0}`")]
    Kind(ControlKind),
    /// A custom control whose key has no registered constructor.
    #[error("no custom control registered for `{0}`")]
    Custom(String),
}
