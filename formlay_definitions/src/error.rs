// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

/// Failure to load field definitions.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The definition file could not be read.
    #[error("failed to read field definitions from `{}`", path.display())]
    Read {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The document is not a valid field definition set.
    #[error("malformed field definitions: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The document is not well-formed XML.
    #[error("malformed field definition XML: {0}")]
    MalformedXml(#[from] roxmltree::Error),
    /// A numeric property holds text that is not a number.
    #[error("<{element}> must be a number, found `{value}`")]
    InvalidNumber {
        /// Name of the offending element.
        element: String,
        /// Its text.
        value: String,
        /// Why it did not parse.
        #[source]
        source: ParseFloatError,
    },
}
