// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use formlay_definitions::SourceError;
use formlay_fields::DefinitionError;
use formlay_view::InvalidImage;

/// Failure of a surface load operation.
///
/// Every failed load leaves the surface exactly as it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// The background file could not be read or decoded.
    #[error("failed to decode background image")]
    Decode(#[from] image::ImageError),
    /// The background decoded but cannot be scaled.
    #[error(transparent)]
    InvalidImage(#[from] InvalidImage),
    /// The field definitions could not be read.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// The field set was rejected.
    #[error(transparent)]
    Definition(#[from] DefinitionError),
}
