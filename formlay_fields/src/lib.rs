// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=formlay_fields --heading-base-level=0

//! Formlay Fields: interactive fields pinned to a background image.
//!
//! A field is a rectangle in background-image space (a [`FieldPlacement`])
//! plus a live control built for it. This crate owns both halves:
//!
//! - [`FieldDescriptor`]: placement, control kind, and appearance, as loaded
//!   from a field definition.
//! - [`Control`]: the runtime control seam. Toolkit adapters implement it;
//!   values move only through one narrow [`Capability`] (text, boolean, or
//!   selection).
//! - [`ControlFactory`] / [`ControlRegistry`]: construction, including custom
//!   kinds registered explicitly by key.
//! - [`FieldLayout`]: the engine that validates a field set, owns one control
//!   per placement, and maps placements into viewport space on every layout
//!   pass.
//!
//! It does **not** know how a background is scaled or scrolled. Callers pass
//! the current background origin and scroll offset (for example from
//! `formlay_view`) into [`FieldLayout::update_all_positions`].
//!
//! [`HeadlessControl`] and [`HeadlessControlFactory`] provide model-only
//! controls for tests and for hosts that render fields themselves.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod control;
mod descriptor;
mod error;
mod factory;
mod headless;
mod layout;

pub use control::{
    BooleanBearing, Capability, CapabilityMut, Control, FieldValue, SelectionBearing,
    TextBearing, ValueKind,
};
pub use descriptor::{Alignment, Appearance, ControlKind, FieldDescriptor, FieldPlacement};
pub use error::{DefinitionError, FieldError, UnknownControlKind};
pub use factory::{ControlConstructor, ControlFactory, ControlRegistry};
pub use headless::{
    CheckState, ComboState, HeadlessControl, HeadlessControlFactory, HeadlessValue, TextState,
};
pub use layout::{FieldLayout, LoadReport};
