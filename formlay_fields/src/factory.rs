// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control construction: the factory seam and the custom-kind registry.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::control::Control;
use crate::descriptor::{ControlKind, FieldDescriptor};
use crate::error::UnknownControlKind;

/// Builds runtime controls from field descriptors.
///
/// Toolkit adapters implement this once for their widget set. Styling from
/// [`FieldDescriptor::appearance`] is the factory's concern; the layout engine
/// only positions the result.
pub trait ControlFactory {
    /// Builds the control for `descriptor`.
    fn create_control(
        &mut self,
        descriptor: &FieldDescriptor,
    ) -> Result<Box<dyn Control>, UnknownControlKind>;

    /// Builds a visible stand-in for a field whose control could not be built.
    fn create_placeholder(
        &mut self,
        descriptor: &FieldDescriptor,
        error: &UnknownControlKind,
    ) -> Box<dyn Control>;
}

/// Constructor for a custom control kind.
pub type ControlConstructor = Box<dyn Fn(&FieldDescriptor) -> Box<dyn Control>>;

/// A [`ControlFactory`] that adds explicitly registered custom kinds on top of
/// a base factory.
///
/// Descriptors of kind [`ControlKind::Custom`] are looked up by their
/// [`FieldDescriptor::custom_class`] key; every other kind is delegated to the
/// base factory. Registration happens up front, before fields are loaded.
///
/// ## Minimal example
///
/// ```
/// use formlay_fields::{
///     ControlFactory, ControlKind, ControlRegistry, FieldDescriptor, FieldPlacement,
///     HeadlessControl, HeadlessControlFactory,
/// };
///
/// let mut registry = ControlRegistry::new(HeadlessControlFactory);
/// registry.register("signature", |d: &FieldDescriptor| {
///     Box::new(HeadlessControl::line_edit(d.default_text.clone()))
/// });
///
/// let descriptor = FieldDescriptor::new(
///     FieldPlacement::new("sig", 0.0, 0.0, 200.0, 40.0),
///     ControlKind::Custom,
/// )
/// .with_custom_class("signature");
/// assert!(registry.create_control(&descriptor).is_ok());
/// ```
pub struct ControlRegistry<F> {
    base: F,
    custom: HashMap<String, ControlConstructor>,
}

impl<F: fmt::Debug> fmt::Debug for ControlRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.custom.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("ControlRegistry")
            .field("base", &self.base)
            .field("custom", &keys)
            .finish()
    }
}

impl<F: ControlFactory> ControlRegistry<F> {
    /// Creates a registry with no custom kinds.
    #[must_use]
    pub fn new(base: F) -> Self {
        Self {
            base,
            custom: HashMap::new(),
        }
    }

    /// Registers `constructor` under `key`, returning any constructor it
    /// replaces.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        constructor: impl Fn(&FieldDescriptor) -> Box<dyn Control> + 'static,
    ) -> Option<ControlConstructor> {
        self.custom.insert(key.into(), Box::new(constructor))
    }

    /// Removes the constructor registered under `key`.
    pub fn unregister(&mut self, key: &str) -> bool {
        self.custom.remove(key).is_some()
    }

    /// Returns `true` if a constructor is registered under `key`.
    #[must_use]
    pub fn is_registered(&self, key: &str) -> bool {
        self.custom.contains_key(key)
    }

    /// Returns the base factory.
    #[must_use]
    pub fn base(&self) -> &F {
        &self.base
    }

    /// Returns the base factory for configuration.
    pub fn base_mut(&mut self) -> &mut F {
        &mut self.base
    }
}

impl<F: ControlFactory> ControlFactory for ControlRegistry<F> {
    fn create_control(
        &mut self,
        descriptor: &FieldDescriptor,
    ) -> Result<Box<dyn Control>, UnknownControlKind> {
        if descriptor.kind != ControlKind::Custom {
            return self.base.create_control(descriptor);
        }
        let constructor = self
            .custom
            .get(descriptor.custom_class.as_str())
            .ok_or_else(|| UnknownControlKind::Custom(descriptor.custom_class.clone()))?;
        Ok(constructor(descriptor))
    }

    fn create_placeholder(
        &mut self,
        descriptor: &FieldDescriptor,
        error: &UnknownControlKind,
    ) -> Box<dyn Control> {
        self.base.create_placeholder(descriptor, error)
    }
}
