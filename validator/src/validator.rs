//! The Validator facade.

use attest_core::{ClassId, Value};
use attest_registry::Registry;
use std::sync::Arc;

use crate::assertion::Assertion;
use crate::config::ValidatorConfig;
use crate::error::ValidationResult;

/// Main validator used to assert on values and their properties.
///
/// A disabled validator turns every assertion into a no-op.
#[derive(Debug, Clone)]
pub struct Validator {
    enabled: bool,
    registry: Arc<Registry>,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            enabled: config.enabled,
            registry: config.registry.unwrap_or_default(),
        }
    }

    /// Whether assertions created by this validator run their checks.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The class hierarchy instance checks consult.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Start an assertion chain on `value`.
    pub fn assert<'a>(&'a self, value: &'a Value) -> Assertion<'a> {
        Assertion::new(self.enabled, value, &self.registry)
    }

    // ========== One-shot assertions ==========

    /// Assert that `value` has the runtime type tag `type_name`.
    pub fn assert_type_of(
        &self,
        value: &Value,
        type_name: &str,
        message: Option<&str>,
    ) -> ValidationResult<()> {
        self.assert(value).type_of(type_name, message)
    }

    /// Assert that `value` is an instance of `class`.
    pub fn assert_instance_of(
        &self,
        value: &Value,
        class: ClassId,
        type_name: Option<&str>,
        message: Option<&str>,
    ) -> ValidationResult<()> {
        self.assert(value).instance_of(class, type_name, message)
    }

    /// Assert that `obj` directly owns `property`.
    pub fn assert_has_property(
        &self,
        obj: &Value,
        property: &str,
        message: Option<&str>,
    ) -> ValidationResult<()> {
        self.assert(obj).has_property(property).else_throw(message)
    }

    /// Assert that `obj` owns `property` and that its value has the type tag `type_name`.
    pub fn assert_property_type_of(
        &self,
        obj: &Value,
        property: &str,
        type_name: &str,
        message: Option<&str>,
    ) -> ValidationResult<()> {
        self.assert(obj)
            .has_property(property)
            .type_of(type_name, message)
    }

    /// Assert that `obj` owns `property` and that its value is an instance of `class`.
    pub fn assert_property_instance_of(
        &self,
        obj: &Value,
        property: &str,
        class: ClassId,
        type_name: Option<&str>,
        message: Option<&str>,
    ) -> ValidationResult<()> {
        self.assert(obj)
            .has_property(property)
            .instance_of(class, type_name, message)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}
