//! The fluent assertion builder.
//!
//! An assertion is configured and then executed. Property names queued with
//! [`Assertion::has_property`] are walked in order when a terminal method
//! runs; the type or instance check then applies to the value the walk ends
//! on, not to the original target.

use attest_core::{ClassId, Value};
use attest_registry::Registry;
use std::borrow::Cow;

use crate::error::{ValidationError, ValidationResult};

/// Check applied to the value at the end of the property path.
#[derive(Debug, Clone)]
enum Check {
    TypeOf(String),
    InstanceOf {
        class: ClassId,
        display_name: Option<String>,
    },
}

/// A single-use assertion chain bound to one target value.
///
/// Terminal methods consume the assertion, so a chain cannot be executed twice.
#[derive(Debug)]
#[must_use = "an assertion does nothing until type_of, instance_of or else_throw is called"]
pub struct Assertion<'a> {
    active: bool,
    target: &'a Value,
    registry: &'a Registry,
    property_stack: Vec<String>,
}

impl<'a> Assertion<'a> {
    pub(crate) fn new(active: bool, target: &'a Value, registry: &'a Registry) -> Self {
        Self {
            active,
            target,
            registry,
            property_stack: Vec::new(),
        }
    }

    /// Require the current value to own `property`, then descend into it.
    ///
    /// Nothing is evaluated until a terminal method is called.
    pub fn has_property(mut self, property: impl Into<String>) -> Self {
        self.property_stack.push(property.into());
        self
    }

    /// Properties queued so far, in traversal order.
    pub fn property_path(&self) -> &[String] {
        &self.property_stack
    }

    /// Whether this assertion will run its checks.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Assert the runtime type tag equals `type_name` (e.g. `"string"`).
    pub fn type_of(self, type_name: impl AsRef<str>, message: Option<&str>) -> ValidationResult<()> {
        let check = Check::TypeOf(type_name.as_ref().to_string());
        self.execute(Some(check), message)
    }

    /// Assert the value is an instance of `class` or one of its subclasses.
    ///
    /// `display_name` is only used in the failure message; it defaults to the
    /// registered class name.
    pub fn instance_of(
        self,
        class: ClassId,
        display_name: Option<&str>,
        message: Option<&str>,
    ) -> ValidationResult<()> {
        let check = Check::InstanceOf {
            class,
            display_name: display_name.map(str::to_string),
        };
        self.execute(Some(check), message)
    }

    /// Assert only that every queued property exists.
    pub fn else_throw(self, message: Option<&str>) -> ValidationResult<()> {
        self.execute(None, message)
    }

    fn execute(self, check: Option<Check>, message: Option<&str>) -> ValidationResult<()> {
        if !self.active {
            tracing::trace!(path = ?self.property_stack, "validator disabled, skipping assertion");
            return Ok(());
        }

        let result = self
            .resolve()
            .and_then(|value| match &check {
                Some(check) => self.check(&value, check),
                None => Ok(()),
            })
            .map_err(|err| err.with_context(message));

        if let Err(err) = &result {
            tracing::debug!(
                path = ?self.property_stack,
                kind = ?err.kind(),
                "assertion failed"
            );
        }
        result
    }

    /// Walk the property stack from the target, requiring own properties.
    fn resolve(&self) -> ValidationResult<Cow<'a, Value>> {
        let mut current: Cow<'a, Value> = Cow::Borrowed(self.target);

        for property in &self.property_stack {
            let next = match current {
                Cow::Borrowed(value) => value.own_property(property),
                Cow::Owned(ref value) => value
                    .own_property(property)
                    .map(|v| Cow::Owned(v.into_owned())),
            };

            match next {
                Some(next) => {
                    tracing::trace!(property = %property, "descending into property");
                    current = next;
                }
                None => {
                    let inherited = self.registry.is_inherited_property(&current, property);
                    return Err(ValidationError::missing_property(
                        &current,
                        property.as_str(),
                        inherited,
                    ));
                }
            }
        }

        Ok(current)
    }

    fn check(&self, value: &Value, check: &Check) -> ValidationResult<()> {
        match check {
            Check::TypeOf(expected) => {
                let actual = value.type_tag();
                if actual.as_str() == expected.as_str() {
                    Ok(())
                } else {
                    Err(ValidationError::type_mismatch(value, expected.as_str(), actual))
                }
            }
            Check::InstanceOf {
                class,
                display_name,
            } => {
                if self.registry.is_instance(value, *class) {
                    return Ok(());
                }
                let class_name = match display_name {
                    Some(name) => name.clone(),
                    None => self
                        .registry
                        .class_name(*class)
                        .map(str::to_string)
                        .unwrap_or_else(|| class.to_string()),
                };
                Err(ValidationError::not_instance(value, class_name))
            }
        }
    }
}
