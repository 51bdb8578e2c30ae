//! Validation failure types.

use attest_core::{TypeTag, Value};
use thiserror::Error;

/// Result type for assertions.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// What kind of check failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("Failed asserting {value} is type of {expected}, got {actual}")]
    TypeMismatch {
        value: String,
        expected: String,
        actual: TypeTag,
    },

    #[error("Failed asserting {value} is instance of {class}")]
    NotInstance { value: String, class: String },

    #[error("Failed asserting {value} has property {property}{}", inherited_note(.inherited))]
    MissingProperty {
        value: String,
        property: String,
        inherited: bool,
    },
}

fn inherited_note(inherited: &bool) -> &'static str {
    if *inherited {
        " (property is inherited, not own)"
    } else {
        ""
    }
}

fn context_suffix(context: &Option<String>) -> String {
    match context {
        Some(context) => format!("\n{}", context),
        None => String::new(),
    }
}

/// A failed type, instance or property assertion.
///
/// The description is generated from the failed check; the caller's
/// context message, when given, follows on a new line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}{}", context_suffix(.context))]
pub struct ValidationError {
    kind: ValidationErrorKind,
    context: Option<String>,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    pub fn type_mismatch(value: &Value, expected: impl Into<String>, actual: TypeTag) -> Self {
        Self::new(ValidationErrorKind::TypeMismatch {
            value: value.to_string(),
            expected: expected.into(),
            actual,
        })
    }

    pub fn not_instance(value: &Value, class: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::NotInstance {
            value: value.to_string(),
            class: class.into(),
        })
    }

    pub fn missing_property(value: &Value, property: impl Into<String>, inherited: bool) -> Self {
        Self::new(ValidationErrorKind::MissingProperty {
            value: value.to_string(),
            property: property.into(),
            inherited,
        })
    }

    /// Attach the caller's context message.
    pub fn with_context(mut self, context: Option<&str>) -> Self {
        self.context = context.map(str::to_string);
        self
    }

    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }

    /// The caller-supplied context message, if any.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// The generated description, without the context message.
    pub fn description(&self) -> String {
        self.kind.to_string()
    }

    /// Check whether an arbitrary error is a validation failure.
    pub fn is_validation_error(err: &(dyn std::error::Error + 'static)) -> bool {
        err.downcast_ref::<ValidationError>().is_some()
    }
}
