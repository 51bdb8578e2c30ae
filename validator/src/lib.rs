//! Attest
//!
//! Runtime type assertions over dynamic values.
//!
//! Responsibilities:
//! - Check a value's runtime type tag (`typeof`-style)
//! - Check class membership, including subclasses
//! - Check nested own-property paths before either check
//! - Report the first failed check as a ValidationError
//!
//! Obtain a [`Validator`] with [`Validator::new`], [`create`] or the
//! memoized [`get`], call [`Validator::assert`], chain
//! [`Assertion::has_property`] and finish with [`Assertion::type_of`],
//! [`Assertion::instance_of`] or [`Assertion::else_throw`].

mod assertion;
mod config;
mod error;
mod global;
mod validator;

pub use assertion::Assertion;
pub use config::{ConfigError, ValidatorConfig};
pub use error::{ValidationError, ValidationErrorKind, ValidationResult};
pub use global::{create, get};
pub use validator::Validator;

pub use attest_core::{props, ClassId, Function, Object, Properties, TypeTag, Value};
pub use attest_registry::{ClassBuilder, ClassDef, Registry, RegistryBuilder, RegistryError};
