//! Attest Registry
//!
//! Runtime class lookup. Single source of truth for the class hierarchy that
//! instance checks consult. The registry is immutable after construction via
//! RegistryBuilder.

mod builder;
mod registry;
mod types;

pub use builder::{ClassBuilder, RegistryBuilder, RegistryError};
pub use registry::Registry;
pub use types::*;
