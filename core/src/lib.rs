//! Attest Core Types
//!
//! This crate provides the dynamic value model the assertion library checks:
//! - Class identifiers (ClassId, with reserved builtin ids)
//! - Runtime type tags (TypeTag)
//! - Value types (the Value enum with primitives, arrays, objects and functions)
//! - Object and function payloads with their own-property maps

mod id;
mod json;
mod object;
mod value;

pub use id::*;
pub use object::*;
pub use value::*;
