//! RegistryBuilder for constructing an immutable Registry.

use crate::{ClassDef, Registry, SubtypeIndex};
use attest_core::{ClassId, Properties, Value};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during registry construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Duplicate class name: {0}")]
    DuplicateClassName(String),

    #[error("Unknown parent class: {0}")]
    UnknownParentClass(String),
}

/// Builder for constructing an immutable Registry.
///
/// A fresh builder already contains the builtin classes `Object`, `Array`
/// and `Function`.
#[derive(Debug)]
pub struct RegistryBuilder {
    /// Next class ID to allocate.
    next_class_id: u32,
    /// Classes being built.
    classes: HashMap<ClassId, ClassDef>,
    /// Class name to ID mapping.
    class_names: HashMap<String, ClassId>,
}

impl RegistryBuilder {
    /// Create a new builder seeded with the builtin classes.
    pub fn new() -> Self {
        let mut builder = Self {
            next_class_id: ClassId::BUILTIN_COUNT,
            classes: HashMap::new(),
            class_names: HashMap::new(),
        };
        builder.insert(ClassDef::new(ClassId::OBJECT, "Object"));
        builder.insert(ClassDef::new(ClassId::ARRAY, "Array").extends(ClassId::OBJECT));
        builder.insert(ClassDef::new(ClassId::FUNCTION, "Function").extends(ClassId::OBJECT));
        builder
    }

    fn insert(&mut self, class_def: ClassDef) {
        self.class_names.insert(class_def.name.clone(), class_def.id);
        self.classes.insert(class_def.id, class_def);
    }

    /// Add a class definition.
    pub fn add_class(&mut self, name: impl Into<String>) -> ClassBuilder<'_> {
        let name = name.into();
        let id = ClassId::new(self.next_class_id);
        self.next_class_id += 1;

        ClassBuilder {
            builder: self,
            id,
            name,
            parent_name: None,
            prototype: Properties::new(),
        }
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Result<Registry, RegistryError> {
        Ok(self.finish())
    }

    pub(crate) fn finish(self) -> Registry {
        let subtype_index = SubtypeIndex::build(&self.classes);
        tracing::debug!(classes = self.classes.len(), "built class registry");
        Registry::new(self.classes, self.class_names, subtype_index)
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a class definition.
pub struct ClassBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    id: ClassId,
    name: String,
    parent_name: Option<String>,
    prototype: Properties,
}

impl<'a> ClassBuilder<'a> {
    /// Set the parent class by name. Defaults to `Object`.
    pub fn extends(mut self, parent_name: impl Into<String>) -> Self {
        self.parent_name = Some(parent_name.into());
        self
    }

    /// Add a property inherited by every instance.
    pub fn prototype_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.prototype.insert(name.into(), value.into());
        self
    }

    /// Finish building this class.
    pub fn done(self) -> Result<ClassId, RegistryError> {
        if self.builder.class_names.contains_key(&self.name) {
            return Err(RegistryError::DuplicateClassName(self.name));
        }

        let parent_id = match &self.parent_name {
            Some(parent_name) => match self.builder.class_names.get(parent_name) {
                Some(&parent_id) => parent_id,
                None => return Err(RegistryError::UnknownParentClass(parent_name.clone())),
            },
            None => ClassId::OBJECT,
        };

        let class_def = ClassDef {
            id: self.id,
            name: self.name,
            parent_id: Some(parent_id),
            prototype: self.prototype,
        };
        self.builder.insert(class_def);

        Ok(self.id)
    }
}
