//! The Registry - immutable class lookup.

use crate::{ClassDef, RegistryBuilder, SubtypeIndex};
use attest_core::{ClassId, Function, Object, Properties, Value};
use std::borrow::Cow;
use std::collections::HashMap;

/// The Registry provides runtime lookup of class definitions.
/// It is immutable after construction.
#[derive(Debug)]
pub struct Registry {
    /// Class definitions by ID.
    classes: HashMap<ClassId, ClassDef>,
    /// Class ID lookup by name.
    class_names: HashMap<String, ClassId>,
    /// Precomputed subclass relationships.
    subtype_index: SubtypeIndex,
}

impl Registry {
    pub(crate) fn new(
        classes: HashMap<ClassId, ClassDef>,
        class_names: HashMap<String, ClassId>,
        subtype_index: SubtypeIndex,
    ) -> Self {
        Self {
            classes,
            class_names,
            subtype_index,
        }
    }

    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    // ==================== Class Lookups ====================

    /// Get a class definition by name.
    pub fn get_class_by_name(&self, name: &str) -> Option<&ClassDef> {
        self.class_names.get(name).and_then(|id| self.classes.get(id))
    }

    /// Get a class definition by ID.
    pub fn get_class(&self, id: ClassId) -> Option<&ClassDef> {
        self.classes.get(&id)
    }

    /// Get a class ID by name.
    pub fn get_class_id(&self, name: &str) -> Option<ClassId> {
        self.class_names.get(name).copied()
    }

    /// Get the name of a class, if registered.
    pub fn class_name(&self, id: ClassId) -> Option<&str> {
        self.classes.get(&id).map(|c| c.name.as_str())
    }

    /// Get all class definitions.
    pub fn all_classes(&self) -> impl Iterator<Item = &ClassDef> {
        self.classes.values()
    }

    /// Get the number of classes, builtins included.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Iterate a class and its ancestors, nearest first.
    pub fn ancestry(&self, id: ClassId) -> impl Iterator<Item = &ClassDef> + '_ {
        std::iter::successors(self.classes.get(&id), move |class_def| {
            class_def.parent_id.and_then(|parent| self.classes.get(&parent))
        })
    }

    // ==================== Subclass Queries ====================

    /// Check if `sub` is `super_class` or one of its descendants.
    pub fn is_subclass(&self, sub: ClassId, super_class: ClassId) -> bool {
        self.subtype_index.is_subtype(sub, super_class)
    }

    /// Get all subclasses of a class (not including the class itself).
    pub fn get_subclasses(&self, id: ClassId) -> impl Iterator<Item = ClassId> + '_ {
        self.subtype_index.get_subtypes(id)
    }

    /// Get all superclasses of a class (not including the class itself).
    pub fn get_superclasses(&self, id: ClassId) -> impl Iterator<Item = ClassId> + '_ {
        self.subtype_index.get_supertypes(id)
    }

    /// Check if `value` is a direct or transitive instance of `class`.
    ///
    /// Primitives, `null` and `undefined` are never instances.
    pub fn is_instance(&self, value: &Value, class: ClassId) -> bool {
        value
            .class_id()
            .map(|id| self.is_subclass(id, class))
            .unwrap_or(false)
    }

    // ==================== Property Lookups ====================

    /// Resolve a property the way member access does: own properties first,
    /// then the prototype chain of the value's class.
    pub fn lookup_property<'v>(&'v self, value: &'v Value, name: &str) -> Option<Cow<'v, Value>> {
        if let Some(own) = value.own_property(name) {
            return Some(own);
        }
        let class_id = value.class_id()?;
        self.ancestry(class_id)
            .find_map(|class_def| class_def.get_prototype_property(name))
            .map(Cow::Borrowed)
    }

    /// Check if a property is reachable only through the prototype chain.
    pub fn is_inherited_property(&self, value: &Value, name: &str) -> bool {
        !value.has_own_property(name) && self.lookup_property(value, name).is_some()
    }

    // ==================== Construction ====================

    /// Create an instance of a registered class with the given own properties.
    pub fn instantiate(&self, class: ClassId, properties: Properties) -> Option<Value> {
        let class_def = self.classes.get(&class)?;
        let value = match class_def.id {
            ClassId::ARRAY => Value::Array(Vec::new()),
            ClassId::FUNCTION => Value::Function(Function {
                properties,
                ..Function::anonymous()
            }),
            id => Value::Object(Object::of_class(id).with_properties(properties)),
        };
        Some(value)
    }

    /// The constructor function of a registered class, as a value.
    pub fn constructor(&self, class: ClassId) -> Option<Value> {
        let class_def = self.classes.get(&class)?;
        Some(Value::Function(Function::constructor(
            class_def.name.clone(),
            class_def.id,
        )))
    }
}

impl Default for Registry {
    /// A registry holding only the builtin classes.
    fn default() -> Self {
        RegistryBuilder::new().finish()
    }
}
