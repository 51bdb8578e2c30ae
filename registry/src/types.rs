//! Class definition types.

use attest_core::{ClassId, Properties, Value};
use std::collections::{HashMap, HashSet};

/// Class definition.
#[derive(Debug, Clone)]
pub struct ClassDef {
    /// Unique identifier.
    pub id: ClassId,
    /// Class name.
    pub name: String,
    /// Parent class (single inheritance). Only the root class has none.
    pub parent_id: Option<ClassId>,
    /// Properties shared by every instance through inheritance.
    pub prototype: Properties,
}

impl ClassDef {
    pub fn new(id: ClassId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id: None,
            prototype: Properties::new(),
        }
    }

    pub fn extends(mut self, parent_id: ClassId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Get a prototype property declared directly on this class.
    pub fn get_prototype_property(&self, name: &str) -> Option<&Value> {
        self.prototype.get(name)
    }
}

/// Precomputed subclass relationships.
#[derive(Debug, Default)]
pub struct SubtypeIndex {
    /// For each class, the set of all its subclasses (transitive).
    subtypes: HashMap<ClassId, HashSet<ClassId>>,
    /// For each class, the set of all its superclasses (transitive).
    supertypes: HashMap<ClassId, HashSet<ClassId>>,
}

impl SubtypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the subtype index from class definitions.
    pub fn build(classes: &HashMap<ClassId, ClassDef>) -> Self {
        let mut index = Self::new();

        for &class_id in classes.keys() {
            index.subtypes.entry(class_id).or_default();
            index.supertypes.entry(class_id).or_default();
        }

        // Walk each parent chain to the root.
        for (&class_id, class_def) in classes {
            let mut seen = HashSet::new();
            let mut parent = class_def.parent_id;
            while let Some(parent_id) = parent {
                if !seen.insert(parent_id) {
                    break;
                }
                index
                    .supertypes
                    .entry(class_id)
                    .or_default()
                    .insert(parent_id);
                index.subtypes.entry(parent_id).or_default().insert(class_id);
                parent = classes.get(&parent_id).and_then(|c| c.parent_id);
            }
        }

        index
    }

    /// Check if `sub` is a subclass of `super_type`. Every class is a subclass of itself.
    pub fn is_subtype(&self, sub: ClassId, super_type: ClassId) -> bool {
        if sub == super_type {
            return true;
        }
        self.supertypes
            .get(&sub)
            .map(|set| set.contains(&super_type))
            .unwrap_or(false)
    }

    /// Get all subclasses of a class (not including the class itself).
    pub fn get_subtypes(&self, class_id: ClassId) -> impl Iterator<Item = ClassId> + '_ {
        self.subtypes
            .get(&class_id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Get all superclasses of a class (not including the class itself).
    pub fn get_supertypes(&self, class_id: ClassId) -> impl Iterator<Item = ClassId> + '_ {
        self.supertypes
            .get(&class_id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }
}
