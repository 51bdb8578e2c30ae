//! Object and function payloads.
//!
//! Objects and functions are the only values that carry an explicit
//! property map. Everything stored in that map is an *own* property;
//! inherited defaults live on the class prototype in the registry.

use crate::{ClassId, Value};

/// Type alias for own-property storage.
pub type Properties = std::collections::HashMap<String, Value>;

/// A plain or class-constructed object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    /// Class this object was constructed from. `None` means a plain object.
    pub class: Option<ClassId>,
    /// Own properties.
    pub properties: Properties,
}

impl Object {
    /// Create an empty plain object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty object constructed from `class`.
    pub fn of_class(class: ClassId) -> Self {
        Self {
            class: Some(class),
            properties: Properties::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties.extend(properties);
        self
    }

    /// The class this object is a direct instance of.
    pub fn class_id(&self) -> ClassId {
        self.class.unwrap_or(ClassId::OBJECT)
    }

    /// Get an own property.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Check if this object owns a property.
    pub fn contains_key(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Set an own property, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.properties.insert(name.into(), value.into())
    }
}

/// A callable value.
///
/// Functions are opaque to the checker: only their name, own properties and
/// the class they construct (if any) are modelled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Function {
    /// Function name, exposed as the own property `name`.
    pub name: String,
    /// Class this function constructs, for class constructors.
    pub constructs: Option<ClassId>,
    /// Own properties.
    pub properties: Properties,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constructs: None,
            properties: Properties::new(),
        }
    }

    /// Create an anonymous function.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Create the constructor function for `class`.
    pub fn constructor(name: impl Into<String>, class: ClassId) -> Self {
        Self {
            name: name.into(),
            constructs: Some(class),
            properties: Properties::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Get an own property. `name` is always owned unless shadowed.
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.properties.get(name) {
            Some(value) => Some(value.clone()),
            None if name == "name" => Some(Value::String(self.name.clone())),
            None => None,
        }
    }

    /// Check if this function owns a property.
    pub fn contains_key(&self, name: &str) -> bool {
        name == "name" || self.properties.contains_key(name)
    }
}

/// Helper macro to create property maps.
#[macro_export]
macro_rules! props {
    () => {
        $crate::Properties::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = $crate::Properties::new();
            $(
                map.insert($key.to_string(), $crate::Value::from($value));
            )+
            map
        }
    };
}
