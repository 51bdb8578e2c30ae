//! Value types under test.
//!
//! Values model the runtime categories a dynamic language exposes to
//! `typeof`-style checks: primitives (undefined, null, booleans, numbers,
//! strings) and the reference kinds (arrays, objects, functions).

use crate::{ClassId, Function, Object};
use std::borrow::Cow;
use std::fmt;

/// Runtime type tag of a value.
///
/// The tag set is fixed. `null` and arrays both report `Object`, matching
/// the historical `typeof` behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Undefined,
    Object,
    Boolean,
    Number,
    String,
    Function,
}

impl TypeTag {
    /// All tags, in declaration order.
    pub const ALL: [TypeTag; 6] = [
        TypeTag::Undefined,
        TypeTag::Object,
        TypeTag::Boolean,
        TypeTag::Number,
        TypeTag::String,
        TypeTag::Function,
    ];

    /// The lowercase tag string, e.g. `"number"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Undefined => "undefined",
            TypeTag::Object => "object",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Function => "function",
        }
    }
}

impl AsRef<str> for TypeTag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value that can be asserted on.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Absent value.
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Double-precision number.
    Number(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered list of values.
    Array(Vec<Value>),
    /// Plain or class-constructed object.
    Object(Object),
    /// Callable value.
    Function(Function),
}

impl Value {
    /// Returns the runtime type tag of this value.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Undefined => TypeTag::Undefined,
            Value::Null | Value::Array(_) | Value::Object(_) => TypeTag::Object,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            Value::Function(_) => TypeTag::Function,
        }
    }

    /// Returns true for `null` and `undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// Returns true if this is an undefined value.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number if this is a Number value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as element slice if this is an Array value.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get as object if this is an Object value.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Get as function if this is a Function value.
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }

    /// The class this value is a direct instance of.
    ///
    /// Primitives, `null` and `undefined` are not instances of any class.
    pub fn class_id(&self) -> Option<ClassId> {
        match self {
            Value::Object(obj) => Some(obj.class_id()),
            Value::Array(_) => Some(ClassId::ARRAY),
            Value::Function(_) => Some(ClassId::FUNCTION),
            _ => None,
        }
    }

    /// Get a property this value directly owns.
    ///
    /// Strings and arrays own `length` and their indices; functions own
    /// `name`. Synthesized properties are returned owned, stored ones
    /// borrowed.
    pub fn own_property(&self, name: &str) -> Option<Cow<'_, Value>> {
        match self {
            Value::Undefined | Value::Null | Value::Bool(_) | Value::Number(_) => None,
            Value::String(s) => {
                if name == "length" {
                    return Some(Cow::Owned(Value::Number(s.chars().count() as f64)));
                }
                parse_index(name)
                    .and_then(|i| s.chars().nth(i))
                    .map(|c| Cow::Owned(Value::String(c.to_string())))
            }
            Value::Array(items) => {
                if name == "length" {
                    return Some(Cow::Owned(Value::Number(items.len() as f64)));
                }
                parse_index(name)
                    .and_then(|i| items.get(i))
                    .map(Cow::Borrowed)
            }
            Value::Object(obj) => obj.get(name).map(Cow::Borrowed),
            Value::Function(func) => match func.properties.get(name) {
                Some(value) => Some(Cow::Borrowed(value)),
                None => func.get(name).map(Cow::Owned),
            },
        }
    }

    /// Check if this value directly owns a property (inherited ones do not count).
    pub fn has_own_property(&self, name: &str) -> bool {
        match self {
            Value::Object(obj) => obj.contains_key(name),
            Value::Function(func) => func.contains_key(name),
            _ => self.own_property(name).is_some(),
        }
    }
}

/// Parse a canonical index key ("0", "1", ... without leading zeros).
fn parse_index(name: &str) -> Option<usize> {
    if name.is_empty() || (name.len() > 1 && name.starts_with('0')) {
        return None;
    }
    if !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => fmt_number(*n, f),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    // Nested nullish elements render empty.
                    if !item.is_nullish() {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => write!(f, "[object Object]"),
            Value::Function(func) => write!(f, "function {}()", func.name),
        }
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(i as f64)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(i as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl From<Function> for Value {
    fn from(func: Function) -> Self {
        Value::Function(func)
    }
}
