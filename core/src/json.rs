//! Conversion from `serde_json` documents.
//!
//! JSON has no undefined or function values, so converted documents only
//! ever contain null, booleans, numbers, strings, arrays and plain objects.

use crate::{Object, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(Object {
                class: None,
                properties: map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            }),
        }
    }
}
