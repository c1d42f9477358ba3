//! [`JsonValue`] — the in-memory value model for parsed JSON.
//!
//! A closed tagged union over everything a parsed JSON document can hold,
//! plus an explicit [`JsonValue::Absent`] state for object fields that do
//! not exist. `Absent` is distinct from `Null`: `{"a": null}` has an `a`
//! field holding `Null`, while `{}` has an absent `a` field.
//!
//! Parsing text into this model is an external collaborator's job; the
//! crate only bridges to and from [`serde_json::Value`] so any serde-based
//! parser or serializer can be used on either side.
//!
//! # Example
//!
//! ```
//! use json_morph_value::JsonValue;
//!
//! let doc = JsonValue::from(serde_json::json!({"name": "ada", "age": 36}));
//! assert_eq!(doc.field("name"), &JsonValue::Str("ada".to_string()));
//! assert!(doc.field("email").is_absent());
//! ```

use serde_json::Value;

/// The value model for parsed JSON.
///
/// `Array` and `Object` elements are themselves `JsonValue`s; the tree is
/// finite and acyclic by construction. `Object` preserves insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// An object field that does not exist. Not the same as `Null`.
    Absent,
    /// JSON `null`.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer. Covers the full `i64`/`u64` range.
    Int(i128),
    /// Floating-point number.
    Double(f64),
    /// String.
    Str(String),
    /// Ordered array.
    Array(Vec<JsonValue>),
    /// Object as ordered key-value pairs.
    Object(Vec<(String, JsonValue)>),
}

static ABSENT: JsonValue = JsonValue::Absent;

impl JsonValue {
    /// Diagnostic name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Absent => "absent",
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Int(_) => "integer",
            JsonValue::Double(_) => "double",
            JsonValue::Str(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, JsonValue::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Look up an object field. `None` if the receiver is not an object or
    /// has no such key. Duplicate keys resolve to the first occurrence.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(fields) => {
                fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
            }
            _ => None,
        }
    }

    /// Look up an object field, materializing the absent state: a missing
    /// key (or a non-object receiver) yields [`JsonValue::Absent`].
    ///
    /// This is the entry point that lets `Option` extraction distinguish a
    /// field holding `null` from a field that is not there at all.
    ///
    /// # Example
    ///
    /// ```
    /// use json_morph_value::JsonValue;
    ///
    /// let doc = JsonValue::from(serde_json::json!({"a": null}));
    /// assert!(doc.field("a").is_null());
    /// assert!(doc.field("b").is_absent());
    /// ```
    pub fn field(&self, key: &str) -> &JsonValue {
        self.get(key).unwrap_or(&ABSENT)
    }
}

impl From<Value> for JsonValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    JsonValue::Int(i as i128)
                } else if let Some(u) = n.as_u64() {
                    JsonValue::Int(u as i128)
                } else {
                    JsonValue::Double(n.as_f64().unwrap_or(0.0))
                }
            }
            Value::String(s) => JsonValue::Str(s),
            Value::Array(arr) => {
                JsonValue::Array(arr.into_iter().map(JsonValue::from).collect())
            }
            Value::Object(obj) => JsonValue::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<JsonValue> for Value {
    fn from(v: JsonValue) -> Self {
        match v {
            // Absent collapses to null on export; serde_json has no
            // undefined state.
            JsonValue::Absent => Value::Null,
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Int(i) => {
                if let Ok(i) = i64::try_from(i) {
                    Value::from(i)
                } else if let Ok(u) = u64::try_from(i) {
                    Value::from(u)
                } else {
                    // Out of u64 range: degrade to double rather than fail.
                    Value::from(i as f64)
                }
            }
            JsonValue::Double(f) => serde_json::json!(f),
            JsonValue::Str(s) => Value::String(s),
            JsonValue::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            JsonValue::Object(obj) => Value::Object(
                obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}
