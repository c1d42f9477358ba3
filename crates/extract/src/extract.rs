//! [`Extract`] — per-type rules turning a [`JsonValue`] into a native value.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::hash::Hash;

use json_morph_value::JsonValue;

use crate::error::ExtractError;

/// A rule converting a JSON value into `Self`.
///
/// Implementations are pure and stateless. Container impls compose by
/// bounding their element types with `Extract`, so the whole conversion
/// graph is resolved at compile time; there is no runtime rule lookup.
///
/// # Example
///
/// ```
/// use json_morph_extract::{Extract, JsonValue};
///
/// let value = JsonValue::Array(vec![
///     JsonValue::Str("a".to_string()),
///     JsonValue::Str("b".to_string()),
/// ]);
/// let strings = Vec::<String>::extract(&value).unwrap();
/// assert_eq!(strings, vec!["a", "b"]);
/// ```
pub trait Extract: Sized {
    fn extract(value: &JsonValue) -> Result<Self, ExtractError>;
}

/// Extract a named object field.
///
/// Goes through [`JsonValue::field`], so a missing key reaches the element
/// rule as `Absent` and `Option` targets read it as `None`.
///
/// # Example
///
/// ```
/// use json_morph_extract::{extract_field, JsonValue};
///
/// let doc = JsonValue::from(serde_json::json!({"name": "ada"}));
/// let name: String = extract_field(&doc, "name").unwrap();
/// let email: Option<String> = extract_field(&doc, "email").unwrap();
/// assert_eq!(name, "ada");
/// assert_eq!(email, None);
/// ```
pub fn extract_field<T: Extract>(value: &JsonValue, key: &str) -> Result<T, ExtractError> {
    T::extract(value.field(key))
}

// ------------------------------------------------------------ Scalar rules

impl Extract for String {
    fn extract(value: &JsonValue) -> Result<Self, ExtractError> {
        match value {
            JsonValue::Str(s) => Ok(s.clone()),
            other => Err(ExtractError::mismatch("string", other)),
        }
    }
}

impl Extract for bool {
    /// Accepts `Bool`, the strings `"true"`/`"false"`/`"1"`/`"0"`
    /// (case-insensitive), and the integers `1`/`0`.
    fn extract(value: &JsonValue) -> Result<Self, ExtractError> {
        match value {
            JsonValue::Bool(b) => Ok(*b),
            JsonValue::Str(s) => match s.to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(ExtractError::mismatch("boolean", value)),
            },
            JsonValue::Int(1) => Ok(true),
            JsonValue::Int(0) => Ok(false),
            other => Err(ExtractError::mismatch("boolean", other)),
        }
    }
}

impl Extract for i32 {
    fn extract(value: &JsonValue) -> Result<Self, ExtractError> {
        match value {
            JsonValue::Int(i) => Ok(*i as i32),
            // Truncate toward zero, then to 32 bits (ToInt32 semantics).
            JsonValue::Double(d) => Ok(*d as i64 as i32),
            JsonValue::Str(s) => s
                .trim()
                .parse::<i32>()
                .map_err(|e| ExtractError::unparsable("i32", value, e)),
            other => Err(ExtractError::mismatch("i32", other)),
        }
    }
}

impl Extract for i64 {
    fn extract(value: &JsonValue) -> Result<Self, ExtractError> {
        match value {
            JsonValue::Int(i) => Ok(*i as i64),
            JsonValue::Double(d) => Ok(*d as i64),
            JsonValue::Str(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|e| ExtractError::unparsable("i64", value, e)),
            other => Err(ExtractError::mismatch("i64", other)),
        }
    }
}

impl Extract for f32 {
    fn extract(value: &JsonValue) -> Result<Self, ExtractError> {
        match value {
            JsonValue::Int(i) => Ok(*i as f32),
            JsonValue::Double(d) => Ok(*d as f32),
            JsonValue::Str(s) => s
                .trim()
                .parse::<f32>()
                .map_err(|e| ExtractError::unparsable("f32", value, e)),
            other => Err(ExtractError::mismatch("f32", other)),
        }
    }
}

impl Extract for f64 {
    fn extract(value: &JsonValue) -> Result<Self, ExtractError> {
        match value {
            JsonValue::Int(i) => Ok(*i as f64),
            JsonValue::Double(d) => Ok(*d),
            JsonValue::Str(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| ExtractError::unparsable("f64", value, e)),
            other => Err(ExtractError::mismatch("f64", other)),
        }
    }
}

// --------------------------------------------------------- Container rules

impl<T: Extract> Extract for Option<T> {
    /// `Absent` and `Null` both read as `None`; anything else delegates to
    /// the element rule. Never fails on absence.
    fn extract(value: &JsonValue) -> Result<Self, ExtractError> {
        match value {
            JsonValue::Absent | JsonValue::Null => Ok(None),
            other => T::extract(other).map(Some),
        }
    }
}

fn expect_array<'a>(
    value: &'a JsonValue,
    expected: &'static str,
    len: usize,
) -> Result<&'a [JsonValue], ExtractError> {
    match value {
        JsonValue::Array(items) if items.len() == len => Ok(items),
        other => Err(ExtractError::mismatch(expected, other)),
    }
}

// Tuples require an array of exactly the tuple's arity; elements map
// positionally. No padding, no truncation.

impl<A: Extract, B: Extract> Extract for (A, B) {
    fn extract(value: &JsonValue) -> Result<Self, ExtractError> {
        let items = expect_array(value, "array of 2 elements", 2)?;
        Ok((A::extract(&items[0])?, B::extract(&items[1])?))
    }
}

impl<A: Extract, B: Extract, C: Extract> Extract for (A, B, C) {
    fn extract(value: &JsonValue) -> Result<Self, ExtractError> {
        let items = expect_array(value, "array of 3 elements", 3)?;
        Ok((
            A::extract(&items[0])?,
            B::extract(&items[1])?,
            C::extract(&items[2])?,
        ))
    }
}

impl<A: Extract, B: Extract, C: Extract, D: Extract> Extract for (A, B, C, D) {
    fn extract(value: &JsonValue) -> Result<Self, ExtractError> {
        let items = expect_array(value, "array of 4 elements", 4)?;
        Ok((
            A::extract(&items[0])?,
            B::extract(&items[1])?,
            C::extract(&items[2])?,
            D::extract(&items[3])?,
        ))
    }
}

impl<A: Extract, B: Extract, C: Extract, D: Extract, E: Extract> Extract for (A, B, C, D, E) {
    fn extract(value: &JsonValue) -> Result<Self, ExtractError> {
        let items = expect_array(value, "array of 5 elements", 5)?;
        Ok((
            A::extract(&items[0])?,
            B::extract(&items[1])?,
            C::extract(&items[2])?,
            D::extract(&items[3])?,
            E::extract(&items[4])?,
        ))
    }
}

impl<T: Extract> Extract for Vec<T> {
    /// Order preserved; the whole extraction fails if any element fails.
    fn extract(value: &JsonValue) -> Result<Self, ExtractError> {
        match value {
            JsonValue::Array(items) => items.iter().map(T::extract).collect(),
            other => Err(ExtractError::mismatch("array", other)),
        }
    }
}

impl<T: Extract + Eq + Hash> Extract for HashSet<T> {
    /// Duplicates collapse by value equality; ordering is not part of the
    /// contract.
    fn extract(value: &JsonValue) -> Result<Self, ExtractError> {
        match value {
            JsonValue::Array(items) => items.iter().map(T::extract).collect(),
            other => Err(ExtractError::mismatch("array", other)),
        }
    }
}

impl<T: Extract + Ord> Extract for BTreeSet<T> {
    fn extract(value: &JsonValue) -> Result<Self, ExtractError> {
        match value {
            JsonValue::Array(items) => items.iter().map(T::extract).collect(),
            other => Err(ExtractError::mismatch("array", other)),
        }
    }
}

impl<T: Extract> Extract for BTreeMap<String, T> {
    /// Duplicate keys resolve to the last occurrence (map insert semantics).
    fn extract(value: &JsonValue) -> Result<Self, ExtractError> {
        match value {
            JsonValue::Object(fields) => {
                let mut out = BTreeMap::new();
                for (k, v) in fields {
                    out.insert(k.clone(), T::extract(v)?);
                }
                Ok(out)
            }
            other => Err(ExtractError::mismatch("object", other)),
        }
    }
}
