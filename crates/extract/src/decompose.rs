//! [`Decompose`] — per-type rules turning a native value into a [`JsonValue`].
//!
//! The mirror image of extraction, but total: every native value the rules
//! accept has a JSON representation, so there is no error type on this side.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use json_morph_value::JsonValue;

/// A rule converting `&Self` into a JSON value. Never fails.
pub trait Decompose {
    fn decompose(&self) -> JsonValue;
}

impl<T: Decompose + ?Sized> Decompose for &T {
    fn decompose(&self) -> JsonValue {
        (**self).decompose()
    }
}

// ------------------------------------------------------------ Scalar rules

impl Decompose for String {
    fn decompose(&self) -> JsonValue {
        JsonValue::Str(self.clone())
    }
}

impl Decompose for str {
    fn decompose(&self) -> JsonValue {
        JsonValue::Str(self.to_string())
    }
}

impl Decompose for bool {
    fn decompose(&self) -> JsonValue {
        JsonValue::Bool(*self)
    }
}

impl Decompose for i32 {
    fn decompose(&self) -> JsonValue {
        JsonValue::Int(*self as i128)
    }
}

impl Decompose for i64 {
    fn decompose(&self) -> JsonValue {
        JsonValue::Int(*self as i128)
    }
}

impl Decompose for f32 {
    /// Widened to double precision.
    fn decompose(&self) -> JsonValue {
        JsonValue::Double(f64::from(*self))
    }
}

impl Decompose for f64 {
    fn decompose(&self) -> JsonValue {
        JsonValue::Double(*self)
    }
}

// --------------------------------------------------------- Container rules

impl<T: Decompose> Decompose for Option<T> {
    /// `None` decomposes to `Null`, never to `Absent`. Extraction reads
    /// both states back as `None`, so the `Absent` origin of a value is
    /// not recoverable after a round trip.
    fn decompose(&self) -> JsonValue {
        match self {
            None => JsonValue::Null,
            Some(v) => v.decompose(),
        }
    }
}

impl<A: Decompose, B: Decompose> Decompose for (A, B) {
    fn decompose(&self) -> JsonValue {
        JsonValue::Array(vec![self.0.decompose(), self.1.decompose()])
    }
}

impl<A: Decompose, B: Decompose, C: Decompose> Decompose for (A, B, C) {
    fn decompose(&self) -> JsonValue {
        JsonValue::Array(vec![
            self.0.decompose(),
            self.1.decompose(),
            self.2.decompose(),
        ])
    }
}

impl<A: Decompose, B: Decompose, C: Decompose, D: Decompose> Decompose for (A, B, C, D) {
    fn decompose(&self) -> JsonValue {
        JsonValue::Array(vec![
            self.0.decompose(),
            self.1.decompose(),
            self.2.decompose(),
            self.3.decompose(),
        ])
    }
}

impl<A: Decompose, B: Decompose, C: Decompose, D: Decompose, E: Decompose> Decompose
    for (A, B, C, D, E)
{
    fn decompose(&self) -> JsonValue {
        JsonValue::Array(vec![
            self.0.decompose(),
            self.1.decompose(),
            self.2.decompose(),
            self.3.decompose(),
            self.4.decompose(),
        ])
    }
}

impl<T: Decompose> Decompose for [T] {
    fn decompose(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(T::decompose).collect())
    }
}

impl<T: Decompose> Decompose for Vec<T> {
    fn decompose(&self) -> JsonValue {
        self.as_slice().decompose()
    }
}

impl<T: Decompose> Decompose for HashSet<T> {
    /// Iteration order is unspecified; only the contents are contractual.
    fn decompose(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(T::decompose).collect())
    }
}

impl<T: Decompose> Decompose for BTreeSet<T> {
    fn decompose(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(T::decompose).collect())
    }
}

impl<T: Decompose> Decompose for BTreeMap<String, T> {
    fn decompose(&self) -> JsonValue {
        JsonValue::Object(
            self.iter()
                .map(|(k, v)| (k.clone(), v.decompose()))
                .collect(),
        )
    }
}
