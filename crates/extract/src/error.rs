use json_morph_value::JsonValue;
use thiserror::Error;

/// The single failure mode of extraction: the JSON value does not have a
/// shape the target type accepts.
///
/// Carries the target type name and the rejected value for diagnostics.
/// When a string had an acceptable shape but failed numeric parsing, the
/// underlying parse failure is kept in [`ExtractError::parse`].
#[derive(Debug, Error, Clone, PartialEq)]
#[error("cannot extract {expected} from {} value", .actual.type_name())]
pub struct ExtractError {
    /// Name of the target type the caller asked for.
    pub expected: &'static str,
    /// The value that was rejected.
    pub actual: JsonValue,
    /// Parse failure detail for numeric-from-string cases.
    pub parse: Option<String>,
}

impl ExtractError {
    /// Shape mismatch: the value's variant is not accepted by the target.
    pub fn mismatch(expected: &'static str, actual: &JsonValue) -> Self {
        ExtractError {
            expected,
            actual: actual.clone(),
            parse: None,
        }
    }

    /// A string had an acceptable shape but did not parse as the target.
    pub fn unparsable(
        expected: &'static str,
        actual: &JsonValue,
        err: impl std::fmt::Display,
    ) -> Self {
        ExtractError {
            expected,
            actual: actual.clone(),
            parse: Some(err.to_string()),
        }
    }
}
