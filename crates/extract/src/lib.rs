//! Typed conversion rules between JSON values and native values.
//!
//! Two complementary trait families over [`JsonValue`]:
//!
//! - [`Extract`]: JSON value → native value. One rule per target type,
//!   fallible; failures carry the expected type name and the rejected
//!   value in an [`ExtractError`].
//! - [`Decompose`]: native value → JSON value. One rule per source type,
//!   total.
//!
//! Container rules (`Option`, tuples of arity 2–5, `Vec`, sets, string
//! maps) compose by trait bound: `Vec<T>: Extract` requires `T: Extract`,
//! resolved statically. New types join by implementing the traits.
//!
//! # Example
//!
//! ```
//! use json_morph_extract::{extract_field, Decompose, Extract, JsonValue};
//!
//! let doc = JsonValue::from(serde_json::json!({
//!     "tags": ["a", "b"],
//!     "retries": "3",
//! }));
//! let tags: Vec<String> = extract_field(&doc, "tags").unwrap();
//! let retries: i32 = extract_field(&doc, "retries").unwrap();
//! let note: Option<String> = extract_field(&doc, "note").unwrap();
//! assert_eq!((tags.len(), retries, note), (2, 3, None));
//!
//! assert_eq!(vec![3i64, 1, 2].decompose().type_name(), "array");
//! ```

mod decompose;
mod error;
mod extract;

pub use decompose::Decompose;
pub use error::ExtractError;
pub use extract::{extract_field, Extract};

pub use json_morph_value::JsonValue;
