//! # simple-json
//!
//! A small in-memory JSON value model with a recursive-descent decoder
//! (text → tree) and a compact encoder (tree → text).
//!
//! The document root is always an object or an array. Numbers keep the
//! integer/float distinction of their source text, string bodies are kept
//! verbatim (escape sequences are not decoded), and every malformed input is
//! reported as a [`ParseError`] carrying the byte offset of the failure.
//!
//! ## Quick start
//!
//! ```rust
//! use simple_json::{get_element, get_member, parse, serialize, Value};
//!
//! let root = parse(r#"{"a": [1, 2, {"b": true}], "pi": 3.14}"#).unwrap();
//!
//! let a = get_member(&root, "a").unwrap().unwrap();
//! let third = get_element(a, 2).unwrap();
//! assert_eq!(third.get("b"), Some(&Value::Boolean(true)));
//! assert_eq!(get_member(&root, "missing").unwrap(), None);
//!
//! assert_eq!(serialize(&root), r#"{"a":[1,2,{"b":true}],"pi":3.14}"#);
//! ```
//!
//! ## Modules
//!
//! - [`decoder`] — JSON text → [`Value`]
//! - [`encoder`] — [`Value`] → compact JSON text
//! - [`value`] — the [`Value`] tree, typed accessors, conversions
//! - [`path`] — dotted-path lookup (`"a.2.b"`)
//! - [`scanner`] — the [`Cursor`](scanner::Cursor) shared by all decoder branches
//! - [`options`] — decoder configuration
//! - [`error`] — parse and access errors

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod options;
pub mod path;
pub mod scanner;
pub mod value;

pub use decoder::{parse, parse_with};
pub use encoder::{serialize, write, write_optional};
pub use error::{AccessError, JsonError, ParseError, Result};
pub use options::ParseOptions;
pub use value::{free, Map, Value, ValueKind};

/// Member of an object by key.
///
/// A missing key is `Ok(None)`, never an error; a stored JSON `null` is
/// `Ok(Some(&Value::Null))`. Fails only when `object` is not an object.
pub fn get_member<'v>(
    object: &'v Value,
    key: &str,
) -> std::result::Result<Option<&'v Value>, AccessError> {
    Ok(object.as_object()?.get(key))
}

/// Element of an array by index, bounds-checked.
pub fn get_element(array: &Value, index: usize) -> std::result::Result<&Value, AccessError> {
    array.element(index)
}
