//! Dotted-path lookup into a parsed tree.
//!
//! # Path syntax
//!
//! - `""` -- the value itself
//! - `"name"` -- member `name` of an object
//! - `"items.2"` -- element 2 of the array under `items`
//! - `"a.0.b"` -- segments mix freely; a segment is a key on objects and a
//!   base-10 index on arrays, written with ASCII digits only
//!
//! Keys containing `.` cannot be addressed this way; use
//! [`Value::member`] directly for those.

use crate::error::AccessError;
use crate::value::{Value, ValueKind};

/// A parsed path, split on dots.
#[derive(Debug, Clone)]
struct Path<'a> {
    segments: Vec<&'a str>,
}

impl<'a> Path<'a> {
    fn parse(path: &'a str) -> Self {
        if path.is_empty() {
            return Self { segments: vec![] };
        }
        Self {
            segments: path.split('.').collect(),
        }
    }
}

impl Value {
    /// Walk a dotted path from this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_json::parse;
    ///
    /// let root = parse(r#"{"a":[1,2,{"b":true}]}"#).unwrap();
    /// assert_eq!(root.pointer("a.2.b").unwrap().as_bool(), Ok(true));
    /// assert!(root.pointer("a.9").is_err());
    /// ```
    pub fn pointer(&self, path: &str) -> Result<&Value, AccessError> {
        Path::parse(path)
            .segments
            .into_iter()
            .try_fold(self, |current, segment| step(current, segment))
    }
}

fn step<'v>(current: &'v Value, segment: &str) -> Result<&'v Value, AccessError> {
    match current {
        Value::Object(_) => current.member(segment),
        Value::Array(_) => current.element(parse_index(segment)?),
        other => Err(AccessError::TypeMismatch {
            expected: ValueKind::Object,
            found: other.kind(),
        }),
    }
}

/// `usize::from_str` also takes a leading `+`; indices here are digits only.
fn parse_index(segment: &str) -> Result<usize, AccessError> {
    let invalid = || AccessError::InvalidIndex {
        segment: segment.to_string(),
    };
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    // All digits, so the only failure left is overflow.
    segment.parse().map_err(|_| invalid())
}
