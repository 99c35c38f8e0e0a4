//! The JSON value tree and its typed accessors.
//!
//! A [`Value`] owns its whole subtree: objects own their members, arrays own
//! their elements. Dropping the root releases every descendant exactly once,
//! so [`free`] is nothing more than taking the root by value.
//!
//! Integers and floats are separate variants. The decoder picks `Float` when
//! the numeral carries a decimal point and `Integer` otherwise, and the
//! encoder keeps that distinction visible in its output.

use crate::error::AccessError;
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// Object storage: unique keys, last write wins, iteration in insertion order.
pub type Map = IndexMap<String, Value>;

/// One node of a parsed JSON document.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Object(Map),
    Array(Vec<Value>),
    /// Body between the quotes, exactly as it appeared in the source.
    /// Escape sequences are kept as written.
    String(String),
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Null,
}

/// The tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Object,
    Array,
    String,
    Boolean,
    Integer,
    Float,
    Null,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Object => "object",
            ValueKind::Array => "array",
            ValueKind::String => "string",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Null => "null",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
            Value::String(_) => ValueKind::String,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Null => ValueKind::Null,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Member lookup that treats "not an object" the same as "no such key".
    ///
    /// A stored JSON `null` comes back as `Some(&Value::Null)`; only a missing
    /// key yields `None`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Element lookup that treats "not an array" the same as "out of range".
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Checked member lookup.
    pub fn member(&self, key: &str) -> Result<&Value, AccessError> {
        self.as_object()?
            .get(key)
            .ok_or_else(|| AccessError::KeyNotFound {
                key: key.to_string(),
            })
    }

    /// Checked element lookup.
    pub fn element(&self, index: usize) -> Result<&Value, AccessError> {
        let items = self.as_array()?;
        items.get(index).ok_or(AccessError::IndexOutOfRange {
            index,
            len: items.len(),
        })
    }

    pub fn as_object(&self) -> Result<&Map, AccessError> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(other.mismatch(ValueKind::Object)),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut Map, AccessError> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(other.mismatch(ValueKind::Object)),
        }
    }

    pub fn as_array(&self) -> Result<&[Value], AccessError> {
        match self {
            Value::Array(items) => Ok(items.as_slice()),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Vec<Value>, AccessError> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    pub fn as_str(&self) -> Result<&str, AccessError> {
        match self {
            Value::String(s) => Ok(s.as_str()),
            other => Err(other.mismatch(ValueKind::String)),
        }
    }

    pub fn as_bool(&self) -> Result<bool, AccessError> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(other.mismatch(ValueKind::Boolean)),
        }
    }

    /// No coercion: a `Float` holding `2.0` is still a mismatch here.
    pub fn as_integer(&self) -> Result<i64, AccessError> {
        match self {
            Value::Integer(n) => Ok(*n),
            other => Err(other.mismatch(ValueKind::Integer)),
        }
    }

    pub fn as_float(&self) -> Result<f64, AccessError> {
        match self {
            Value::Float(f) => Ok(*f),
            other => Err(other.mismatch(ValueKind::Float)),
        }
    }

    /// Number of members, elements, or string bytes. Zero for scalars.
    pub fn len(&self) -> usize {
        match self {
            Value::Object(map) => map.len(),
            Value::Array(items) => items.len(),
            Value::String(s) => s.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn mismatch(&self, expected: ValueKind) -> AccessError {
        AccessError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }
}

/// Release a tree. Every descendant is dropped exactly once.
pub fn free(value: Value) {
    drop(value);
}

impl fmt::Display for Value {
    /// Compact JSON, identical to [`serialize`](crate::serialize).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        crate::encoder::write(self, &mut out);
        f.write_str(&out)
    }
}

impl FromStr for Value {
    type Err = crate::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::decoder::parse(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    /// Later pairs overwrite earlier ones with the same key.
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
