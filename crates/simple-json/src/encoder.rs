//! Encoder — writes a [`Value`] tree back out as compact JSON text.
//!
//! The walk is depth-first and emits no whitespace:
//!
//! - **Objects**: `{"key":value,...}` in map iteration order (insertion order)
//! - **Arrays**: `[value,...]` in element order
//! - **Strings and keys**: the stored body between quotes, never re-escaped
//! - **Integers**: plain decimal digits
//! - **Floats**: shortest round-trip decimal, always with a fractional part
//! - **Booleans / null**: the literals
//!
//! # Example
//! ```
//! use simple_json::{parse, serialize};
//! let value = parse(r#"{ "name": "Alice", "ratio": 0.50, "tags": [ 1, 2 ] }"#).unwrap();
//! assert_eq!(serialize(&value), r#"{"name":"Alice","ratio":0.5,"tags":[1,2]}"#);
//! ```

use crate::value::{Map, Value};
use tracing::debug;

/// Serialize a value into a fresh string.
pub fn serialize(value: &Value) -> String {
    let mut out = String::new();
    write(value, &mut out);
    debug!(bytes = out.len(), "serialized json");
    out
}

/// Append the JSON text of `value` to `out`.
pub fn write(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => write_object(map, out),
        Value::Array(items) => write_array(items, out),
        Value::String(s) => write_quoted(s, out),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Integer(n) => out.push_str(&n.to_string()),
        Value::Float(f) => out.push_str(&format_float(*f)),
        Value::Null => out.push_str("null"),
    }
}

/// Like [`write`], with a missing value written as `null`.
pub fn write_optional(value: Option<&Value>, out: &mut String) {
    match value {
        Some(value) => write(value, out),
        None => out.push_str("null"),
    }
}

fn write_object(map: &Map, out: &mut String) {
    out.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_quoted(key, out);
        out.push(':');
        write(value, out);
    }
    out.push('}');
}

fn write_array(items: &[Value], out: &mut String) {
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write(item, out);
    }
    out.push(']');
}

fn write_quoted(body: &str, out: &mut String) {
    out.push('"');
    out.push_str(body);
    out.push('"');
}

/// Format a float so that it reads back as the same `Float`:
/// - `f64`'s `Display` gives the shortest exact decimal and never uses exponents
/// - integral values get `.0` so the decimal point (and the tag) survives
/// - NaN and infinities cannot be parsed, so they are written as `null`
fn format_float(f: f64) -> String {
    if !f.is_finite() {
        return "null".to_string();
    }
    let mut s = f.to_string();
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}
