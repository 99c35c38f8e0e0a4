//! Recursive-descent decoder: JSON text → [`Value`] tree.
//!
//! Each grammar production (object, array, string, number, literal) has one
//! routine. A routine takes a [`Cursor`] positioned at the first byte of its
//! production and returns the node it built plus a cursor just past the last
//! byte it consumed. Containers call back into [`Decoder::parse_value`] for
//! every member or element, so the only parse state is the cursor and the
//! call stack, one frame per nesting level.
//!
//! # Key design decisions
//!
//! - **Container root only**: the document must start with `{` or `[`. Only
//!   whitespace may follow the root's closing delimiter.
//! - **Verbatim strings**: string bodies are sliced out of the source as-is.
//!   A `"` closes the string unless the byte right before it is `\`, so
//!   `\\"` does not close it either. No escape sequence is ever decoded.
//! - **Two-pass numbers**: the integer digits are scanned first. If a `.`
//!   follows, the whole span is re-read as `f64` and tagged `Float`;
//!   otherwise it is read as `i64` and tagged `Integer`. There is no exponent
//!   syntax.
//! - **Glued tokens are errors**: literals and numerals must be followed by a
//!   delimiter (see [`Cursor::at_delimiter`]), so `truex` or `12ab` fail at
//!   the token itself rather than at whatever comes after.
//! - **Depth limit**: the descent recurses once per nesting level, so depth
//!   is capped by [`ParseOptions::max_depth`].

use crate::error::ParseError;
use crate::options::ParseOptions;
use crate::scanner::Cursor;
use crate::value::{Map, Value};
use tracing::{debug, trace};

/// A parsed node and the cursor just past it.
type Parsed<'a> = Result<(Value, Cursor<'a>), ParseError>;

/// Parse a JSON document whose root is an object or an array.
///
/// Uses [`ParseOptions::default`]. On failure nothing is returned but the
/// error, which carries the byte offset where decoding stopped.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parse_with(text, &ParseOptions::default())
}

/// Parse with explicit [`ParseOptions`].
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Value, ParseError> {
    debug!(bytes = text.len(), max_depth = options.max_depth, "parsing json");
    let decoder = Decoder {
        max_depth: options.max_depth,
    };
    match decoder.parse_document(Cursor::new(text)) {
        Ok(value) => {
            debug!(kind = %value.kind(), "parsed json");
            Ok(value)
        }
        Err(err) => {
            debug!(%err, "json parse failed");
            Err(err)
        }
    }
}

struct Decoder {
    max_depth: usize,
}

impl Decoder {
    fn parse_document(&self, cur: Cursor<'_>) -> Result<Value, ParseError> {
        let cur = cur.skip_whitespace();
        let (value, cur) = match cur.peek() {
            Some(b'{') => self.parse_object(cur, 1)?,
            Some(b'[') => self.parse_array(cur, 1)?,
            _ => return Err(cur.unexpected()),
        };
        let cur = cur.skip_whitespace();
        if !cur.is_at_end() {
            return Err(cur.unexpected());
        }
        Ok(value)
    }

    /// Dispatch on the first non-whitespace byte of a value.
    ///
    /// `depth` is the nesting level of the enclosing container; a nested
    /// object or array sits one level deeper.
    fn parse_value<'a>(&self, cur: Cursor<'a>, depth: usize) -> Parsed<'a> {
        let cur = cur.skip_whitespace();
        match cur.peek() {
            Some(b'{') => self.parse_object(cur, depth + 1),
            Some(b'[') => self.parse_array(cur, depth + 1),
            Some(b'"') => {
                let (body, cur) = parse_string(cur)?;
                Ok((Value::String(body.to_string()), cur))
            }
            Some(b't') => parse_literal(cur, "true", Value::Boolean(true)),
            Some(b'f') => parse_literal(cur, "false", Value::Boolean(false)),
            Some(b'n') => parse_literal(cur, "null", Value::Null),
            Some(b'-' | b'0'..=b'9') => parse_number(cur),
            Some(_) => Err(cur.unexpected()),
            None => Err(cur.end_of_input()),
        }
    }

    fn check_depth(&self, cur: Cursor<'_>, depth: usize) -> Result<(), ParseError> {
        if depth > self.max_depth {
            return Err(ParseError::DepthLimitExceeded {
                limit: self.max_depth,
                offset: cur.offset(),
            });
        }
        Ok(())
    }

    /// `cur` sits on `{`. Leaves the cursor just past the matching `}`.
    fn parse_object<'a>(&self, cur: Cursor<'a>, depth: usize) -> Parsed<'a> {
        self.check_depth(cur, depth)?;
        trace!(offset = cur.offset(), depth, "object start");

        let mut map = Map::new();
        let mut cur = cur.expect(b'{')?.skip_whitespace();
        if cur.peek() == Some(b'}') {
            return Ok((Value::Object(map), cur.advance(1)));
        }

        loop {
            if cur.peek() != Some(b'"') {
                return Err(cur.unexpected());
            }
            let (key, after_key) = parse_string(cur)?;
            let after_colon = after_key.skip_whitespace().expect(b':')?;
            let (value, after_value) = self.parse_value(after_colon, depth)?;
            if map.insert(key.to_string(), value).is_some() {
                trace!(key, "duplicate key, keeping the later value");
            }

            let next = after_value.skip_whitespace();
            match next.peek() {
                Some(b',') => cur = next.advance(1).skip_whitespace(),
                Some(b'}') => {
                    trace!(members = map.len(), "object end");
                    return Ok((Value::Object(map), next.advance(1)));
                }
                _ => return Err(next.unexpected()),
            }
        }
    }

    /// `cur` sits on `[`. Leaves the cursor just past the matching `]`.
    fn parse_array<'a>(&self, cur: Cursor<'a>, depth: usize) -> Parsed<'a> {
        self.check_depth(cur, depth)?;
        trace!(offset = cur.offset(), depth, "array start");

        let mut items = Vec::new();
        let mut cur = cur.expect(b'[')?.skip_whitespace();
        if cur.peek() == Some(b']') {
            return Ok((Value::Array(items), cur.advance(1)));
        }

        loop {
            let (value, after_value) = self.parse_value(cur, depth)?;
            items.push(value);

            let next = after_value.skip_whitespace();
            match next.peek() {
                Some(b',') => cur = next.advance(1),
                Some(b']') => {
                    trace!(elements = items.len(), "array end");
                    return Ok((Value::Array(items), next.advance(1)));
                }
                _ => return Err(next.unexpected()),
            }
        }
    }
}

/// `cur` sits on the opening `"`. Returns the raw body and a cursor just past
/// the closing quote.
fn parse_string(cur: Cursor<'_>) -> Result<(&str, Cursor<'_>), ParseError> {
    let open = cur.expect(b'"')?;
    let bytes = open.rest().as_bytes();
    // The opening quote never counts as the preceding byte.
    let end = (0..bytes.len())
        .find(|&i| bytes[i] == b'"' && (i == 0 || bytes[i - 1] != b'\\'));
    match end {
        Some(i) => {
            let close = open.advance(i);
            Ok((open.slice_to(close), close.advance(1)))
        }
        None => Err(open.advance(bytes.len()).end_of_input()),
    }
}

/// Numerals of the form `-?\d+(\.\d+)?`.
fn parse_number(cur: Cursor<'_>) -> Parsed<'_> {
    let invalid = ParseError::InvalidNumber {
        offset: cur.offset(),
    };

    let digits_start = if cur.peek() == Some(b'-') {
        cur.advance(1)
    } else {
        cur
    };
    let int_end = skip_digits(digits_start);
    if int_end == digits_start {
        return Err(invalid);
    }

    if int_end.peek() == Some(b'.') {
        let frac_start = int_end.advance(1);
        let frac_end = skip_digits(frac_start);
        if frac_end == frac_start || !frac_end.at_delimiter() {
            return Err(invalid);
        }
        let f: f64 = cur.slice_to(frac_end).parse().map_err(|_| invalid.clone())?;
        if !f.is_finite() {
            return Err(invalid);
        }
        return Ok((Value::Float(f), frac_end));
    }

    if !int_end.at_delimiter() {
        return Err(invalid);
    }
    let n: i64 = cur.slice_to(int_end).parse().map_err(|_| invalid)?;
    Ok((Value::Integer(n), int_end))
}

fn skip_digits(cur: Cursor<'_>) -> Cursor<'_> {
    let n = cur.rest().bytes().take_while(u8::is_ascii_digit).count();
    cur.advance(n)
}

/// Exact match on `literal`, which must then be followed by a delimiter.
fn parse_literal<'a>(cur: Cursor<'a>, literal: &'static str, value: Value) -> Parsed<'a> {
    let rest = cur.rest();
    if let Some(after) = rest.strip_prefix(literal) {
        let end = cur.advance(rest.len() - after.len());
        if end.at_delimiter() {
            return Ok((value, end));
        }
    } else if literal.starts_with(rest) {
        return Err(cur.advance(rest.len()).end_of_input());
    }
    Err(ParseError::InvalidLiteral {
        offset: cur.offset(),
    })
}
