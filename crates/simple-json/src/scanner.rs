//! Cursor over the source text, shared by every decoder branch.
//!
//! A [`Cursor`] is a copyable `(source, offset)` pair. Scanning operations
//! hand back a new cursor rather than mutating one in place, so each parse
//! routine returns the value it built together with the position just past
//! it, and every error can name the exact byte where scanning stopped.

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

/// The C `isspace` set: space, tab, newline, vertical tab, form feed, carriage return.
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Unconsumed remainder of the source.
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    /// Move forward `n` bytes, clamped to the end of input.
    ///
    /// Callers only advance over ASCII bytes they have already inspected, so
    /// the new position stays on a character boundary.
    pub fn advance(self, n: usize) -> Self {
        Self {
            src: self.src,
            pos: (self.pos + n).min(self.src.len()),
        }
    }

    pub fn skip_whitespace(self) -> Self {
        let skipped = self
            .rest()
            .bytes()
            .take_while(|&b| is_whitespace(b))
            .count();
        self.advance(skipped)
    }

    /// Consume exactly `byte`, or report what was found instead.
    pub fn expect(self, byte: u8) -> Result<Self, ParseError> {
        match self.peek() {
            Some(b) if b == byte => Ok(self.advance(1)),
            Some(_) => Err(self.unexpected()),
            None => Err(self.end_of_input()),
        }
    }

    /// True where a scalar token may legally end: end of input, whitespace,
    /// or one of the structural bytes `,` `]` `}` `:`.
    pub fn at_delimiter(&self) -> bool {
        match self.peek() {
            None => true,
            Some(b) => is_whitespace(b) || matches!(b, b',' | b']' | b'}' | b':'),
        }
    }

    /// Source text between `self` and a later cursor `end`.
    pub fn slice_to(&self, end: Cursor<'a>) -> &'a str {
        &self.src[self.pos..end.pos]
    }

    /// `UnexpectedToken` naming the character under the cursor, or
    /// `UnexpectedEndOfInput` when there is none.
    pub fn unexpected(&self) -> ParseError {
        match self.rest().chars().next() {
            Some(found) => ParseError::UnexpectedToken {
                found,
                offset: self.pos,
            },
            None => self.end_of_input(),
        }
    }

    pub fn end_of_input(&self) -> ParseError {
        ParseError::UnexpectedEndOfInput { offset: self.pos }
    }
}
