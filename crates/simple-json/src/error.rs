//! Error types for decoding and for typed access into a parsed tree.

use crate::value::ValueKind;
use thiserror::Error;

/// Errors that abort a [`parse`](crate::parse) call.
///
/// Every variant carries the byte offset into the source text where the
/// problem was detected. No partial tree is ever returned alongside one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text ended while a value, key or closing delimiter was still expected.
    #[error("unexpected end of input at byte {offset}")]
    UnexpectedEndOfInput { offset: usize },

    /// A byte that cannot start or continue the current production.
    #[error("unexpected token {found:?} at byte {offset}")]
    UnexpectedToken { found: char, offset: usize },

    /// Text at a `true`/`false`/`null` position is not exactly that literal.
    #[error("invalid literal at byte {offset}")]
    InvalidLiteral { offset: usize },

    /// A numeral that is malformed or does not fit its target type.
    #[error("invalid number at byte {offset}")]
    InvalidNumber { offset: usize },

    /// Objects and arrays nested deeper than the configured limit.
    #[error("nesting deeper than {limit} levels at byte {offset}")]
    DepthLimitExceeded { limit: usize, offset: usize },
}

impl ParseError {
    /// Byte offset of the failure in the source text.
    pub fn offset(&self) -> usize {
        match *self {
            ParseError::UnexpectedEndOfInput { offset }
            | ParseError::UnexpectedToken { offset, .. }
            | ParseError::InvalidLiteral { offset }
            | ParseError::InvalidNumber { offset }
            | ParseError::DepthLimitExceeded { offset, .. } => offset,
        }
    }
}

/// Errors from the checked accessors. They never invalidate the tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("key not found: {key:?}")]
    KeyNotFound { key: String },

    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid array index: {segment:?}")]
    InvalidIndex { segment: String },

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: ValueKind,
        found: ValueKind,
    },
}

/// Any error produced by simple-json.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("access error: {0}")]
    Access(#[from] AccessError),
}

/// Convenience alias used by callers that mix parsing and access.
pub type Result<T> = std::result::Result<T, JsonError>;
