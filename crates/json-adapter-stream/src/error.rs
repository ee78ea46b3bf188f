//! Stream cursor error type.

use thiserror::Error;

use crate::Kind;

/// Error produced when a cursor cannot hand out the next token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StreamError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("unexpected byte {byte:#04x} at offset {offset}")]
    UnexpectedByte { byte: u8, offset: usize },
    #[error("invalid UTF-8")]
    InvalidUtf8,
    #[error("invalid escape sequence at offset {0}")]
    InvalidEscape(usize),
    #[error("invalid number at offset {0}")]
    InvalidNumber(usize),
    #[error("number {0} does not fit the requested type")]
    NumberRange(String),
    #[error("nesting depth exceeds {0}")]
    TooDeep(usize),
    #[error("expected {expected}, found {found}")]
    Type { expected: Kind, found: Kind },
}
