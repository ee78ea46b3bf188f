//! Cursor capability traits.
//!
//! A writer only has to append raw bytes and escaped strings, a reader only has
//! to hand out the next raw token and the next unescaped string. Everything else
//! (`write_i64`, `read_str`, ...) is built on those four primitives.

use std::borrow::Cow;

use crate::util::format_float;
use crate::{Kind, StreamError};

/// Output side of a JSON stream.
pub trait JsonWrite {
    /// Appends `raw` verbatim. No validation is performed.
    fn write_raw(&mut self, raw: &[u8]);

    /// Appends `s` as a JSON string literal, escaping as needed.
    fn write_quoted_string(&mut self, s: &[u8]);

    fn write_null(&mut self) {
        self.write_raw(b"null");
    }

    fn write_bool(&mut self, value: bool) {
        let lit: &[u8] = if value { b"true" } else { b"false" };
        self.write_raw(lit);
    }

    fn write_i64(&mut self, value: i64) {
        self.write_raw(value.to_string().as_bytes());
    }

    fn write_u64(&mut self, value: u64) {
        self.write_raw(value.to_string().as_bytes());
    }

    /// Writes a float in shortest round-trip form. `NaN` becomes `null`.
    fn write_f64(&mut self, value: f64) {
        self.write_raw(format_float(value).as_bytes());
    }

    fn write_str(&mut self, s: &str) {
        self.write_quoted_string(s.as_bytes());
    }
}

/// Input side of a JSON stream.
pub trait JsonRead {
    /// Consumes the next complete JSON value and returns its bytes as they
    /// appear on the wire.
    fn read_raw_token(&mut self) -> Result<Cow<'_, [u8]>, StreamError>;

    /// Consumes the next JSON string literal and returns its unescaped contents.
    fn read_quoted_string(&mut self) -> Result<Cow<'_, [u8]>, StreamError>;

    fn read_null(&mut self) -> Result<(), StreamError> {
        let raw = self.read_raw_token()?;
        match &*raw {
            b"null" => Ok(()),
            other => Err(mismatch(Kind::Null, other)),
        }
    }

    fn read_bool(&mut self) -> Result<bool, StreamError> {
        let raw = self.read_raw_token()?;
        match &*raw {
            b"true" => Ok(true),
            b"false" => Ok(false),
            other => Err(mismatch(Kind::Bool, other)),
        }
    }

    fn read_i64(&mut self) -> Result<i64, StreamError> {
        let raw = self.read_raw_token()?;
        let text = number_text(&raw)?;
        text.parse()
            .map_err(|_| StreamError::NumberRange(text.to_string()))
    }

    fn read_u64(&mut self) -> Result<u64, StreamError> {
        let raw = self.read_raw_token()?;
        let text = number_text(&raw)?;
        text.parse()
            .map_err(|_| StreamError::NumberRange(text.to_string()))
    }

    fn read_f64(&mut self) -> Result<f64, StreamError> {
        let raw = self.read_raw_token()?;
        let text = number_text(&raw)?;
        text.parse()
            .map_err(|_| StreamError::NumberRange(text.to_string()))
    }

    fn read_str(&mut self) -> Result<String, StreamError> {
        match self.read_quoted_string()? {
            Cow::Borrowed(bytes) => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|_| StreamError::InvalidUtf8),
            Cow::Owned(bytes) => String::from_utf8(bytes).map_err(|_| StreamError::InvalidUtf8),
        }
    }
}

impl<W: JsonWrite + ?Sized> JsonWrite for &mut W {
    fn write_raw(&mut self, raw: &[u8]) {
        (**self).write_raw(raw);
    }

    fn write_quoted_string(&mut self, s: &[u8]) {
        (**self).write_quoted_string(s);
    }
}

impl<R: JsonRead + ?Sized> JsonRead for &mut R {
    fn read_raw_token(&mut self) -> Result<Cow<'_, [u8]>, StreamError> {
        (**self).read_raw_token()
    }

    fn read_quoted_string(&mut self) -> Result<Cow<'_, [u8]>, StreamError> {
        (**self).read_quoted_string()
    }
}

fn number_text(raw: &[u8]) -> Result<&str, StreamError> {
    if raw.first().copied().and_then(Kind::of_byte) != Some(Kind::Number) {
        return Err(mismatch(Kind::Number, raw));
    }
    std::str::from_utf8(raw).map_err(|_| StreamError::InvalidUtf8)
}

fn mismatch(expected: Kind, raw: &[u8]) -> StreamError {
    match raw.first().copied() {
        None => StreamError::UnexpectedEof,
        Some(byte) => match Kind::of_byte(byte) {
            Some(found) => StreamError::Type { expected, found },
            None => StreamError::UnexpectedByte { byte, offset: 0 },
        },
    }
}
