//! JSON input cursor over a byte slice.
//!
//! The decoder never builds a value tree. It scans one token at a time and
//! hands out the bytes, borrowed from the input whenever possible.

use std::borrow::Cow;

use crate::util::find_ending_quote;
use crate::{JsonRead, Kind, StreamError};

pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Decoder limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Maximum number of nested arrays/objects inside one token.
    pub max_depth: usize,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Input cursor implementing [`JsonRead`].
///
/// A failed read leaves the cursor where it was before the call.
///
/// # Example
///
/// ```
/// use json_adapter_stream::{Decoder, JsonRead};
///
/// let mut d = Decoder::new(br#" {"a":[1,2]} "x\ny""#);
/// assert_eq!(&*d.read_raw_token().unwrap(), br#"{"a":[1,2]}"#);
/// assert_eq!(&*d.read_quoted_string().unwrap(), b"x\ny");
/// ```
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    data: &'a [u8],
    x: usize,
    options: DecoderOptions,
}

impl<'a> Decoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_options(data, DecoderOptions::default())
    }

    pub fn with_options(data: &'a [u8], options: DecoderOptions) -> Self {
        Self { data, x: 0, options }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Input not consumed yet.
    pub fn remaining(&self) -> &'a [u8] {
        let data = self.data;
        &data[self.x..]
    }

    /// Reports the type of the next value without consuming it.
    pub fn peek(&mut self) -> Result<Kind, StreamError> {
        self.skip_whitespace();
        let byte = *self.data.get(self.x).ok_or(StreamError::UnexpectedEof)?;
        Kind::of_byte(byte).ok_or(StreamError::UnexpectedByte {
            byte,
            offset: self.x,
        })
    }

    /// Consumes the next value without returning it.
    pub fn skip(&mut self) -> Result<(), StreamError> {
        self.raw().map(|_| ())
    }

    /// Next complete value, borrowed from the input.
    pub fn raw(&mut self) -> Result<&'a [u8], StreamError> {
        self.skip_whitespace();
        let data = self.data;
        let start = self.x;
        match self.scan_value(0) {
            Ok(()) => Ok(&data[start..self.x]),
            Err(err) => {
                self.x = start;
                Err(err)
            }
        }
    }

    /// Contents of the next string literal with escapes resolved.
    pub fn str_bytes(&mut self) -> Result<Cow<'a, [u8]>, StreamError> {
        self.skip_whitespace();
        let data = self.data;
        let start = self.x;
        let byte = *data.get(start).ok_or(StreamError::UnexpectedEof)?;
        if byte != b'"' {
            return Err(match Kind::of_byte(byte) {
                Some(found) => StreamError::Type {
                    expected: Kind::String,
                    found,
                },
                None => StreamError::UnexpectedByte {
                    byte,
                    offset: start,
                },
            });
        }
        let end = find_ending_quote(data, start + 1)?;
        let body = &data[start + 1..end];
        let out = if body.contains(&b'\\') {
            Cow::Owned(unescape(body, start)?)
        } else {
            check_plain(body, start + 1)?;
            Cow::Borrowed(body)
        };
        self.x = end + 1;
        Ok(out)
    }

    fn skip_whitespace(&mut self) {
        while self.x < self.data.len() {
            match self.data[self.x] {
                b' ' | b'\t' | b'\n' | b'\r' => self.x += 1,
                _ => break,
            }
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), StreamError> {
        match self.data.get(self.x) {
            Some(&b) if b == byte => {
                self.x += 1;
                Ok(())
            }
            Some(&b) => Err(StreamError::UnexpectedByte {
                byte: b,
                offset: self.x,
            }),
            None => Err(StreamError::UnexpectedEof),
        }
    }

    fn scan_value(&mut self, depth: usize) -> Result<(), StreamError> {
        self.skip_whitespace();
        let byte = *self.data.get(self.x).ok_or(StreamError::UnexpectedEof)?;
        match byte {
            b'"' => self.scan_string(),
            b'[' => self.scan_array(depth),
            b'{' => self.scan_object(depth),
            b't' => self.scan_literal(b"true").and_then(|()| self.scan_delimiter()),
            b'f' => self.scan_literal(b"false").and_then(|()| self.scan_delimiter()),
            b'n' => self.scan_literal(b"null").and_then(|()| self.scan_delimiter()),
            b'-' | b'0'..=b'9' => self.scan_number().and_then(|()| self.scan_delimiter()),
            _ => Err(StreamError::UnexpectedByte {
                byte,
                offset: self.x,
            }),
        }
    }

    /// A bare scalar must be followed by whitespace, a separator, a closing
    /// bracket or the end of input.
    fn scan_delimiter(&self) -> Result<(), StreamError> {
        match self.data.get(self.x) {
            None | Some(b' ' | b'\t' | b'\n' | b'\r' | b',' | b':' | b']' | b'}') => Ok(()),
            Some(&byte) => Err(StreamError::UnexpectedByte {
                byte,
                offset: self.x,
            }),
        }
    }

    fn scan_string(&mut self) -> Result<(), StreamError> {
        let end = find_ending_quote(self.data, self.x + 1)?;
        self.x = end + 1;
        Ok(())
    }

    fn scan_literal(&mut self, lit: &[u8]) -> Result<(), StreamError> {
        for (i, &expected) in lit.iter().enumerate() {
            match self.data.get(self.x + i) {
                Some(&b) if b == expected => {}
                Some(&b) => {
                    return Err(StreamError::UnexpectedByte {
                        byte: b,
                        offset: self.x + i,
                    })
                }
                None => return Err(StreamError::UnexpectedEof),
            }
        }
        self.x += lit.len();
        Ok(())
    }

    fn scan_number(&mut self) -> Result<(), StreamError> {
        let data = self.data;
        let start = self.x;
        let mut x = start;
        if data.get(x) == Some(&b'-') {
            x += 1;
        }
        match data.get(x) {
            Some(b'0') => {
                x += 1;
                if matches!(data.get(x), Some(b'0'..=b'9')) {
                    return Err(StreamError::InvalidNumber(start));
                }
            }
            Some(b'1'..=b'9') => x = skip_digits(data, x),
            Some(_) => return Err(StreamError::InvalidNumber(start)),
            None => return Err(StreamError::UnexpectedEof),
        }
        if data.get(x) == Some(&b'.') {
            let frac = skip_digits(data, x + 1);
            if frac == x + 1 {
                return Err(StreamError::InvalidNumber(start));
            }
            x = frac;
        }
        if matches!(data.get(x), Some(b'e' | b'E')) {
            x += 1;
            if matches!(data.get(x), Some(b'+' | b'-')) {
                x += 1;
            }
            let exp = skip_digits(data, x);
            if exp == x {
                return Err(StreamError::InvalidNumber(start));
            }
            x = exp;
        }
        self.x = x;
        Ok(())
    }

    fn scan_array(&mut self, depth: usize) -> Result<(), StreamError> {
        if depth >= self.options.max_depth {
            return Err(StreamError::TooDeep(self.options.max_depth));
        }
        self.x += 1;
        self.skip_whitespace();
        if self.data.get(self.x) == Some(&b']') {
            self.x += 1;
            return Ok(());
        }
        loop {
            self.scan_value(depth + 1)?;
            self.skip_whitespace();
            match self.data.get(self.x) {
                Some(b',') => self.x += 1,
                Some(b']') => {
                    self.x += 1;
                    return Ok(());
                }
                Some(&byte) => {
                    return Err(StreamError::UnexpectedByte {
                        byte,
                        offset: self.x,
                    })
                }
                None => return Err(StreamError::UnexpectedEof),
            }
        }
    }

    fn scan_object(&mut self, depth: usize) -> Result<(), StreamError> {
        if depth >= self.options.max_depth {
            return Err(StreamError::TooDeep(self.options.max_depth));
        }
        self.x += 1;
        self.skip_whitespace();
        if self.data.get(self.x) == Some(&b'}') {
            self.x += 1;
            return Ok(());
        }
        loop {
            self.skip_whitespace();
            match self.data.get(self.x) {
                Some(b'"') => self.scan_string()?,
                Some(&byte) => {
                    return Err(StreamError::UnexpectedByte {
                        byte,
                        offset: self.x,
                    })
                }
                None => return Err(StreamError::UnexpectedEof),
            }
            self.skip_whitespace();
            self.expect(b':')?;
            self.scan_value(depth + 1)?;
            self.skip_whitespace();
            match self.data.get(self.x) {
                Some(b',') => self.x += 1,
                Some(b'}') => {
                    self.x += 1;
                    return Ok(());
                }
                Some(&byte) => {
                    return Err(StreamError::UnexpectedByte {
                        byte,
                        offset: self.x,
                    })
                }
                None => return Err(StreamError::UnexpectedEof),
            }
        }
    }
}

impl JsonRead for Decoder<'_> {
    fn read_raw_token(&mut self) -> Result<Cow<'_, [u8]>, StreamError> {
        self.raw().map(Cow::Borrowed)
    }

    fn read_quoted_string(&mut self) -> Result<Cow<'_, [u8]>, StreamError> {
        self.str_bytes()
    }
}

fn skip_digits(data: &[u8], mut x: usize) -> usize {
    while matches!(data.get(x), Some(b'0'..=b'9')) {
        x += 1;
    }
    x
}

/// Rejects raw control characters and invalid UTF-8 in an escape-free body.
fn check_plain(body: &[u8], offset: usize) -> Result<(), StreamError> {
    if let Some(i) = body.iter().position(|&b| b < 0x20) {
        return Err(StreamError::UnexpectedByte {
            byte: body[i],
            offset: offset + i,
        });
    }
    std::str::from_utf8(body).map_err(|_| StreamError::InvalidUtf8)?;
    Ok(())
}

/// Resolves escape sequences in a string body. `quote` is the offset of the
/// opening quote, used for error reporting.
fn unescape(body: &[u8], quote: usize) -> Result<Vec<u8>, StreamError> {
    let mut quoted = Vec::with_capacity(body.len() + 2);
    quoted.push(b'"');
    quoted.extend_from_slice(body);
    quoted.push(b'"');
    let s: String = serde_json::from_slice(&quoted).map_err(|_| StreamError::InvalidEscape(quote))?;
    Ok(s.into_bytes())
}
