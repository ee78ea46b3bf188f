//! In-memory JSON output cursor.

use crate::util::write_escaped;
use crate::JsonWrite;

const DEFAULT_CAPACITY: usize = 1024;

/// Growable output buffer implementing [`JsonWrite`].
///
/// # Example
///
/// ```
/// use json_adapter_stream::{Encoder, JsonWrite};
///
/// let mut e = Encoder::new();
/// e.write_raw(b"123");
/// e.write_quoted_string(b"a\"b");
/// assert_eq!(e.bytes(), br#"123"a\"b""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an encoder whose buffer can hold `capacity` bytes before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Bytes written so far.
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Takes the written bytes, leaving the encoder empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Discards written bytes but keeps the allocation.
    pub fn reset(&mut self) {
        self.buf.clear();
    }
}

impl JsonWrite for Encoder {
    fn write_raw(&mut self, raw: &[u8]) {
        self.buf.extend_from_slice(raw);
    }

    fn write_quoted_string(&mut self, s: &[u8]) {
        write_escaped(&mut self.buf, s);
    }
}

impl JsonWrite for Vec<u8> {
    fn write_raw(&mut self, raw: &[u8]) {
        self.extend_from_slice(raw);
    }

    fn write_quoted_string(&mut self, s: &[u8]) {
        write_escaped(self, s);
    }
}

impl AsRef<[u8]> for Encoder {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}
