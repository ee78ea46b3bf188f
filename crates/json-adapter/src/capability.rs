//! Per-type marshaling capabilities.
//!
//! A type implements the pair belonging to one strategy. Unmarshal methods
//! construct the value, so a rejected input never leaves a half-filled value
//! behind.

use json_adapter_stream::{JsonRead, JsonWrite};

use crate::{BoxError, Result};

/// Writes itself straight onto the cursor.
pub trait Marshaler {
    fn encode<W: JsonWrite + ?Sized>(&self, e: &mut W) -> Result<()>;
}

/// Reads itself straight from the cursor.
pub trait Unmarshaler: Sized {
    fn decode<R: JsonRead + ?Sized>(d: &mut R) -> Result<Self>;
}

/// Produces a textual form of the value.
pub trait TextMarshaler {
    type Error: Into<BoxError>;

    fn marshal_text(&self) -> std::result::Result<Vec<u8>, Self::Error>;
}

/// Parses the textual form produced by [`TextMarshaler`].
pub trait TextUnmarshaler: Sized {
    type Error: Into<BoxError>;

    fn unmarshal_text(text: &[u8]) -> std::result::Result<Self, Self::Error>;
}

/// Produces one complete JSON value.
pub trait JsonMarshaler {
    type Error: Into<BoxError>;

    fn marshal_json(&self) -> std::result::Result<Vec<u8>, Self::Error>;
}

/// Parses one complete JSON value.
pub trait JsonUnmarshaler: Sized {
    type Error: Into<BoxError>;

    fn unmarshal_json(raw: &[u8]) -> std::result::Result<Self, Self::Error>;
}
