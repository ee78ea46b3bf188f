//! Strategy × shape × direction table.
//!
//! Code generators use this to pick the entry point to emit for a field and to
//! find out which string variants are plain aliases of the raw ones.

use std::fmt;

/// How a type exposes its serialization logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// [`Marshaler`](crate::Marshaler) / [`Unmarshaler`](crate::Unmarshaler).
    Native,
    /// [`TextMarshaler`](crate::TextMarshaler) / [`TextUnmarshaler`](crate::TextUnmarshaler).
    Text,
    /// [`JsonMarshaler`](crate::JsonMarshaler) / [`JsonUnmarshaler`](crate::JsonUnmarshaler).
    Json,
    /// `serde::Serialize` / `serde::Deserialize` through `serde_json`.
    External,
}

/// Wire shape of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// The value's own token.
    Raw,
    /// The value wrapped in a JSON string literal.
    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Encode,
    Decode,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Native,
        Strategy::Text,
        Strategy::Json,
        Strategy::External,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Native => "native",
            Strategy::Text => "text",
            Strategy::Json => "json",
            Strategy::External => "external",
        }
    }

    /// Shape that actually runs when `shape` is requested.
    ///
    /// Only text quoting is done by the adapter; every other string variant
    /// trusts the capability to produce the right token and runs the raw path.
    pub fn resolve(self, shape: Shape) -> Shape {
        match (self, shape) {
            (Strategy::Text, Shape::String) => Shape::String,
            _ => Shape::Raw,
        }
    }

    pub fn is_alias(self, shape: Shape) -> bool {
        self.resolve(shape) != shape
    }

    /// Name of the adapter function for this combination.
    pub fn entry_point(self, shape: Shape, direction: Direction) -> &'static str {
        use Direction::{Decode, Encode};
        use Shape::{Raw, String};
        use Strategy::{External, Json, Native, Text};

        match (direction, shape, self) {
            (Encode, Raw, Native) => "encode_native",
            (Encode, Raw, Text) => "encode_text",
            (Encode, Raw, Json) => "encode_json",
            (Encode, Raw, External) => "encode_external",
            (Encode, String, Native) => "encode_string_native",
            (Encode, String, Text) => "encode_string_text",
            (Encode, String, Json) => "encode_string_json",
            (Encode, String, External) => "encode_string_external",
            (Decode, Raw, Native) => "decode_native",
            (Decode, Raw, Text) => "decode_text",
            (Decode, Raw, Json) => "decode_json",
            (Decode, Raw, External) => "decode_external",
            (Decode, String, Native) => "decode_string_native",
            (Decode, String, Text) => "decode_string_text",
            (Decode, String, Json) => "decode_string_json",
            (Decode, String, External) => "decode_string_external",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Raw => "raw",
            Shape::String => "string",
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Encode => "encode",
            Direction::Decode => "decode",
        })
    }
}
