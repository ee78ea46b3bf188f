use std::fmt;

/// Type of the next JSON value, judged by its leading byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    String,
    Number,
    Null,
    Bool,
    Array,
    Object,
}

impl Kind {
    /// Classifies a value by the first byte of its token.
    pub fn of_byte(byte: u8) -> Option<Kind> {
        match byte {
            b'"' => Some(Kind::String),
            b'-' | b'0'..=b'9' => Some(Kind::Number),
            b'n' => Some(Kind::Null),
            b't' | b'f' => Some(Kind::Bool),
            b'[' => Some(Kind::Array),
            b'{' => Some(Kind::Object),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
