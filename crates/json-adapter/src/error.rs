//! Adapter error type.

use json_adapter_stream::StreamError;
use thiserror::Error;

/// Boxed cause carried by capability errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure of a single adapter call.
///
/// When a decode call fails no value is produced.
#[derive(Debug, Error)]
pub enum Error {
    /// The cursor could not produce the next token.
    #[error("read json: {0}")]
    StreamRead(#[from] StreamError),
    /// The value's unmarshal method rejected the bytes.
    #[error("decode {type_name}: {source}")]
    CapabilityDecode {
        type_name: &'static str,
        #[source]
        source: BoxError,
    },
    /// The value's marshal method failed.
    #[error("encode {type_name}: {source}")]
    CapabilityEncode {
        type_name: &'static str,
        #[source]
        source: BoxError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    StreamRead,
    CapabilityDecode,
    CapabilityEncode,
}

impl Error {
    /// Decode failure attributed to `T`.
    pub fn decode<T: ?Sized>(cause: impl Into<BoxError>) -> Self {
        Error::CapabilityDecode {
            type_name: std::any::type_name::<T>(),
            source: cause.into(),
        }
    }

    /// Encode failure attributed to `T`.
    pub fn encode<T: ?Sized>(cause: impl Into<BoxError>) -> Self {
        Error::CapabilityEncode {
            type_name: std::any::type_name::<T>(),
            source: cause.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::StreamRead(_) => ErrorKind::StreamRead,
            Error::CapabilityDecode { .. } => ErrorKind::CapabilityDecode,
            Error::CapabilityEncode { .. } => ErrorKind::CapabilityEncode,
        }
    }

    /// Type the failing capability belongs to. `None` for stream errors.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Error::StreamRead(_) => None,
            Error::CapabilityDecode { type_name, .. } | Error::CapabilityEncode { type_name, .. } => {
                Some(*type_name)
            }
        }
    }
}
