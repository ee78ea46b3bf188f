//! Calling-convention adapters between value types and a JSON stream.
//!
//! Generated code does not know how a type serializes itself. Each type picks
//! one strategy by implementing its capability traits, and the generator emits
//! the matching entry point:
//!
//! | Strategy | Capability | Raw | String |
//! |---|---|---|---|
//! | Native | [`Marshaler`] / [`Unmarshaler`] | [`encode_native`] / [`decode_native`] | alias of raw |
//! | Text | [`TextMarshaler`] / [`TextUnmarshaler`] | [`encode_text`] / [`decode_text`] | [`encode_string_text`] / [`decode_string_text`] |
//! | JSON | [`JsonMarshaler`] / [`JsonUnmarshaler`] | [`encode_json`] / [`decode_json`] | alias of raw |
//! | External | `serde::Serialize` / `serde::Deserialize` | [`encode_external`] / [`decode_external`] | alias of raw |
//!
//! Every entry point returns a [`Result`]. Marshal failures are reported as
//! [`Error::CapabilityEncode`] instead of being dropped, and nothing is written
//! to the cursor in that case.
//!
//! ```
//! use json_adapter::{decode_string_text, encode_string_text, TextMarshaler, TextUnmarshaler};
//! use json_adapter::stream::{Decoder, Encoder};
//!
//! #[derive(Debug, PartialEq)]
//! struct BigInt(u128);
//!
//! impl TextMarshaler for BigInt {
//!     type Error = std::convert::Infallible;
//!
//!     fn marshal_text(&self) -> Result<Vec<u8>, Self::Error> {
//!         Ok(self.0.to_string().into_bytes())
//!     }
//! }
//!
//! impl TextUnmarshaler for BigInt {
//!     type Error = String;
//!
//!     fn unmarshal_text(text: &[u8]) -> Result<Self, Self::Error> {
//!         let text = std::str::from_utf8(text).map_err(|e| e.to_string())?;
//!         text.parse().map(BigInt).map_err(|e| format!("{e}"))
//!     }
//! }
//!
//! let mut e = Encoder::new();
//! encode_string_text(&mut e, &BigInt(u128::MAX)).unwrap();
//! assert_eq!(e.bytes(), br#""340282366920938463463374607431768211455""#);
//!
//! let mut d = Decoder::new(e.bytes());
//! assert_eq!(decode_string_text::<BigInt, _>(&mut d).unwrap(), BigInt(u128::MAX));
//! ```

mod capability;
mod dispatch;
mod error;
mod external;
mod json;
mod native;
mod observe;
mod text;

pub use json_adapter_stream as stream;
pub use json_adapter_stream::{JsonRead, JsonWrite, StreamError};

pub use capability::{
    JsonMarshaler, JsonUnmarshaler, Marshaler, TextMarshaler, TextUnmarshaler, Unmarshaler,
};
pub use dispatch::{Direction, Shape, Strategy};
pub use error::{BoxError, Error, ErrorKind, Result};
pub use external::{decode_external, decode_string_external, encode_external, encode_string_external};
pub use json::{decode_json, decode_string_json, encode_json, encode_string_json};
pub use native::{decode_native, decode_string_native, encode_native, encode_string_native};
pub use text::{decode_string_text, decode_text, encode_string_text, encode_text};
