//! Streaming JSON cursors.
//!
//! [`JsonWrite`] and [`JsonRead`] describe what a stream has to offer to the
//! adapter layer: raw token bytes and quoted strings, in both directions.
//! [`Encoder`] and [`Decoder`] are in-memory implementations of those traits.

mod cursor;
mod decoder;
mod encoder;
mod error;
mod kind;
mod util;

pub use cursor::{JsonRead, JsonWrite};
pub use decoder::{Decoder, DecoderOptions, DEFAULT_MAX_DEPTH};
pub use encoder::Encoder;
pub use error::StreamError;
pub use kind::Kind;
