//! Text strategy: values that marshal to and from plain text.
//!
//! The raw shape writes the text as-is, so it must already be a valid JSON
//! token (digits, for instance). The string shape quotes and escapes it.

use json_adapter_stream::{JsonRead, JsonWrite};

use crate::dispatch::{Direction, Strategy};
use crate::observe::outcome;
use crate::{Error, Result, TextMarshaler, TextUnmarshaler};

/// Writes the marshaled text verbatim.
///
/// Nothing is written when marshaling fails.
pub fn encode_text<T, W>(e: &mut W, v: &T) -> Result<()>
where
    T: TextMarshaler + ?Sized,
    W: JsonWrite + ?Sized,
{
    outcome::<T, _>(Strategy::Text, Direction::Encode, || {
        let text = v.marshal_text().map_err(Error::encode::<T>)?;
        e.write_raw(&text);
        Ok(())
    })
}

/// Reads the next raw token and hands it to `unmarshal_text`.
pub fn decode_text<T, R>(d: &mut R) -> Result<T>
where
    T: TextUnmarshaler,
    R: JsonRead + ?Sized,
{
    outcome::<T, _>(Strategy::Text, Direction::Decode, || {
        let raw = d.read_raw_token()?;
        T::unmarshal_text(&raw).map_err(Error::decode::<T>)
    })
}

/// Writes the marshaled text as a JSON string.
///
/// Nothing is written when marshaling fails.
pub fn encode_string_text<T, W>(e: &mut W, v: &T) -> Result<()>
where
    T: TextMarshaler + ?Sized,
    W: JsonWrite + ?Sized,
{
    outcome::<T, _>(Strategy::Text, Direction::Encode, || {
        let text = v.marshal_text().map_err(Error::encode::<T>)?;
        e.write_quoted_string(&text);
        Ok(())
    })
}

/// Reads the next JSON string and hands its unescaped contents to
/// `unmarshal_text`.
pub fn decode_string_text<T, R>(d: &mut R) -> Result<T>
where
    T: TextUnmarshaler,
    R: JsonRead + ?Sized,
{
    outcome::<T, _>(Strategy::Text, Direction::Decode, || {
        let text = d.read_quoted_string()?;
        T::unmarshal_text(&text).map_err(Error::decode::<T>)
    })
}
