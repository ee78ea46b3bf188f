//! Generic JSON strategy: values that marshal to and from a complete JSON
//! value of their own.

use json_adapter_stream::{JsonRead, JsonWrite};

use crate::dispatch::{Direction, Strategy};
use crate::observe::outcome;
use crate::{Error, JsonMarshaler, JsonUnmarshaler, Result};

/// Writes the bytes produced by `marshal_json` verbatim.
///
/// Nothing is written when marshaling fails.
pub fn encode_json<T, W>(e: &mut W, v: &T) -> Result<()>
where
    T: JsonMarshaler + ?Sized,
    W: JsonWrite + ?Sized,
{
    outcome::<T, _>(Strategy::Json, Direction::Encode, || {
        let raw = v.marshal_json().map_err(Error::encode::<T>)?;
        e.write_raw(&raw);
        Ok(())
    })
}

/// Reads the next raw token and hands it to `unmarshal_json`.
pub fn decode_json<T, R>(d: &mut R) -> Result<T>
where
    T: JsonUnmarshaler,
    R: JsonRead + ?Sized,
{
    outcome::<T, _>(Strategy::Json, Direction::Decode, || {
        let raw = d.read_raw_token()?;
        T::unmarshal_json(&raw).map_err(Error::decode::<T>)
    })
}

/// Same as [`encode_json`]; `marshal_json` is trusted to produce a string
/// when the field needs one.
#[inline]
pub fn encode_string_json<T, W>(e: &mut W, v: &T) -> Result<()>
where
    T: JsonMarshaler + ?Sized,
    W: JsonWrite + ?Sized,
{
    encode_json(e, v)
}

/// Same as [`decode_json`].
#[inline]
pub fn decode_string_json<T, R>(d: &mut R) -> Result<T>
where
    T: JsonUnmarshaler,
    R: JsonRead + ?Sized,
{
    decode_json(d)
}
