//! Native strategy: the value talks to the cursor itself.

use json_adapter_stream::{JsonRead, JsonWrite};

use crate::dispatch::{Direction, Strategy};
use crate::observe::outcome;
use crate::{Marshaler, Result, Unmarshaler};

/// Encodes `v` with its [`Marshaler`] implementation.
pub fn encode_native<T, W>(e: &mut W, v: &T) -> Result<()>
where
    T: Marshaler + ?Sized,
    W: JsonWrite + ?Sized,
{
    outcome::<T, _>(Strategy::Native, Direction::Encode, || v.encode(e))
}

/// Decodes a value with its [`Unmarshaler`] implementation.
pub fn decode_native<T, R>(d: &mut R) -> Result<T>
where
    T: Unmarshaler,
    R: JsonRead + ?Sized,
{
    outcome::<T, _>(Strategy::Native, Direction::Decode, || T::decode(d))
}

/// Same as [`encode_native`]; the marshaler is expected to emit a string
/// itself when the field needs one.
#[inline]
pub fn encode_string_native<T, W>(e: &mut W, v: &T) -> Result<()>
where
    T: Marshaler + ?Sized,
    W: JsonWrite + ?Sized,
{
    encode_native(e, v)
}

/// Same as [`decode_native`].
#[inline]
pub fn decode_string_native<T, R>(d: &mut R) -> Result<T>
where
    T: Unmarshaler,
    R: JsonRead + ?Sized,
{
    decode_native(d)
}
