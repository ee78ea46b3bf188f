//! External strategy: no capability on the type, `serde_json` does the work.

use json_adapter_stream::{JsonRead, JsonWrite};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::dispatch::{Direction, Strategy};
use crate::observe::outcome;
use crate::{Error, Result};

/// Serializes `v` with `serde_json` and writes the result verbatim.
///
/// Nothing is written when serialization fails.
pub fn encode_external<T, W>(e: &mut W, v: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    W: JsonWrite + ?Sized,
{
    outcome::<T, _>(Strategy::External, Direction::Encode, || {
        let raw = serde_json::to_vec(v).map_err(Error::encode::<T>)?;
        e.write_raw(&raw);
        Ok(())
    })
}

/// Reads the next raw token and deserializes it with `serde_json`.
pub fn decode_external<T, R>(d: &mut R) -> Result<T>
where
    T: DeserializeOwned,
    R: JsonRead + ?Sized,
{
    outcome::<T, _>(Strategy::External, Direction::Decode, || {
        let raw = d.read_raw_token()?;
        serde_json::from_slice(&raw).map_err(Error::decode::<T>)
    })
}

/// Same as [`encode_external`].
#[inline]
pub fn encode_string_external<T, W>(e: &mut W, v: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    W: JsonWrite + ?Sized,
{
    encode_external(e, v)
}

/// Same as [`decode_external`].
#[inline]
pub fn decode_string_external<T, R>(d: &mut R) -> Result<T>
where
    T: DeserializeOwned,
    R: JsonRead + ?Sized,
{
    decode_external(d)
}
