//! Fixture types, one group per strategy.

#![allow(dead_code)]

use json_adapter::{
    Error, JsonMarshaler, JsonRead, JsonUnmarshaler, JsonWrite, Marshaler, Result,
    TextMarshaler, TextUnmarshaler, Unmarshaler,
};
use serde::{Deserialize, Serialize};

// ---- Native ----

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberNative {
    pub value: i64,
}

impl Marshaler for NumberNative {
    fn encode<W: JsonWrite + ?Sized>(&self, e: &mut W) -> Result<()> {
        e.write_i64(self.value);
        Ok(())
    }
}

impl Unmarshaler for NumberNative {
    fn decode<R: JsonRead + ?Sized>(d: &mut R) -> Result<Self> {
        Ok(Self {
            value: d.read_i64()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringNative {
    pub value: String,
}

impl Marshaler for StringNative {
    fn encode<W: JsonWrite + ?Sized>(&self, e: &mut W) -> Result<()> {
        e.write_str(&self.value);
        Ok(())
    }
}

impl Unmarshaler for StringNative {
    fn decode<R: JsonRead + ?Sized>(d: &mut R) -> Result<Self> {
        Ok(Self {
            value: d.read_str()?,
        })
    }
}

/// Accepts 0..=100 only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percent(pub u8);

impl Marshaler for Percent {
    fn encode<W: JsonWrite + ?Sized>(&self, e: &mut W) -> Result<()> {
        if self.0 > 100 {
            return Err(Error::encode::<Self>(format!("{} exceeds 100", self.0)));
        }
        e.write_u64(u64::from(self.0));
        Ok(())
    }
}

impl Unmarshaler for Percent {
    fn decode<R: JsonRead + ?Sized>(d: &mut R) -> Result<Self> {
        let n = d.read_u64()?;
        match u8::try_from(n) {
            Ok(p) if p <= 100 => Ok(Percent(p)),
            _ => Err(Error::decode::<Self>(format!("{n} exceeds 100"))),
        }
    }
}

// ---- Text ----

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub value: String,
}

impl TextMarshaler for Text {
    type Error = std::convert::Infallible;

    fn marshal_text(&self) -> std::result::Result<Vec<u8>, Self::Error> {
        Ok(self.value.as_bytes().to_vec())
    }
}

impl TextUnmarshaler for Text {
    type Error = std::str::Utf8Error;

    fn unmarshal_text(text: &[u8]) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            value: std::str::from_utf8(text)?.to_owned(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Port(pub u16);

impl TextMarshaler for Port {
    type Error = std::convert::Infallible;

    fn marshal_text(&self) -> std::result::Result<Vec<u8>, Self::Error> {
        Ok(self.0.to_string().into_bytes())
    }
}

impl TextUnmarshaler for Port {
    type Error = String;

    fn unmarshal_text(text: &[u8]) -> std::result::Result<Self, Self::Error> {
        let text = std::str::from_utf8(text).map_err(|e| e.to_string())?;
        text.parse()
            .map(Port)
            .map_err(|e| format!("port {text:?}: {e}"))
    }
}

// ---- JSON ----

/// Holds whatever JSON value it was given.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberJson {
    pub value: serde_json::Value,
}

impl JsonMarshaler for NumberJson {
    type Error = serde_json::Error;

    fn marshal_json(&self) -> std::result::Result<Vec<u8>, Self::Error> {
        serde_json::to_vec(&self.value)
    }
}

impl JsonUnmarshaler for NumberJson {
    type Error = serde_json::Error;

    fn unmarshal_json(raw: &[u8]) -> std::result::Result<Self, Self::Error> {
        serde_json::from_slice(raw).map(|value| Self { value })
    }
}

/// Marshals to a quoted decimal, the usual representation of money amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cents(pub i64);

impl JsonMarshaler for Cents {
    type Error = serde_json::Error;

    fn marshal_json(&self) -> std::result::Result<Vec<u8>, Self::Error> {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        serde_json::to_vec(&format!("{sign}{}.{:02}", abs / 100, abs % 100))
    }
}

impl JsonUnmarshaler for Cents {
    type Error = String;

    fn unmarshal_json(raw: &[u8]) -> std::result::Result<Self, Self::Error> {
        let s: String = serde_json::from_slice(raw).map_err(|e| e.to_string())?;
        let (units, frac) = s.split_once('.').ok_or_else(|| format!("{s:?} has no fraction"))?;
        if frac.len() != 2 {
            return Err(format!("{s:?} needs two fraction digits"));
        }
        let negative = units.starts_with('-');
        let units: i64 = units.trim_start_matches('-').parse().map_err(|e| format!("{e}"))?;
        let frac: i64 = frac.parse().map_err(|e| format!("{e}"))?;
        let cents = units * 100 + frac;
        Ok(Cents(if negative { -cents } else { cents }))
    }
}

// ---- External ----

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Number(pub i64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

// ---- Failing capabilities ----

/// Every marshal call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Poisoned;

impl TextMarshaler for Poisoned {
    type Error = &'static str;

    fn marshal_text(&self) -> std::result::Result<Vec<u8>, Self::Error> {
        Err("poisoned value")
    }
}

impl JsonMarshaler for Poisoned {
    type Error = &'static str;

    fn marshal_json(&self) -> std::result::Result<Vec<u8>, Self::Error> {
        Err("poisoned value")
    }
}

/// A map with non-string keys, which `serde_json` refuses to serialize.
pub fn unserializable() -> std::collections::BTreeMap<Point, i32> {
    let mut map = std::collections::BTreeMap::new();
    map.insert(Point { x: 1, y: 2 }, 3);
    map
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.x, self.y).cmp(&(other.x, other.y))
    }
}
