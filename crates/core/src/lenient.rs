//! `deserialize_with` helpers for payloads built from browser form inputs.
//!
//! The drag-and-drop and 3D viewer clients send ids and coordinates
//! straight from DOM attributes and `<input>` values, so a number may arrive
//! as `3`, `3.0`, `"3"` or `""`. These helpers accept all of those.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::types::DbId;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumberOrText {
    fn into_id<E: serde::de::Error>(self) -> Result<Option<DbId>, E> {
        match self {
            NumberOrText::Int(n) => Ok(Some(n)),
            NumberOrText::Float(f) if f.fract() == 0.0 => Ok(Some(f as DbId)),
            NumberOrText::Float(f) => Err(E::custom(format!("invalid id: {f}"))),
            NumberOrText::Text(s) if s.trim().is_empty() => Ok(None),
            NumberOrText::Text(s) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| E::custom(format!("invalid id: '{s}'"))),
        }
    }

    fn into_f64<E: serde::de::Error>(self) -> Result<Option<f64>, E> {
        match self {
            NumberOrText::Int(n) => Ok(Some(n as f64)),
            NumberOrText::Float(f) => Ok(Some(f)),
            NumberOrText::Text(s) if s.trim().is_empty() => Ok(None),
            NumberOrText::Text(s) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| E::custom(format!("invalid number: '{s}'"))),
        }
    }
}

/// A required id given as a number or numeric string.
pub fn id<'de, D>(deserializer: D) -> Result<DbId, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrText::deserialize(deserializer)?
        .into_id()?
        .ok_or_else(|| D::Error::custom("id must not be empty"))
}

/// An optional id; `null` and `""` both read as absent.
///
/// Pair with `#[serde(default)]` so a missing field is also absent.
pub fn opt_id<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(value) => value.into_id(),
        None => Ok(None),
    }
}

/// An optional float; `null` and `""` both read as absent.
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(value) => value.into_f64(),
        None => Ok(None),
    }
}
