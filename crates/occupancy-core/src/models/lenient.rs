//! Deserializers that never fail on a bad field.
//!
//! Observation documents come from an app-controlled store and are not
//! validated on submission. A missing, null or wrongly-typed field
//! deserializes to `None` instead of rejecting the whole record.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use super::OccupancyLevel;

#[derive(Deserialize)]
#[serde(untagged)]
enum IntLike {
    Int(i64),
    Float(f64),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextLike {
    Text(String),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LevelLike {
    Level(OccupancyLevel),
    Other(IgnoredAny),
}

/// Integral numbers become `Some`; anything else becomes `None`.
pub fn int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IntLike::deserialize(deserializer)? {
        IntLike::Int(v) => Some(v),
        IntLike::Float(v) if v.fract() == 0.0 && v.is_finite() => Some(v as i64),
        IntLike::Float(_) | IntLike::Other(_) => None,
    })
}

/// Integral numbers that fit a `u32` become `Some`; anything else becomes `None`.
pub fn uint<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(int(deserializer)?.and_then(|v| u32::try_from(v).ok()))
}

/// Strings become `Some`; anything else becomes `None`.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextLike::deserialize(deserializer)? {
        TextLike::Text(s) => Some(s),
        TextLike::Other(_) => None,
    })
}

/// Known lowercase labels become `Some`; anything else becomes `None`.
pub fn level<'de, D>(deserializer: D) -> Result<Option<OccupancyLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LevelLike::deserialize(deserializer)? {
        LevelLike::Level(l) => Some(l),
        LevelLike::Other(_) => None,
    })
}
