//! Lenient integer deserialization
//!
//! The backend (and older clients writing to it) sometimes hands back
//! references as numeric strings (`"2"`) instead of numbers (`2`).
//! Both forms are folded into a plain integer at the model boundary so
//! that lookups downstream compare integers only.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// An integer that may arrive as a JSON number or a numeric string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LenientInt(i64);

impl<'de> Deserialize<'de> for LenientInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LenientVisitor;

        impl<'de> Visitor<'de> for LenientVisitor {
            type Value = LenientInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a numeric string")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(LenientInt(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(LenientInt)
                    .map_err(|_| de::Error::custom(format!("integer out of range: {}", value)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                integral_f64(value)
                    .map(LenientInt)
                    .ok_or_else(|| de::Error::custom(format!("not an integer: {}", value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_lenient(value)
                    .map(LenientInt)
                    .ok_or_else(|| de::Error::custom(format!("not an integer: {:?}", value)))
            }
        }

        deserializer.deserialize_any(LenientVisitor)
    }
}

fn integral_f64(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        Some(value as i64)
    } else {
        None
    }
}

/// Parse a numeric string the way form inputs are coerced: surrounding
/// whitespace is ignored and integral decimals (`"4.0"`) are accepted.
pub fn parse_lenient(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().and_then(integral_f64))
}

/// Deserialize a required integer from a number or numeric string
pub fn lenient_int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let LenientInt(value) = LenientInt::deserialize(deserializer)?;
    T::try_from(value).map_err(|_| de::Error::custom(format!("integer out of range: {}", value)))
}

/// Deserialize an optional integer; `null` and missing both map to `None`
pub fn lenient_int_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    match Option::<LenientInt>::deserialize(deserializer)? {
        Some(LenientInt(value)) => T::try_from(value)
            .map(Some)
            .map_err(|_| de::Error::custom(format!("integer out of range: {}", value))),
        None => Ok(None),
    }
}

/// Deserialize a string that treats null as empty
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Deserialize bool that treats null as false
pub fn bool_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|opt| opt.unwrap_or(false))
}
