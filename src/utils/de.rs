// src/utils/de.rs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

/// Deserializes an optional integer that clients may send either as a JSON
/// number or as a numeric string (`6` and `"6"` are both accepted).
///
/// Use together with `#[serde(default)]` so that an absent field yields `None`.
pub fn optional_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + FromStr,
    <T as TryFrom<i64>>::Error: fmt::Display,
    <T as FromStr>::Err: fmt::Display,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(v)) => T::try_from(v).map(Some).map_err(de::Error::custom),
        Some(IntOrString::Str(s)) => s.trim().parse::<T>().map(Some).map_err(de::Error::custom),
    }
}
