//! Serde adapters for the service's loosely typed wire format.
//!
//! Integers and flags arrive as decimal strings (`"1"`), sometimes as bare
//! numbers, and occasionally as an empty string meaning zero. Encoders always
//! write the string form back out.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

struct IntVisitor;

impl Visitor<'_> for IntVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a decimal string")
    }

    fn visit_unit<E: de::Error>(self) -> Result<i64, E> {
        Ok(0)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<i64, E> {
        Ok(i64::from(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
        Ok(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
        i64::try_from(value).map_err(|_| E::custom(format!("integer out of range: {value}")))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<i64, E> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }
        trimmed
            .parse::<i64>()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

pub(crate) fn deserialize_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    deserializer.deserialize_any(IntVisitor)
}

pub mod string_i64 {
    use super::*;

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        deserialize_int(deserializer)
    }
}

pub mod string_u64 {
    use super::*;

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let value = deserialize_int(deserializer)?;
        u64::try_from(value).map_err(|_| de::Error::custom(format!("negative identifier: {value}")))
    }
}

pub mod string_bool {
    use super::*;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "1" } else { "0" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(deserialize_int(deserializer)? != 0)
    }
}

/// `"0"` is the service's way of saying "never".
pub mod unix_seconds {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let seconds = value.map(|ts| ts.timestamp()).unwrap_or(0);
        serializer.collect_str(&seconds)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let seconds = deserialize_int(deserializer)?;
        if seconds == 0 {
            return Ok(None);
        }
        DateTime::<Utc>::from_timestamp(seconds, 0)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {seconds}")))
    }
}

pub(crate) mod comma_joined {
    use serde::Serializer;

    #[allow(clippy::ptr_arg)]
    pub fn serialize<S: Serializer>(
        values: &Vec<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&values.join(","))
    }
}
