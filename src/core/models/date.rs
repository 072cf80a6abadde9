//! Calendar-date serialization
//!
//! Dates are written as `YYYY-MM-DD`. On read, a full RFC 3339 timestamp is
//! also accepted and truncated to its date part, so files written by older
//! builds (which stored `2024-01-01T00:00:00.000Z`) still load.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp
pub fn parse(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    let trimmed = s.trim();
    let day = trimmed.split_once('T').map_or(trimmed, |(day, _)| day);
    NaiveDate::parse_from_str(day, FORMAT)
}

/// Write a date as `YYYY-MM-DD`
pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(FORMAT))
}

/// Read a date from `YYYY-MM-DD` or an RFC 3339 timestamp
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    // Time and offset of a legacy timestamp are dropped; it saves back as YYYY-MM-DD
    parse(&raw).map_err(serde::de::Error::custom)
}
