//! Time formatter for Swift APIs.
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValueError;

/// wrap of `chrono::Utc`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct UtcTime(DateTime<Utc>);

impl UtcTime {
    #[inline]
    pub fn new(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }

    /// Returns current utc time
    #[inline]
    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    #[inline]
    pub(crate) fn is_past(&self) -> bool {
        self.0 < Utc::now()
    }

    #[inline]
    pub fn datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// format date to ISO8601, like`2023-09-10T08:26:43.296Z`
    #[inline]
    pub fn format_time(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }

    /// Parse a Swift `x-timestamp` value, unix seconds with an optional
    /// fractional part, like `1390852369.60018`.
    pub fn from_swift_timestamp(value: &str) -> Result<Self, ValueError> {
        let (secs, frac) = match value.split_once('.') {
            Some((secs, frac)) => (secs, frac),
            None => (value, ""),
        };
        let secs: i64 = secs
            .parse()
            .map_err(|_| ValueError::new(format!("Invalid timestamp: {}", value)))?;
        let nanos = if frac.is_empty() {
            0
        } else {
            let digits: String = frac.chars().chain("000000000".chars()).take(9).collect();
            digits
                .parse::<u32>()
                .map_err(|_| ValueError::new(format!("Invalid timestamp: {}", value)))?
        };
        Utc.timestamp_opt(secs, nanos)
            .single()
            .map(Self::new)
            .ok_or_else(|| ValueError::new(format!("Invalid timestamp: {}", value)))
    }

    /// Parse the `last_modified` field of a json listing, like
    /// `2016-05-05T16:31:20.581620`. Swift omits the zone, it is always utc.
    pub fn from_listing_time(value: &str) -> Result<Self, ValueError> {
        let value = value.trim_end_matches('Z');
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|t| Self::new(Utc.from_utc_datetime(&t)))
            .map_err(|_| ValueError::new(format!("Invalid last_modified: {}", value)))
    }
}

impl From<DateTime<Utc>> for UtcTime {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::new(datetime)
    }
}

impl Default for UtcTime {
    /// default: current utc time.
    fn default() -> Self {
        Self::now()
    }
}

pub fn deserialize_listing_time<'de, D>(deserializer: D) -> Result<Option<UtcTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value {
        Some(v) => UtcTime::from_listing_time(&v)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
