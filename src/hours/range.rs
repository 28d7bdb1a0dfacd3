use anyhow::{anyhow, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

pub const HHMM_FORMAT: &str = "%H:%M";

/// Parse a 24-hour `HH:MM` time-of-day string.
///
/// This is the module's only fallible entry point: values coming from
/// constrained time pickers are parsed once here, after which the
/// arithmetic functions are total.
pub fn parse_hhmm(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, HHMM_FORMAT)
        .map_err(|err| anyhow!("invalid HH:MM time '{value}': {err}"))
}

pub fn format_hhmm(value: NaiveTime) -> String {
    value.format(HHMM_FORMAT).to_string()
}

/// A start/end pair of times-of-day within one day, `HH:MM` on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start: parse_hhmm(start)?,
            end: parse_hhmm(end)?,
        })
    }

    /// Signed length in minutes; negative when `end` precedes `start`.
    pub fn minutes(&self) -> i64 {
        super::calc::minutes_between(self.start, self.end)
    }

    /// True when `end` precedes `start`. Whether that is bad input or a
    /// shift crossing midnight is the caller's call; no normalization
    /// happens here.
    pub fn is_overnight(&self) -> bool {
        self.end < self.start
    }
}

/// Serde adapter for `NaiveTime` fields carried as `HH:MM`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::HHMM_FORMAT;

    pub fn serialize<S>(value: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(HHMM_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, HHMM_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional `HH:MM` fields (open clock-in entries).
pub mod hhmm_opt {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::HHMM_FORMAT;

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_some(&time.format(HHMM_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|value| {
            NaiveTime::parse_from_str(&value, HHMM_FORMAT).map_err(serde::de::Error::custom)
        })
        .transpose()
    }
}
