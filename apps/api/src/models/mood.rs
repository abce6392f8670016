use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// A mood entry exactly as the logging client stores it.
/// Unknown fields (e.g. `mode`) are ignored. `timestamp` and `mood_value` stay untyped
/// here so wrong types and missing fields surface from `into_sample` with the record index.
#[derive(Debug, Clone, Deserialize)]
pub struct MoodRecord {
    #[serde(default)]
    pub timestamp: Value,
    #[serde(default, alias = "moodValue")]
    pub mood_value: Value,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A validated mood observation. Timestamps keep the offset they were written with so
/// hour-of-day and weekday reflect the user's wall clock.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodSample {
    pub timestamp: DateTime<FixedOffset>,
    pub mood_value: f64,
    pub notes: String,
}

/// Raised at the parsing boundary, before any analysis runs.
#[derive(Debug, Error, PartialEq)]
pub enum InvalidInputError {
    #[error("record {index}: invalid timestamp '{value}'")]
    Timestamp { index: usize, value: String },

    #[error("record {index}: mood_value must be numeric, got {value}")]
    MoodValue { index: usize, value: String },
}

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

impl MoodSample {
    pub fn new(timestamp: DateTime<FixedOffset>, mood_value: f64, notes: impl Into<String>) -> Self {
        Self {
            timestamp,
            mood_value,
            notes: notes.into(),
        }
    }
}

impl MoodRecord {
    /// Validates the record; `index` is its position in the loaded sequence.
    pub fn into_sample(self, index: usize) -> Result<MoodSample, InvalidInputError> {
        let timestamp = self
            .timestamp
            .as_str()
            .and_then(parse_timestamp)
            .ok_or_else(|| InvalidInputError::Timestamp {
                index,
                value: match &self.timestamp {
                    Value::String(raw) => raw.clone(),
                    other => other.to_string(),
                },
            })?;

        let mood_value = self
            .mood_value
            .as_f64()
            .ok_or_else(|| InvalidInputError::MoodValue {
                index,
                value: self.mood_value.to_string(),
            })?;

        Ok(MoodSample {
            timestamp,
            mood_value,
            notes: self.notes.unwrap_or_default(),
        })
    }
}

/// Validates a whole sequence, stopping at the first bad record.
pub fn parse_records(records: Vec<MoodRecord>) -> Result<Vec<MoodSample>, InvalidInputError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_sample(index))
        .collect()
}

/// Accepts RFC 3339, naive ISO-8601 date-times (read as UTC) and bare dates.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    Some(naive.and_utc().fixed_offset())
}
