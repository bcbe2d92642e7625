use crate::utils::date::parse_timestamp;
use chrono::NaiveDateTime;
use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};

/// A typed row of one log source.
///
/// `REQUIRED_COLUMNS` is checked against the CSV header before any row is
/// deserialized, so a document missing a column is rejected as a whole.
pub trait LogRecord: DeserializeOwned + Clone {
    /// Short label used in logs and messages.
    const KIND: &'static str;

    const REQUIRED_COLUMNS: &'static [&'static str];

    fn timestamp(&self) -> NaiveDateTime;

    /// Quantities must be non-negative; returns the offending column otherwise.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// serde adapter for the `Timestamp` column.
pub(crate) fn de_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp '{raw}'")))
}

/// Empty numeric cells count as 0.0, like a NaN skipped by a sum.
pub(crate) fn de_quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| D::Error::custom(format!("invalid number '{raw}'")))
}

pub(crate) fn check_non_negative(column: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(format!("{column} must be a non-negative number, got {value}"))
    }
}
