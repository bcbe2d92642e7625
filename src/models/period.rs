use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDateTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rolling range selectable from the CLI (`--period`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Period {
    Weekly,
    Monthly,
    Yearly,
}

impl Period {
    /// Fixed window width in days (not calendar aware).
    pub fn days(&self) -> i64 {
        match self {
            Period::Weekly => 7,
            Period::Monthly => 30,
            Period::Yearly => 365,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
            Period::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" | "w" => Ok(Period::Weekly),
            "monthly" | "month" | "m" => Ok(Period::Monthly),
            "yearly" | "year" | "y" => Ok(Period::Yearly),
            _ => Err(AppError::InvalidPeriod(s.to_string())),
        }
    }
}

/// A period label resolved against a concrete instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodWindow {
    pub period: Period,
    pub cutoff: NaiveDateTime,
}

impl PeriodWindow {
    /// Cutoff = now - 7 / 30 / 365 days.
    pub fn new(period: Period, now: NaiveDateTime) -> Self {
        Self {
            period,
            cutoff: now - Duration::days(period.days()),
        }
    }

    pub fn contains(&self, ts: &NaiveDateTime) -> bool {
        *ts >= self.cutoff
    }
}
