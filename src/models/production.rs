use super::record::{LogRecord, check_non_negative, de_quantity, de_timestamp};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One row of the production log (`Timestamp,Job_Code,Worker,Hours,Output`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    #[serde(rename = "Timestamp", deserialize_with = "de_timestamp")]
    pub timestamp: NaiveDateTime,
    #[serde(rename = "Job_Code")]
    pub job_code: String,
    #[serde(rename = "Worker")]
    pub worker: String,
    #[serde(rename = "Hours", deserialize_with = "de_quantity")]
    pub hours: f64,
    #[serde(rename = "Output", deserialize_with = "de_quantity")]
    pub output: f64,
}

impl LogRecord for ProductionRecord {
    const KIND: &'static str = "production";

    const REQUIRED_COLUMNS: &'static [&'static str] =
        &["Timestamp", "Job_Code", "Worker", "Hours", "Output"];

    fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    fn validate(&self) -> Result<(), String> {
        check_non_negative("Hours", self.hours)?;
        check_non_negative("Output", self.output)
    }
}
