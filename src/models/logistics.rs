use super::record::{LogRecord, check_non_negative, de_quantity, de_timestamp};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One row of the logistics log (`Timestamp,Driver,Distance,Fuel_Ltrs[,Photo]`).
///
/// `Photo` is kept opaque and is never rendered or serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticsRecord {
    #[serde(rename = "Timestamp", deserialize_with = "de_timestamp")]
    pub timestamp: NaiveDateTime,
    #[serde(rename = "Driver")]
    pub driver: String,
    #[serde(rename = "Distance", deserialize_with = "de_quantity")]
    pub distance: f64,
    #[serde(rename = "Fuel_Ltrs", deserialize_with = "de_quantity")]
    pub fuel_ltrs: f64,
    #[serde(rename = "Photo", default, skip_serializing)]
    pub photo: Option<String>,
}

impl LogRecord for LogisticsRecord {
    const KIND: &'static str = "logistics";

    const REQUIRED_COLUMNS: &'static [&'static str] =
        &["Timestamp", "Driver", "Distance", "Fuel_Ltrs"];

    fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    fn validate(&self) -> Result<(), String> {
        check_non_negative("Distance", self.distance)?;
        check_non_negative("Fuel_Ltrs", self.fuel_ltrs)
    }
}
