// src/report/model.rs

use crate::models::{
    DriverShare, DriverStats, JobHours, LogisticsRecord, LogisticsTotals, Period,
    ProductionRecord, ProductionTotals, WorkerStats,
};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Everything one render pass produced. Built fresh every pass, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub period: Period,
    pub cutoff: NaiveDateTime,
    pub generated_at: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production: Option<ProductionReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logistics: Option<LogisticsReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductionReport {
    pub source: String,
    /// Rows in the source before the period filter.
    pub fetched_rows: usize,
    pub totals: ProductionTotals,
    pub by_job: Vec<JobHours>,
    pub by_worker: Vec<WorkerStats>,
    pub records: Vec<ProductionRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogisticsReport {
    pub source: String,
    pub fetched_rows: usize,
    pub totals: LogisticsTotals,
    pub by_driver: Vec<DriverStats>,
    pub distance_share: Vec<DriverShare>,
    /// `Photo` is skipped on serialization.
    pub records: Vec<LogisticsRecord>,
}
