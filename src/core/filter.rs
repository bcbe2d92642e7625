//! Period filter: keep the records inside a rolling window.

use crate::models::{LogRecord, LogTable, Period, PeriodWindow};
use chrono::NaiveDateTime;

pub fn window(period: Period, now: NaiveDateTime) -> PeriodWindow {
    PeriodWindow::new(period, now)
}

/// Records with `timestamp >= cutoff`, in their original order.
pub fn apply<R: LogRecord>(table: &LogTable<R>, window: &PeriodWindow) -> LogTable<R> {
    table
        .iter()
        .filter(|r| window.contains(&r.timestamp()))
        .cloned()
        .collect()
}
