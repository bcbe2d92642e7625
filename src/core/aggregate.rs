//! Grouped sums and ratios over a filtered table.
//!
//! Groups are keyed by exact string match and come out sorted by key.
//! A key without rows never appears.

use crate::models::{
    DriverShare, DriverStats, JobHours, LogTable, LogisticsRecord, LogisticsTotals, ProductionRecord,
    ProductionTotals, WorkerStats,
};
use std::collections::BTreeMap;

/// Σ hours per job code.
pub fn by_job(table: &LogTable<ProductionRecord>) -> Vec<JobHours> {
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for r in table {
        *groups.entry(r.job_code.as_str()).or_default() += r.hours;
    }

    groups
        .into_iter()
        .map(|(job, hours)| JobHours {
            job_code: job.to_string(),
            hours,
        })
        .collect()
}

/// Σ output and Σ hours per worker, with efficiency = output / hours.
///
/// Workers whose summed hours are zero have no efficiency and are left out.
pub fn by_worker(table: &LogTable<ProductionRecord>) -> Vec<WorkerStats> {
    let mut groups: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for r in table {
        let acc = groups.entry(r.worker.as_str()).or_default();
        acc.0 += r.output;
        acc.1 += r.hours;
    }

    groups
        .into_iter()
        .filter(|(_, (_, hours))| *hours > 0.0)
        .map(|(worker, (output, hours))| WorkerStats {
            worker: worker.to_string(),
            output,
            hours,
            efficiency: output / hours,
        })
        .collect()
}

/// Σ distance and Σ fuel per driver.
pub fn by_driver(table: &LogTable<LogisticsRecord>) -> Vec<DriverStats> {
    let mut groups: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for r in table {
        let acc = groups.entry(r.driver.as_str()).or_default();
        acc.0 += r.distance;
        acc.1 += r.fuel_ltrs;
    }

    groups
        .into_iter()
        .map(|(driver, (distance, fuel_ltrs))| DriverStats {
            driver: driver.to_string(),
            distance,
            fuel_ltrs,
        })
        .collect()
}

/// Each driver's percentage of the total distance; empty when nobody drove.
pub fn distance_share(drivers: &[DriverStats]) -> Vec<DriverShare> {
    let total: f64 = drivers.iter().map(|d| d.distance).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    drivers
        .iter()
        .map(|d| DriverShare {
            driver: d.driver.clone(),
            percent: d.distance / total * 100.0,
        })
        .collect()
}

pub fn production_totals(table: &LogTable<ProductionRecord>) -> ProductionTotals {
    table.iter().fold(ProductionTotals::default(), |acc, r| ProductionTotals {
        hours: acc.hours + r.hours,
        output: acc.output + r.output,
    })
}

pub fn logistics_totals(table: &LogTable<LogisticsRecord>) -> LogisticsTotals {
    table.iter().fold(LogisticsTotals::default(), |acc, r| LogisticsTotals {
        distance: acc.distance + r.distance,
        fuel_ltrs: acc.fuel_ltrs + r.fuel_ltrs,
    })
}
