#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use rlogdash::errors::{AppError, AppResult};
use rlogdash::loader::Source;
use rlogdash::models::{LogTable, LogisticsRecord, ProductionRecord};
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub const PRODUCTION_HEADER: &str = "Timestamp,Job_Code,Worker,Hours,Output";
pub const LOGISTICS_HEADER: &str = "Timestamp,Driver,Distance,Fuel_Ltrs,Photo";

pub fn rld() -> Command {
    cargo_bin_cmd!("rlogdash")
}

pub fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|d| d.and_hms_opt(h, min, 0))
        .expect("valid test date")
}

/// Timestamp `days` days before the real current time, as written in the CSV logs.
pub fn days_ago(days: i64) -> String {
    (Local::now().naive_local() - Duration::days(days))
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

pub fn prod(
    ts: NaiveDateTime,
    job: &str,
    worker: &str,
    hours: f64,
    output: f64,
) -> ProductionRecord {
    ProductionRecord {
        timestamp: ts,
        job_code: job.to_string(),
        worker: worker.to_string(),
        hours,
        output,
    }
}

pub fn logi(ts: NaiveDateTime, driver: &str, distance: f64, fuel: f64) -> LogisticsRecord {
    LogisticsRecord {
        timestamp: ts,
        driver: driver.to_string(),
        distance,
        fuel_ltrs: fuel,
        photo: None,
    }
}

pub fn prod_table(rows: Vec<ProductionRecord>) -> LogTable<ProductionRecord> {
    LogTable::new(rows)
}

/// Write `content` to `dir/name` and return the path as a source string.
pub fn write_source(dir: &Path, name: &str, content: &str) -> String {
    let path: PathBuf = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path.to_string_lossy().to_string()
}

/// In-memory source that counts reads; clones share the body and the counter.
#[derive(Clone, Default)]
pub struct CountingSource {
    pub body: Rc<RefCell<String>>,
    pub reads: Rc<Cell<usize>>,
    pub fail: Rc<Cell<bool>>,
}

impl CountingSource {
    pub fn with_body(body: &str) -> Self {
        let s = Self::default();
        s.set_body(body);
        s
    }

    pub fn set_body(&self, body: &str) {
        *self.body.borrow_mut() = body.to_string();
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl Source for CountingSource {
    fn read(&self, _url: &str) -> AppResult<Vec<u8>> {
        self.reads.set(self.reads.get() + 1);
        if self.fail.get() {
            return Err(AppError::Io(std::io::Error::other("source down")));
        }
        Ok(self.body.borrow().as_bytes().to_vec())
    }
}
