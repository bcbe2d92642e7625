//! Log Loader: source → typed table, memoized per URL.
//!
//! `load` reports every failure; `fetch` is the render-pass entry point and
//! collapses any failure into an empty table (logged, then cached like a
//! regular result until the entry expires).

pub mod cache;
pub mod parse;
pub mod source;

pub use cache::TtlCache;
pub use parse::parse_csv;
pub use source::{DefaultSource, FileSource, HttpSource, Source};

use crate::errors::AppResult;
use crate::models::{LogRecord, LogTable};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub struct Loader<R: LogRecord, S: Source> {
    source: S,
    cache: TtlCache<LogTable<R>>,
}

impl<R: LogRecord, S: Source> Loader<R, S> {
    pub fn new(source: S, ttl: Duration) -> Self {
        Self {
            source,
            cache: TtlCache::new(ttl),
        }
    }

    /// Read and parse `url` without touching the cache.
    pub fn load(&self, url: &str) -> AppResult<LogTable<R>> {
        let bytes = self.source.read(url)?;
        debug!(kind = R::KIND, url, bytes = bytes.len(), "source read");
        parse_csv(&bytes)
    }

    pub fn fetch(&mut self, url: &str) -> LogTable<R> {
        self.fetch_at(url, Instant::now())
    }

    /// Cached fetch as of `now`. Never fails: errors yield an empty table.
    pub fn fetch_at(&mut self, url: &str, now: Instant) -> LogTable<R> {
        if let Some(table) = self.cache.get(url, now) {
            debug!(kind = R::KIND, url, rows = table.len(), "cache hit");
            return table.clone();
        }

        debug!(kind = R::KIND, url, "cache miss");
        let table = match self.load(url) {
            Ok(t) => t,
            Err(e) => {
                warn!(kind = R::KIND, url, error = %e, "source unavailable, using empty table");
                LogTable::empty()
            }
        };

        self.cache.insert(url, table.clone(), now);
        table
    }

    pub fn cache(&self) -> &TtlCache<LogTable<R>> {
        &self.cache
    }
}
