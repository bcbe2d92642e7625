//! One render pass: Loader → Period Filter → Aggregator → report model.

use crate::config::Config;
use crate::core::{aggregate, filter};
use crate::errors::AppResult;
use crate::loader::{DefaultSource, Loader, Source};
use crate::models::{LogisticsRecord, Period, ProductionRecord};
use crate::report::model::{DashboardReport, LogisticsReport, ProductionReport};
use chrono::NaiveDateTime;
use clap::ValueEnum;
use std::time::{Duration, Instant};
use tracing::info;

/// Which part of the dashboard to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Section {
    #[default]
    All,
    Production,
    Logistics,
}

impl Section {
    pub fn production(&self) -> bool {
        matches!(self, Section::All | Section::Production)
    }

    pub fn logistics(&self) -> bool {
        matches!(self, Section::All | Section::Logistics)
    }
}

/// Both loaders plus their source URLs. The loader caches are the only
/// state kept between render passes.
pub struct Dashboard<S: Source + Clone = DefaultSource> {
    production_url: String,
    logistics_url: String,
    production: Loader<ProductionRecord, S>,
    logistics: Loader<LogisticsRecord, S>,
}

impl Dashboard<DefaultSource> {
    /// Build from configuration; `Some` URLs override the configured ones.
    pub fn from_config(
        cfg: &Config,
        production_url: Option<&str>,
        logistics_url: Option<&str>,
    ) -> AppResult<Self> {
        let source = DefaultSource::new(cfg.http_timeout())?;
        Ok(Self::new(
            source,
            cfg.cache_ttl()?,
            production_url.unwrap_or(&cfg.production_url),
            logistics_url.unwrap_or(&cfg.logistics_url),
        ))
    }
}

impl<S: Source + Clone> Dashboard<S> {
    pub fn new(source: S, ttl: Duration, production_url: &str, logistics_url: &str) -> Self {
        Self {
            production_url: production_url.to_string(),
            logistics_url: logistics_url.to_string(),
            production: Loader::new(source.clone(), ttl),
            logistics: Loader::new(source, ttl),
        }
    }

    pub fn render_pass(
        &mut self,
        period: Period,
        section: Section,
        now: NaiveDateTime,
    ) -> DashboardReport {
        self.render_pass_at(period, section, now, Instant::now())
    }

    /// `now` drives the period window, `instant` drives cache expiry.
    pub fn render_pass_at(
        &mut self,
        period: Period,
        section: Section,
        now: NaiveDateTime,
        instant: Instant,
    ) -> DashboardReport {
        let window = filter::window(period, now);

        let production = section.production().then(|| {
            let table = self.production.fetch_at(&self.production_url, instant);
            let filtered = filter::apply(&table, &window);
            ProductionReport {
                source: self.production_url.clone(),
                fetched_rows: table.len(),
                totals: aggregate::production_totals(&filtered),
                by_job: aggregate::by_job(&filtered),
                by_worker: aggregate::by_worker(&filtered),
                records: filtered.into_records(),
            }
        });

        let logistics = section.logistics().then(|| {
            let table = self.logistics.fetch_at(&self.logistics_url, instant);
            let filtered = filter::apply(&table, &window);
            let by_driver = aggregate::by_driver(&filtered);
            LogisticsReport {
                source: self.logistics_url.clone(),
                fetched_rows: table.len(),
                totals: aggregate::logistics_totals(&filtered),
                distance_share: aggregate::distance_share(&by_driver),
                by_driver,
                records: filtered.into_records(),
            }
        });

        info!(
            period = %period,
            cutoff = %window.cutoff,
            production_rows = production.as_ref().map_or(0, |p| p.records.len()),
            logistics_rows = logistics.as_ref().map_or(0, |l| l.records.len()),
            "render pass"
        );

        DashboardReport {
            period,
            cutoff: window.cutoff,
            generated_at: now,
            production,
            logistics,
        }
    }
}
