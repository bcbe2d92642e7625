use crate::cli::parser::ViewArgs;
use crate::config::Config;
use crate::core::Dashboard;
use crate::errors::AppResult;
use crate::models::Period;
use crate::report::{DashboardReport, json, terminal, use_color};
use crate::utils::date;

/// Handle the `report` command: one render pass.
pub fn handle(view: &ViewArgs, cfg: &Config) -> AppResult<()> {
    let period = resolve_period(view, cfg)?;
    let mut dashboard = Dashboard::from_config(
        cfg,
        view.production_url.as_deref(),
        view.logistics_url.as_deref(),
    )?;

    let report = dashboard.render_pass(period, view.section, date::now());
    print_report(&report, view, cfg)
}

/// `--period` wins over the configured default.
pub(crate) fn resolve_period(view: &ViewArgs, cfg: &Config) -> AppResult<Period> {
    match view.period {
        Some(p) => Ok(p),
        None => cfg.default_period(),
    }
}

pub(crate) fn print_report(
    report: &DashboardReport,
    view: &ViewArgs,
    cfg: &Config,
) -> AppResult<()> {
    if view.json {
        println!("{}", json::to_json(report)?);
    } else {
        let limit = view.limit.unwrap_or(cfg.detail_rows);
        print!("{}", terminal::render(report, limit, use_color()));
    }
    Ok(())
}
