use super::report::{print_report, resolve_period};
use crate::cli::parser::ViewArgs;
use crate::config::Config;
use crate::core::Dashboard;
use crate::errors::AppResult;
use crate::report::use_color;
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::time::format_duration;
use std::thread;
use std::time::Duration;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Handle the `watch` command.
///
/// Every pass reuses the same dashboard, so sources are only re-read once
/// their cache entry has expired.
pub fn handle(view: &ViewArgs, interval: u64, iterations: usize, cfg: &Config) -> AppResult<()> {
    let period = resolve_period(view, cfg)?;
    let mut dashboard = Dashboard::from_config(
        cfg,
        view.production_url.as_deref(),
        view.logistics_url.as_deref(),
    )?;
    let pause = Duration::from_secs(interval);

    if !view.json {
        info(format!(
            "Refreshing every {}, sources cached for {}",
            format_duration(pause),
            format_duration(cfg.cache_ttl()?)
        ));
    }

    let mut pass = 0usize;
    loop {
        pass += 1;

        if use_color() && !view.json {
            print!("{CLEAR_SCREEN}");
        }

        let report = dashboard.render_pass(period, view.section, date::now());
        print_report(&report, view, cfg)?;

        if iterations != 0 && pass >= iterations {
            break;
        }

        if !view.json {
            info(format!("Next refresh in {interval}s (Ctrl+C to stop)"));
        }
        thread::sleep(pause);
    }

    Ok(())
}
