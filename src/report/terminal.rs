//! Text rendering of a [`DashboardReport`].

use super::chart::{Bar, render_bars};
use super::model::{DashboardReport, LogisticsReport, ProductionReport};
use crate::utils::colors::{BLUE, RESET, color_for_efficiency, colorize_qty};
use crate::utils::date::format_timestamp;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use crate::utils::{fmt_qty, fmt_ratio};
use ansi_term::Colour;

pub const EMPTY_PRODUCTION_MSG: &str = "No production records for the selected period.";

/// Render the whole dashboard.
///
/// `limit` caps each detail table to its last `limit` rows (0 = all).
pub fn render(report: &DashboardReport, limit: usize, color: bool) -> String {
    let mut out = String::new();

    let title = format!(
        "📊 Performance Analytics | {} (since {})",
        report.period,
        format_timestamp(&report.cutoff)
    );
    out.push_str(&if color { bold(&title) } else { title });
    out.push_str("\n\n");

    if let Some(p) = &report.production {
        out.push_str(&render_production(p, limit, color));
    }

    if let Some(l) = &report.logistics {
        if report.production.is_some() {
            out.push('\n');
        }
        out.push_str(&render_logistics(l, limit, color));
    }

    out
}

fn section_header(title: &str, color: bool) -> String {
    if color {
        format!("{BLUE}====================== {title}{RESET}\n")
    } else {
        format!("====================== {title}\n")
    }
}

fn metric(label: &str, value: f64, color: bool) -> String {
    let v = fmt_qty(value);
    let v = if color { colorize_qty(&v, value) } else { v };
    format!("{label}: {v}")
}

pub fn render_production(p: &ProductionReport, limit: usize, color: bool) -> String {
    let mut out = section_header("⚙️  Production Efficiency", color);

    out.push_str(&format!(
        "{} | {} | Records: {}\n\n",
        metric("Total man-hours", p.totals.hours, color),
        metric("Total output", p.totals.output, color),
        p.records.len()
    ));

    if p.records.is_empty() {
        out.push_str(&format!("ℹ️  {EMPTY_PRODUCTION_MSG}\n"));
        return out;
    }

    let jobs: Vec<Bar> = p
        .by_job
        .iter()
        .map(|j| Bar {
            label: j.job_code.clone(),
            value: j.hours,
            caption: fmt_qty(j.hours),
        })
        .collect();
    out.push_str(&render_bars(
        "🏗️  Jobwise Total Man-Hours",
        &jobs,
        Colour::Green,
        color,
    ));
    out.push('\n');

    let workers: Vec<Bar> = p
        .by_worker
        .iter()
        .map(|w| {
            let eff = fmt_ratio(w.efficiency);
            let caption = if color {
                format!("{}{eff}{RESET}", color_for_efficiency(w.efficiency))
            } else {
                eff
            };
            Bar {
                label: w.worker.clone(),
                value: w.efficiency,
                caption,
            }
        })
        .collect();
    out.push_str(&render_bars(
        "👷 Worker Productivity (Output/Hr)",
        &workers,
        Colour::Blue,
        color,
    ));
    out.push('\n');

    let mut table = Table::new(vec![
        Column::left("Timestamp"),
        Column::left("Job_Code"),
        Column::left("Worker"),
        Column::right("Hours"),
        Column::right("Output"),
    ]);
    for r in tail(&p.records, limit) {
        table.add_row(vec![
            format_timestamp(&r.timestamp),
            r.job_code.clone(),
            r.worker.clone(),
            fmt_qty(r.hours),
            fmt_qty(r.output),
        ]);
    }
    out.push_str(&detail_caption(p.records.len(), limit));
    out.push_str(&table.render());

    out
}

pub fn render_logistics(l: &LogisticsReport, limit: usize, color: bool) -> String {
    let mut out = section_header("🚛 Logistics Audit", color);

    out.push_str(&format!(
        "{} | {} | Records: {}\n\n",
        metric("Total distance (km)", l.totals.distance, color),
        metric("Total fuel (L)", l.totals.fuel_ltrs, color),
        l.records.len()
    ));

    if l.records.is_empty() {
        return out;
    }

    let kms: Vec<Bar> = l
        .by_driver
        .iter()
        .map(|d| {
            let share = l
                .distance_share
                .iter()
                .find(|s| s.driver == d.driver)
                .map(|s| format!(" ({:.1}%)", s.percent))
                .unwrap_or_default();
            Bar {
                label: d.driver.clone(),
                value: d.distance,
                caption: format!("{} km{share}", fmt_qty(d.distance)),
            }
        })
        .collect();
    out.push_str(&render_bars(
        "🛣️  KMs Driven by Driver",
        &kms,
        Colour::Cyan,
        color,
    ));
    out.push('\n');

    let fuel: Vec<Bar> = l
        .by_driver
        .iter()
        .map(|d| Bar {
            label: d.driver.clone(),
            value: d.fuel_ltrs,
            caption: format!("{} L", fmt_qty(d.fuel_ltrs)),
        })
        .collect();
    out.push_str(&render_bars(
        "⛽ Fuel Consumed (Litres)",
        &fuel,
        Colour::Yellow,
        color,
    ));
    out.push('\n');

    // Photo is never displayed
    let mut table = Table::new(vec![
        Column::left("Timestamp"),
        Column::left("Driver"),
        Column::right("Distance"),
        Column::right("Fuel_Ltrs"),
    ]);
    for r in tail(&l.records, limit) {
        table.add_row(vec![
            format_timestamp(&r.timestamp),
            r.driver.clone(),
            fmt_qty(r.distance),
            fmt_qty(r.fuel_ltrs),
        ]);
    }
    out.push_str(&detail_caption(l.records.len(), limit));
    out.push_str(&table.render());

    out
}

fn tail<T>(rows: &[T], limit: usize) -> &[T] {
    if limit == 0 || rows.len() <= limit {
        rows
    } else {
        &rows[rows.len() - limit..]
    }
}

fn detail_caption(total: usize, limit: usize) -> String {
    if limit == 0 || total <= limit {
        format!("📋 Records ({total})\n")
    } else {
        format!("📋 Records (last {limit} of {total})\n")
    }
}
