//! Duration parsing for configuration values such as `cache_ttl: "5m"`.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;

fn duration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(\d+)\s*([smh]?)\s*$").expect("duration regex is valid")
    })
}

/// Accepts `300`, `300s`, `5m`, `1h`.
pub fn parse_duration(s: &str) -> AppResult<Duration> {
    let lower = s.to_lowercase();
    let caps = duration_re()
        .captures(&lower)
        .ok_or_else(|| AppError::InvalidDuration(s.to_string()))?;

    let value: u64 = caps[1]
        .parse()
        .map_err(|_| AppError::InvalidDuration(s.to_string()))?;

    let secs = match &caps[2] {
        "" | "s" => Some(value),
        "m" => value.checked_mul(60),
        "h" => value.checked_mul(3600),
        _ => None,
    };

    secs.map(Duration::from_secs)
        .ok_or_else(|| AppError::InvalidDuration(s.to_string()))
}

pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs >= 3600 && secs % 3600 == 0 {
        format!("{}h", secs / 3600)
    } else if secs >= 60 && secs % 60 == 0 {
        format!("{}m", secs / 60)
    } else {
        format!("{secs}s")
    }
}
