/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const BLUE: &str = "\x1b[34m";

/// Zero values are greyed out in summary metrics.
pub fn colorize_qty(value: &str, raw: f64) -> String {
    if raw == 0.0 {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Efficiency colour: ≥ 1 output per hour green, below red.
pub fn color_for_efficiency(value: f64) -> &'static str {
    if value >= 1.0 { GREEN } else { RED }
}
