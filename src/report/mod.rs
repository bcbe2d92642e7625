//! Presentation of a render pass: terminal dashboard or JSON.

pub mod chart;
pub mod json;
pub mod model;
pub mod terminal;

pub use model::DashboardReport;

use std::io::IsTerminal;

/// Colours only on a terminal, and never when `NO_COLOR` is set.
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}
