//! Horizontal bar charts for the terminal.

use crate::utils::formatting::pad_right;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

const BAR_WIDTH: usize = 40;
const BAR_CHAR: char = '█';

pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Text printed after the bar (already formatted).
    pub caption: String,
}

/// One line per bar, lengths proportional to the largest value.
pub fn render_bars(title: &str, bars: &[Bar], colour: Colour, color: bool) -> String {
    let mut out = format!("{title}\n");

    if bars.is_empty() {
        out.push_str("  (no data)\n");
        return out;
    }

    let label_w = bars
        .iter()
        .map(|b| UnicodeWidthStr::width(b.label.as_str()))
        .max()
        .unwrap_or(0);
    let max = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);

    for bar in bars {
        let len = bar_len(bar.value, max);
        let body: String = std::iter::repeat_n(BAR_CHAR, len).collect();
        let body = if color {
            colour.paint(body).to_string()
        } else {
            body
        };
        let pad = " ".repeat(BAR_WIDTH - len);
        out.push_str(&format!(
            "  {} {}{} {}\n",
            pad_right(&bar.label, label_w),
            body,
            pad,
            bar.caption
        ));
    }

    out
}

fn bar_len(value: f64, max: f64) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    // any positive value gets at least one cell
    (((value / max) * BAR_WIDTH as f64).round() as usize).clamp(1, BAR_WIDTH)
}
