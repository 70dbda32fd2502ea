//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Currency display: two decimals, symbol prefix.
pub fn money(currency: &str, amount: f64) -> String {
    format!("{}{:.2}", currency, amount)
}

/// Hour totals are shown with one decimal in summaries.
pub fn hours(h: f64) -> String {
    format!("{:.1}", h)
}

/// Pad to `width` terminal columns, not chars (notes may contain wide glyphs).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}
