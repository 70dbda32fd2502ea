//! ANSI color helper utilities for terminal output.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Earnings color:
/// \>0 → green
/// 0 → grey
pub fn color_for_amount(value: f64) -> &'static str {
    if value > 0.0 { GREEN } else { GREY }
}
