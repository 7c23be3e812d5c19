/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Hours color: grey for nothing logged, green otherwise.
pub fn color_for_hours(value: i64) -> &'static str {
    if value > 0 { GREEN } else { GREY }
}

pub fn colorize_hours(value: i64, text: &str) -> String {
    format!("{}{}{}", color_for_hours(value), text, RESET)
}
