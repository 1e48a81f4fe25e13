/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Overtime color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_overtime(hours: f64) -> &'static str {
    // below one minute counts as balanced
    if hours >= 1.0 / 60.0 {
        GREEN
    } else if hours <= -1.0 / 60.0 {
        RED
    } else {
        RESET
    }
}

/// Grey for empty/placeholder values, plain text otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.contains("--:--") || value.trim() == "00h 00m" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_published(published: bool) -> String {
    if published {
        format!("{GREEN}yes{RESET}")
    } else {
        format!("{GREY}no{RESET}")
    }
}
