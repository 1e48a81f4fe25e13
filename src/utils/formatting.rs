//! Formatting utilities used for CLI and export outputs.

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        "" // zero → no sign
    };

    if short {
        // e.g. +02:25 or -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // e.g. +02h 25m or -01h 10m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Fractional hours rendered like [`mins2readable`], rounded to the minute.
pub fn hours2readable(hours: f64, want_sign: bool, short: bool) -> String {
    mins2readable((hours * 60.0).round() as i64, want_sign, short)
}

/// Two-decimal hours, the format used by exports and reports.
pub fn hours2decimal(hours: f64) -> String {
    format!("{:.2}", hours)
}

pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}
