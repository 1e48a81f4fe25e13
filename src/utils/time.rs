//! Time utilities: parsing HH:MM and durations, combining with dates.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Combine a date with an optional `HH:MM` argument.
pub fn at(date: NaiveDate, time: Option<NaiveTime>) -> Option<NaiveDateTime> {
    time.map(|t| date.and_time(t))
}

/// Current local wall-clock time, truncated to the minute.
pub fn now_minute() -> NaiveDateTime {
    let now = chrono::Local::now().naive_local();
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

/// Parse a duration argument into minutes.
///
/// Accepts plain minutes (`90`), `45m`, `2h`, `1h30m` and decimal hours
/// (`2.5h`).
pub fn parse_duration_minutes(input: &str) -> AppResult<i64> {
    let s = input.trim().to_lowercase();
    let invalid = || AppError::InvalidEntry(format!("invalid duration '{}'", input));

    if s.is_empty() {
        return Err(invalid());
    }

    if let Ok(m) = s.parse::<i64>() {
        return Ok(m);
    }

    let (hours_part, minutes_part) = match s.split_once('h') {
        Some((h, rest)) => (Some(h), rest),
        None => (None, s.as_str()),
    };

    let mut total = 0.0_f64;

    if let Some(h) = hours_part {
        let hours: f64 = h.trim().parse().map_err(|_| invalid())?;
        total += hours * 60.0;
    }

    let minutes_part = minutes_part.trim();
    if !minutes_part.is_empty() {
        let m = minutes_part.strip_suffix('m').ok_or_else(invalid)?;
        let minutes: i64 = m.trim().parse().map_err(|_| invalid())?;
        total += minutes as f64;
    } else if hours_part.is_none() {
        return Err(invalid());
    }

    if !total.is_finite() || total < 0.0 {
        return Err(invalid());
    }

    Ok(total.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_forms() {
        assert_eq!(parse_duration_minutes("90").unwrap(), 90);
        assert_eq!(parse_duration_minutes("45m").unwrap(), 45);
        assert_eq!(parse_duration_minutes("2h").unwrap(), 120);
        assert_eq!(parse_duration_minutes("1h30m").unwrap(), 90);
        assert_eq!(parse_duration_minutes("2.5h").unwrap(), 150);
    }

    #[test]
    fn duration_rejects_garbage() {
        assert!(parse_duration_minutes("").is_err());
        assert!(parse_duration_minutes("abc").is_err());
        assert!(parse_duration_minutes("1h30").is_err());
        assert!(parse_duration_minutes("-2h").is_err());
    }
}
