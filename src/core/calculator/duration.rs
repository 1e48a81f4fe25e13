use crate::models::entry::TimeEntry;

/// Worked minutes of a single entry.
///
/// - with `end_time`: `end - start - pause`, clamped at zero
/// - without `end_time`: `duration_minutes` when present
/// - running entries (neither) count as zero
pub fn worked_minutes(entry: &TimeEntry) -> i64 {
    match (entry.end_time, entry.duration_minutes) {
        (Some(end), _) => {
            let elapsed = (end - entry.start_time).num_minutes() - entry.pause_minutes;
            elapsed.max(0)
        }
        (None, Some(minutes)) => minutes.max(0),
        (None, None) => 0,
    }
}

pub fn worked_hours(entry: &TimeEntry) -> f64 {
    worked_minutes(entry) as f64 / 60.0
}

pub fn driver_hours(entry: &TimeEntry) -> f64 {
    entry.driver_time_hours.unwrap_or(0.0).max(0.0)
}

pub fn passenger_hours(entry: &TimeEntry) -> f64 {
    entry.passenger_time_hours.unwrap_or(0.0).max(0.0)
}
