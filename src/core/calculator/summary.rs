use super::compensation::{week_compensated_hours, week_passenger_hours};
use super::expected::expected_monthly_hours;
use super::weeks::{DayIndex, weeks_of_month};
use crate::models::entry::TimeEntry;
use crate::models::month::MonthRef;
use crate::models::settings::UserSettings;
use chrono::NaiveDate;
use serde::Serialize;

/// One week row of a month summary, clipped to the month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekTotals {
    pub iso_week: u32,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub compensated_hours: f64,
    pub passenger_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthTotals {
    pub month: MonthRef,
    pub weeks: Vec<WeekTotals>,
    pub compensated_hours: f64,
    pub passenger_hours: f64,
    pub compensated_passenger_hours: f64,
    pub total_hours_worked: f64,
    pub expected_hours: f64,
    pub overtime: f64,
    pub percentage: f64,
}

/// Aggregate a user's entries for `month`.
///
/// Entries starting outside the month are ignored.
pub fn summarize_month(entries: &[TimeEntry], settings: &UserSettings, month: MonthRef) -> MonthTotals {
    let index = DayIndex::build(entries);
    let lookup = |day: NaiveDate| index.entries_for_day(day);

    let mut weeks = Vec::new();
    let mut compensated_hours = 0.0;
    let mut passenger_hours = 0.0;

    for week in weeks_of_month(month) {
        let Some((from, to)) = week.clip_to(month) else {
            continue;
        };

        let compensated = week_compensated_hours(&week, lookup, settings, month);
        let passenger = week_passenger_hours(&week, lookup, month);

        compensated_hours += compensated;
        passenger_hours += passenger;

        weeks.push(WeekTotals {
            iso_week: week.iso_week(),
            from,
            to,
            compensated_hours: compensated,
            passenger_hours: passenger,
        });
    }

    let compensated_passenger_hours = passenger_hours * settings.passenger_factor();
    let total_hours_worked = compensated_hours + compensated_passenger_hours;
    let expected_hours = expected_monthly_hours(settings, month);

    MonthTotals {
        month,
        weeks,
        compensated_hours,
        passenger_hours,
        compensated_passenger_hours,
        total_hours_worked,
        expected_hours,
        overtime: total_hours_worked - expected_hours,
        percentage: percentage_of(total_hours_worked, expected_hours),
    }
}

pub fn percentage_of(worked: f64, expected: f64) -> f64 {
    if expected > 0.0 {
        worked / expected * 100.0
    } else {
        0.0
    }
}
