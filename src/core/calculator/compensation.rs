use super::duration::{driver_hours, passenger_hours, worked_hours};
use super::weeks::Week;
use crate::models::entry::TimeEntry;
use crate::models::month::MonthRef;
use crate::models::settings::UserSettings;
use chrono::NaiveDate;

/// Compensated hours of the part of `week` that lies inside `month`:
/// worked time plus driver time weighted by the driver percentage.
///
/// `entries_for_day` must return the entries starting on a given day.
pub fn week_compensated_hours<'a, F>(
    week: &Week,
    entries_for_day: F,
    settings: &UserSettings,
    month: MonthRef,
) -> f64
where
    F: Fn(NaiveDate) -> &'a [TimeEntry],
{
    let driver_factor = settings.driver_factor();

    week.days()
        .filter(|day| month.contains(*day))
        .flat_map(|day| entries_for_day(day).iter())
        .map(|e| worked_hours(e) + driver_hours(e) * driver_factor)
        .sum::<f64>()
        .max(0.0)
}

/// Raw passenger hours of the part of `week` inside `month`.
///
/// Unweighted: the caller applies the passenger percentage.
pub fn week_passenger_hours<'a, F>(week: &Week, entries_for_day: F, month: MonthRef) -> f64
where
    F: Fn(NaiveDate) -> &'a [TimeEntry],
{
    week.days()
        .filter(|day| month.contains(*day))
        .flat_map(|day| entries_for_day(day).iter())
        .map(passenger_hours)
        .sum()
}
