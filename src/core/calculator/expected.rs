use crate::models::month::MonthRef;
use crate::models::settings::UserSettings;
use chrono::{Datelike, NaiveDate, Weekday};

/// Contracted working days: Monday to Friday.
///
/// Bank holidays are not removed here. A bank holiday is recorded as a
/// special entry worth `default_work_hours`, which balances the weekday.
pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn working_days_in_month(month: MonthRef) -> u32 {
    month.days().filter(|d| is_working_day(*d)).count() as u32
}

/// Expected = default_work_hours × working days of the month.
pub fn expected_monthly_hours(settings: &UserSettings, month: MonthRef) -> f64 {
    settings.default_work_hours.max(0.0) * working_days_in_month(month) as f64
}
