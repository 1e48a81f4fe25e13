use crate::errors::{AppError, AppResult};
use crate::models::month::MonthRef;
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// `--month` argument: `YYYY-MM`, or the current month when omitted.
pub fn resolve_month(month: &Option<String>) -> AppResult<MonthRef> {
    match month {
        Some(m) => MonthRef::parse(m),
        None => Ok(MonthRef::current()),
    }
}
