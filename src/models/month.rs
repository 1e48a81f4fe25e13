use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month, identified by the month key `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthRef {
    year: i32,
    month: u32,
}

impl MonthRef {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(AppError::InvalidMonth(format!("{year:04}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::of(crate::utils::date::today())
    }

    /// Parse a month key (`YYYY-MM`).
    pub fn parse(s: &str) -> AppResult<Self> {
        let (y, m) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| AppError::InvalidMonth(s.to_string()))?;

        if y.len() != 4 || m.len() != 2 {
            return Err(AppError::InvalidMonth(s.to_string()));
        }

        let year: i32 = y.parse().map_err(|_| AppError::InvalidMonth(s.to_string()))?;
        let month: u32 = m.parse().map_err(|_| AppError::InvalidMonth(s.to_string()))?;
        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    pub fn first_day(&self) -> NaiveDate {
        // validated in the constructors
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day().pred_opt().unwrap_or(NaiveDate::MAX)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.first_day()
            .iter_days()
            .take_while(move |d| self.contains(*d))
    }

    /// Human readable title, e.g. "September 2025".
    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthRef {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MonthRef {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MonthRef> for String {
    fn from(value: MonthRef) -> Self {
        value.key()
    }
}
