use crate::models::entry::TimeEntry;
use crate::models::month::MonthRef;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

/// A Monday–Sunday span.
///
/// Weeks produced by [`weeks_of_month`] may start in the previous month or
/// end in the next one; callers skip the days outside the month they are
/// aggregating so an entry is never counted for two months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Week {
    /// The week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let offset = date.weekday().num_days_from_monday() as i64;
        let start = date - Duration::days(offset);
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }

    pub fn iso_week(&self) -> u32 {
        self.start.iso_week().week()
    }

    /// The part of the week inside `month`, if any.
    pub fn clip_to(&self, month: MonthRef) -> Option<(NaiveDate, NaiveDate)> {
        let from = self.start.max(month.first_day());
        let to = self.end.min(month.last_day());
        (from <= to).then_some((from, to))
    }
}

/// All weeks overlapping `month`, in order.
pub fn weeks_of_month(month: MonthRef) -> Vec<Week> {
    let mut weeks = Vec::new();
    let mut week = Week::containing(month.first_day());
    let last = month.last_day();

    while week.start <= last {
        weeks.push(week);
        week = Week::containing(week.end + Duration::days(1));
    }

    weeks
}

/// Entries bucketed by the calendar day they start on, each bucket sorted by
/// start time.
#[derive(Debug, Default, Clone)]
pub struct DayIndex {
    days: BTreeMap<NaiveDate, Vec<TimeEntry>>,
}

impl DayIndex {
    pub fn build(entries: &[TimeEntry]) -> Self {
        let mut days: BTreeMap<NaiveDate, Vec<TimeEntry>> = BTreeMap::new();
        for e in entries {
            days.entry(e.date()).or_default().push(e.clone());
        }
        for bucket in days.values_mut() {
            bucket.sort_by_key(|e| (e.start_time, e.id));
        }
        Self { days }
    }

    pub fn entries_for_day(&self, day: NaiveDate) -> &[TimeEntry] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }
}
