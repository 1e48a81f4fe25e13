use super::{entry_kind::EntryKind, location::Location, month::MonthRef};
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Text format used for timestamps, both in the DB and in exports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A single time entry owned by one user.
///
/// An entry without `end_time` is either running (clocked in, not yet
/// stopped) or carries an explicit `duration_minutes` (manual duration or
/// special absence entry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: i64,
    pub user_id: String,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub kind: EntryKind,
    pub start_time: NaiveDateTime,
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub pause_minutes: i64,
    #[serde(default)]
    pub duration_minutes: Option<i64>,
    #[serde(default)]
    pub driver_time_hours: Option<f64>,
    #[serde(default)]
    pub passenger_time_hours: Option<f64>,
    #[serde(default)]
    pub created_at: String,
}

impl TimeEntry {
    /// New work entry starting at `start_time`; `id = 0` until persisted.
    pub fn new(user_id: &str, start_time: NaiveDateTime, location: Location) -> Self {
        Self {
            id: 0,
            user_id: user_id.to_string(),
            location,
            kind: EntryKind::Work,
            start_time,
            end_time: None,
            pause_minutes: 0,
            duration_minutes: None,
            driver_time_hours: None,
            passenger_time_hours: None,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn with_end(mut self, end_time: NaiveDateTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn with_pause(mut self, minutes: i64) -> Self {
        self.pause_minutes = minutes;
        self
    }

    pub fn with_duration(mut self, minutes: i64) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    pub fn with_driver_hours(mut self, hours: f64) -> Self {
        self.driver_time_hours = Some(hours);
        self
    }

    pub fn with_passenger_hours(mut self, hours: f64) -> Self {
        self.passenger_time_hours = Some(hours);
        self
    }

    pub fn with_kind(mut self, kind: EntryKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.start_time.date()
    }

    pub fn month(&self) -> MonthRef {
        MonthRef::of(self.date())
    }

    /// Clocked in, not yet stopped.
    pub fn is_running(&self) -> bool {
        self.end_time.is_none() && self.duration_minutes.is_none()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn end_str(&self) -> Option<String> {
        self.end_time
            .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
    }

    /// `HH:MM–HH:MM` span as shown in listings. Duration-only entries show
    /// `HH:MM +HH:MM`; running ones end in `--:--`.
    pub fn span_label(&self) -> String {
        let start = self.start_time.format("%H:%M");
        match (self.end_time, self.duration_minutes) {
            (Some(end), _) => format!("{}–{}", start, end.format("%H:%M")),
            (None, Some(m)) => format!("{} +{:02}:{:02}", start, m.max(0) / 60, m.max(0) % 60),
            (None, None) => format!("{}–--:--", start),
        }
    }
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
}
