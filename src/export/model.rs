// src/export/model.rs

use crate::core::calculator::duration::{driver_hours, passenger_hours, worked_hours};
use crate::core::calculator::summary::MonthTotals;
use crate::models::entry::TimeEntry;
use crate::models::month::MonthRef;
use crate::models::settings::UserSettings;
use crate::models::summary::MemberSummary;
use serde::Serialize;

/// Flat entry row for CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub id: i64,
    pub date: String,
    pub start: String,
    pub end: String,
    pub kind: String,
    pub location: String,
    pub pause_minutes: i64,
    pub worked_hours: f64,
    pub driver_hours: f64,
    pub passenger_hours: f64,
    /// worked + weighted driver + weighted passenger time
    pub compensated_hours: f64,
}

impl EntryExport {
    pub fn from_entry(e: &TimeEntry, settings: &UserSettings) -> Self {
        let worked = worked_hours(e);
        let driver = driver_hours(e);
        let passenger = passenger_hours(e);

        Self {
            id: e.id,
            date: e.date().format("%Y-%m-%d").to_string(),
            start: e.start_time.format("%H:%M").to_string(),
            end: e
                .end_time
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_default(),
            kind: e.kind.to_db_str().to_string(),
            location: e.location.code().to_string(),
            pause_minutes: e.pause_minutes,
            worked_hours: round2(worked),
            driver_hours: round2(driver),
            passenger_hours: round2(passenger),
            compensated_hours: round2(
                worked + driver * settings.driver_factor() + passenger * settings.passenger_factor(),
            ),
        }
    }
}

/// Flat team summary row for CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MemberExport {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub hours_worked: f64,
    pub overtime: f64,
    pub percentage: f64,
    pub published: bool,
}

impl From<&MemberSummary> for MemberExport {
    fn from(s: &MemberSummary) -> Self {
        Self {
            user_id: s.member.user_id.clone(),
            name: s.member.label().to_string(),
            email: s.member.email.clone().unwrap_or_default(),
            hours_worked: round2(s.hours_worked),
            overtime: round2(s.overtime),
            percentage: round2(s.percentage),
            published: s.is_published,
        }
    }
}

/// JSON document of a personal month export.
#[derive(Serialize, Debug)]
pub struct MonthExport<'a> {
    pub user_id: &'a str,
    pub month: MonthRef,
    pub totals: &'a MonthTotals,
    pub entries: Vec<EntryExport>,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
