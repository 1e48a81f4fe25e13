use super::{entry::TimeEntry, settings::UserSettings, team::Member};
use serde::Serialize;

/// Per-member row of a team report. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberSummary {
    pub member: Member,
    pub hours_worked: f64,
    pub overtime: f64,
    pub percentage: f64,
    pub user_settings: UserSettings,
    pub entries: Vec<TimeEntry>,
    pub is_published: bool,
}

impl MemberSummary {
    /// Zero row used when a member has nothing published or the fetch failed.
    pub fn zeroed(member: Member) -> Self {
        Self {
            member,
            hours_worked: 0.0,
            overtime: 0.0,
            percentage: 0.0,
            user_settings: UserSettings::default(),
            entries: Vec::new(),
            is_published: false,
        }
    }
}
