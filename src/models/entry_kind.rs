use serde::{Deserialize, Serialize};

/// Kind of a time entry.
///
/// `Work` is regular worked time. Every other kind is a *special* entry:
/// an absence that is credited with the user's daily contracted hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    #[default]
    Work,
    SickLeave,
    Pto,
    BankHoliday,
    TimeOffInLieu,
}

impl EntryKind {
    pub fn is_special(&self) -> bool {
        !matches!(self, EntryKind::Work)
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntryKind::Work => "work",
            EntryKind::SickLeave => "sick_leave",
            EntryKind::Pto => "pto",
            EntryKind::BankHoliday => "bank_holiday",
            EntryKind::TimeOffInLieu => "time_off_in_lieu",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "work" => Some(EntryKind::Work),
            "sick_leave" => Some(EntryKind::SickLeave),
            "pto" => Some(EntryKind::Pto),
            "bank_holiday" => Some(EntryKind::BankHoliday),
            "time_off_in_lieu" => Some(EntryKind::TimeOffInLieu),
            _ => None,
        }
    }

    /// Parse user input: accepts the DB names plus a few short aliases.
    pub fn from_input(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "sick" => Some(EntryKind::SickLeave),
            "holiday" | "bank" => Some(EntryKind::BankHoliday),
            "toil" => Some(EntryKind::TimeOffInLieu),
            "vacation" => Some(EntryKind::Pto),
            other => EntryKind::from_db_str(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Work => "Work",
            EntryKind::SickLeave => "Sick leave",
            EntryKind::Pto => "PTO",
            EntryKind::BankHoliday => "Bank holiday",
            EntryKind::TimeOffInLieu => "Time off in lieu",
        }
    }
}
