use crate::core::add::validate_entry;
use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::models::location::Location;
use crate::store::Storage;
use chrono::NaiveDateTime;

/// Clock in / clock out.
pub struct ClockLogic;

impl ClockLogic {
    /// Open a running entry at `at`. Only one entry may run at a time.
    pub fn start(
        storage: &Storage,
        user_id: &str,
        at: NaiveDateTime,
        location: Location,
    ) -> AppResult<TimeEntry> {
        if let Some(running) = storage.entries.running_entry(user_id)? {
            return Err(AppError::AlreadyRunning(running.start_str()));
        }

        let entry = TimeEntry::new(user_id, at, location);
        storage.entries.insert_entry(&entry)
    }

    /// Close the running entry at `at`, optionally recording a pause.
    pub fn stop(
        storage: &Storage,
        user_id: &str,
        at: NaiveDateTime,
        pause_minutes: Option<i64>,
    ) -> AppResult<TimeEntry> {
        let mut entry = storage
            .entries
            .running_entry(user_id)?
            .ok_or(AppError::NotRunning)?;

        entry.end_time = Some(at);
        if let Some(p) = pause_minutes {
            entry.pause_minutes = p;
        }

        validate_entry(&entry)?;
        storage.entries.update_entry(&entry)?;
        Ok(entry)
    }
}
