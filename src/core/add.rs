use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::models::entry_kind::EntryKind;
use crate::models::location::Location;
use crate::store::Storage;
use chrono::{NaiveDate, NaiveTime};

/// Field values for a new entry or for changes to an existing one.
/// `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub date: Option<NaiveDate>,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub pause_minutes: Option<i64>,
    pub duration_minutes: Option<i64>,
    pub driver_hours: Option<f64>,
    pub passenger_hours: Option<f64>,
    pub location: Option<Location>,
    pub kind: Option<EntryKind>,
}

/// High-level business logic for the `add` and `edit` commands.
pub struct AddLogic;

impl AddLogic {
    /// Create an entry for `user_id`.
    ///
    /// - special kinds get `default_work_hours` as duration, read from the
    ///   user's settings at creation time
    /// - work entries need a start; with neither end nor duration the entry
    ///   is running, like a clock-in
    pub fn apply(storage: &Storage, user_id: &str, draft: &EntryDraft) -> AppResult<TimeEntry> {
        let date = draft
            .date
            .ok_or_else(|| AppError::InvalidEntry("a date is required".into()))?;
        let kind = draft.kind.unwrap_or_default();
        let location = draft.location.unwrap_or_default();

        if kind.is_special() {
            return Self::add_special(storage, user_id, date, kind, location, draft);
        }

        let start_time = draft
            .start
            .ok_or_else(|| AppError::InvalidEntry("--in is required for work entries".into()))?;

        let mut entry = TimeEntry::new(user_id, date.and_time(start_time), location)
            .with_pause(draft.pause_minutes.unwrap_or(0));

        match (draft.end, draft.duration_minutes) {
            (Some(_), Some(_)) => {
                return Err(AppError::InvalidEntry(
                    "use either --out or --duration, not both".into(),
                ));
            }
            (Some(end), None) => entry.end_time = Some(date.and_time(end)),
            (None, Some(minutes)) => entry.duration_minutes = Some(minutes),
            (None, None) => {}
        }

        entry.driver_time_hours = draft.driver_hours;
        entry.passenger_time_hours = draft.passenger_hours;

        validate_entry(&entry)?;

        if entry.is_running()
            && let Some(running) = storage.entries.running_entry(user_id)?
        {
            return Err(AppError::AlreadyRunning(running.start_str()));
        }

        let stored = storage.entries.insert_entry(&entry)?;
        tracing::debug!(id = stored.id, user_id, "entry added");
        Ok(stored)
    }

    fn add_special(
        storage: &Storage,
        user_id: &str,
        date: NaiveDate,
        kind: EntryKind,
        location: Location,
        draft: &EntryDraft,
    ) -> AppResult<TimeEntry> {
        if draft.end.is_some()
            || draft.duration_minutes.is_some()
            || draft.driver_hours.is_some()
            || draft.passenger_hours.is_some()
        {
            return Err(AppError::InvalidEntry(format!(
                "{} entries take their duration from the daily work hours",
                kind.label()
            )));
        }

        let settings = storage.settings.load_settings(user_id)?;
        let minutes = (settings.default_work_hours * 60.0).round() as i64;
        let start = draft.start.unwrap_or(NaiveTime::MIN);

        let entry = TimeEntry::new(user_id, date.and_time(start), location)
            .with_kind(kind)
            .with_duration(minutes);

        validate_entry(&entry)?;
        storage.entries.insert_entry(&entry)
    }

    /// Apply the given fields to entry `id` and save it.
    pub fn edit(storage: &Storage, user_id: &str, id: i64, draft: &EntryDraft) -> AppResult<TimeEntry> {
        let mut entry = storage
            .entries
            .entry(user_id, id)?
            .ok_or(AppError::EntryNotFound(id))?;

        let kind = draft.kind.unwrap_or(entry.kind);
        if kind.is_special() {
            return Self::edit_special(storage, user_id, entry, kind, draft);
        }

        let date = draft.date.unwrap_or_else(|| entry.date());
        let start = draft.start.unwrap_or_else(|| entry.start_time.time());
        entry.start_time = date.and_time(start);

        if let Some(end) = draft.end {
            entry.end_time = Some(date.and_time(end));
            entry.duration_minutes = None;
        } else if let Some(old_end) = entry.end_time {
            // keep the end on the (possibly moved) entry date
            entry.end_time = Some(date.and_time(old_end.time()));
        }

        if let Some(minutes) = draft.duration_minutes {
            if draft.end.is_some() {
                return Err(AppError::InvalidEntry(
                    "use either --out or --duration, not both".into(),
                ));
            }
            entry.duration_minutes = Some(minutes);
            entry.end_time = None;
        }

        if let Some(p) = draft.pause_minutes {
            entry.pause_minutes = p;
        }
        if let Some(h) = draft.driver_hours {
            entry.driver_time_hours = Some(h);
        }
        if let Some(h) = draft.passenger_hours {
            entry.passenger_time_hours = Some(h);
        }
        if let Some(loc) = draft.location {
            entry.location = loc;
        }
        entry.kind = kind;

        validate_entry(&entry)?;
        storage.entries.update_entry(&entry)?;
        Ok(entry)
    }

    /// Special entries only move in date or location. Turning a work entry
    /// into a special one resets it to the current daily work hours.
    fn edit_special(
        storage: &Storage,
        user_id: &str,
        mut entry: TimeEntry,
        kind: EntryKind,
        draft: &EntryDraft,
    ) -> AppResult<TimeEntry> {
        if draft.start.is_some()
            || draft.end.is_some()
            || draft.duration_minutes.is_some()
            || draft.pause_minutes.is_some()
            || draft.driver_hours.is_some()
            || draft.passenger_hours.is_some()
        {
            return Err(AppError::InvalidEntry(format!(
                "{} entries take their duration from the daily work hours",
                kind.label()
            )));
        }

        if let Some(date) = draft.date {
            entry.start_time = date.and_time(entry.start_time.time());
        }
        if let Some(loc) = draft.location {
            entry.location = loc;
        }

        if !entry.kind.is_special() {
            let settings = storage.settings.load_settings(user_id)?;
            entry.duration_minutes = Some((settings.default_work_hours * 60.0).round() as i64);
            entry.end_time = None;
            entry.pause_minutes = 0;
            entry.driver_time_hours = None;
            entry.passenger_time_hours = None;
        }
        entry.kind = kind;

        validate_entry(&entry)?;
        storage.entries.update_entry(&entry)?;
        tracing::debug!(id = entry.id, user_id, kind = kind.label(), "special entry edited");
        Ok(entry)
    }
}

/// Consistency checks shared by add, edit and stop.
pub fn validate_entry(entry: &TimeEntry) -> AppResult<()> {
    if entry.pause_minutes < 0 {
        return Err(AppError::InvalidEntry("pause cannot be negative".into()));
    }

    if let Some(end) = entry.end_time {
        if end <= entry.start_time {
            return Err(AppError::InvalidEntry("END must be later than START".into()));
        }
        let elapsed = (end - entry.start_time).num_minutes();
        if entry.pause_minutes > elapsed {
            return Err(AppError::InvalidEntry(format!(
                "pause of {} min does not fit in {} min",
                entry.pause_minutes, elapsed
            )));
        }
    }

    if entry.duration_minutes.is_some_and(|m| m < 0) {
        return Err(AppError::InvalidEntry("duration cannot be negative".into()));
    }

    for (name, value) in [
        ("driver", entry.driver_time_hours),
        ("passenger", entry.passenger_time_hours),
    ] {
        if let Some(v) = value
            && (v < 0.0 || !v.is_finite())
        {
            return Err(AppError::InvalidEntry(format!("{name} hours must be ≥ 0")));
        }
    }

    if entry.kind.is_special()
        && (entry.end_time.is_some() || entry.duration_minutes.is_none())
    {
        return Err(AppError::InvalidEntry(format!(
            "{} entries need a duration and no end time",
            entry.kind.label()
        )));
    }

    if entry.kind.is_special()
        && (entry.driver_time_hours.is_some() || entry.passenger_time_hours.is_some())
    {
        return Err(AppError::InvalidEntry(format!(
            "{} entries carry no travel time",
            entry.kind.label()
        )));
    }

    Ok(())
}
