use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::store::Storage;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete entry `id` of `user_id`, returning what was removed.
    pub fn apply(storage: &Storage, user_id: &str, id: i64) -> AppResult<TimeEntry> {
        let entry = storage
            .entries
            .entry(user_id, id)?
            .ok_or(AppError::EntryNotFound(id))?;

        storage.entries.delete_entry(user_id, id)?;
        Ok(entry)
    }
}
