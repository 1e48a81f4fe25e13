use crate::core::team::TeamLogic;
use crate::errors::{AppError, AppResult};
use crate::models::month::MonthRef;
use crate::models::team::PublishedMonth;
use crate::store::Storage;
use chrono::Local;

pub struct PublishLogic;

impl PublishLogic {
    /// Freeze `user_id`'s entries and settings of `month` for `team_id`.
    /// Publishing again replaces the previous snapshot.
    pub fn apply(
        storage: &Storage,
        team_id: &str,
        user_id: &str,
        month: MonthRef,
    ) -> AppResult<PublishedMonth> {
        TeamLogic::require(storage, team_id)?;

        let is_member = storage
            .teams
            .members(team_id)?
            .iter()
            .any(|m| m.user_id == user_id);
        if !is_member {
            return Err(AppError::InvalidEntry(format!(
                "{user_id} is not a member of team '{team_id}'"
            )));
        }

        let entries = storage.entries.entries_for_month(user_id, month)?;
        if let Some(running) = entries.iter().find(|e| e.is_running()) {
            tracing::warn!(id = running.id, "publishing a month with a running entry");
        }

        let snapshot = PublishedMonth {
            team_id: team_id.to_string(),
            user_id: user_id.to_string(),
            month,
            entries,
            settings: storage.settings.load_settings(user_id)?,
            published_at: Local::now().to_rfc3339(),
        };

        storage.teams.publish_month(&snapshot)?;
        Ok(snapshot)
    }
}
