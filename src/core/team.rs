use crate::errors::{AppError, AppResult};
use crate::models::team::{Member, Team};
use crate::store::Storage;
use chrono::Local;

pub struct TeamLogic;

impl TeamLogic {
    pub fn create(storage: &Storage, id: &str, name: &str) -> AppResult<Team> {
        let id = id.trim();
        if id.is_empty() || id.contains(char::is_whitespace) {
            return Err(AppError::InvalidEntry(format!(
                "team id '{id}' must be a single word"
            )));
        }
        if storage.teams.team(id)?.is_some() {
            return Err(AppError::TeamExists(id.to_string()));
        }

        let team = Team {
            id: id.to_string(),
            name: name.trim().to_string(),
            created_at: Local::now().to_rfc3339(),
        };
        storage.teams.create_team(&team)?;
        Ok(team)
    }

    pub fn require(storage: &Storage, team_id: &str) -> AppResult<Team> {
        storage
            .teams
            .team(team_id)?
            .ok_or_else(|| AppError::TeamNotFound(team_id.to_string()))
    }

    pub fn add_member(storage: &Storage, team_id: &str, member: &Member) -> AppResult<()> {
        Self::require(storage, team_id)?;
        storage.teams.upsert_member(team_id, member)
    }

    pub fn remove_member(storage: &Storage, team_id: &str, user_id: &str) -> AppResult<bool> {
        Self::require(storage, team_id)?;
        storage.teams.remove_member(team_id, user_id)
    }

    pub fn members(storage: &Storage, team_id: &str) -> AppResult<Vec<Member>> {
        Self::require(storage, team_id)?;
        storage.teams.members(team_id)
    }
}
