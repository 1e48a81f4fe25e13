//! In-process backend: everything lives in maps behind one lock and is
//! gone when the process exits.

use super::{EntryStore, SettingsStore, TeamStore};
use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::models::month::MonthRef;
use crate::models::settings::UserSettings;
use crate::models::team::{Member, PublishedMonth, Team};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};

type PublishedKey = (String, String, MonthRef);

#[derive(Default)]
struct Inner {
    next_id: i64,
    entries: BTreeMap<i64, TimeEntry>,
    settings: HashMap<String, UserSettings>,
    teams: HashMap<String, Team>,
    members: HashMap<String, BTreeMap<String, Member>>,
    published: HashMap<PublishedKey, PublishedMonth>,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryStore for MemoryStore {
    fn insert_entry(&self, entry: &TimeEntry) -> AppResult<TimeEntry> {
        let mut inner = self.inner.write();
        inner.next_id += 1;
        let stored = TimeEntry {
            id: inner.next_id,
            ..entry.clone()
        };
        inner.entries.insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn update_entry(&self, entry: &TimeEntry) -> AppResult<()> {
        let mut inner = self.inner.write();
        match inner.entries.get_mut(&entry.id) {
            Some(existing) if existing.user_id == entry.user_id => {
                *existing = TimeEntry {
                    created_at: existing.created_at.clone(),
                    ..entry.clone()
                };
                Ok(())
            }
            _ => Err(AppError::EntryNotFound(entry.id)),
        }
    }

    fn delete_entry(&self, user_id: &str, id: i64) -> AppResult<()> {
        let mut inner = self.inner.write();
        let owned = inner.entries.get(&id).is_some_and(|e| e.user_id == user_id);
        if !owned {
            return Err(AppError::EntryNotFound(id));
        }
        inner.entries.remove(&id);
        Ok(())
    }

    fn entry(&self, user_id: &str, id: i64) -> AppResult<Option<TimeEntry>> {
        let inner = self.inner.read();
        Ok(inner
            .entries
            .get(&id)
            .filter(|e| e.user_id == user_id)
            .cloned())
    }

    fn entries_for_month(&self, user_id: &str, month: MonthRef) -> AppResult<Vec<TimeEntry>> {
        let inner = self.inner.read();
        let mut out: Vec<TimeEntry> = inner
            .entries
            .values()
            .filter(|e| e.user_id == user_id && e.month() == month)
            .cloned()
            .collect();
        out.sort_by_key(|e| (e.start_time, e.id));
        Ok(out)
    }

    fn running_entry(&self, user_id: &str) -> AppResult<Option<TimeEntry>> {
        let inner = self.inner.read();
        Ok(inner
            .entries
            .values()
            .filter(|e| e.user_id == user_id && e.is_running())
            .max_by_key(|e| e.start_time)
            .cloned())
    }
}

impl SettingsStore for MemoryStore {
    fn load_settings(&self, user_id: &str) -> AppResult<UserSettings> {
        let mut inner = self.inner.write();
        Ok(inner
            .settings
            .entry(user_id.to_string())
            .or_default()
            .clone())
    }

    fn save_settings(&self, user_id: &str, settings: &UserSettings) -> AppResult<()> {
        self.inner
            .write()
            .settings
            .insert(user_id.to_string(), settings.clone());
        Ok(())
    }
}

impl TeamStore for MemoryStore {
    fn create_team(&self, team: &Team) -> AppResult<()> {
        let mut inner = self.inner.write();
        if inner.teams.contains_key(&team.id) {
            return Err(AppError::TeamExists(team.id.clone()));
        }
        inner.teams.insert(team.id.clone(), team.clone());
        Ok(())
    }

    fn team(&self, team_id: &str) -> AppResult<Option<Team>> {
        Ok(self.inner.read().teams.get(team_id).cloned())
    }

    fn upsert_member(&self, team_id: &str, member: &Member) -> AppResult<()> {
        let mut inner = self.inner.write();
        if !inner.teams.contains_key(team_id) {
            return Err(AppError::TeamNotFound(team_id.to_string()));
        }
        inner
            .members
            .entry(team_id.to_string())
            .or_default()
            .insert(member.user_id.clone(), member.clone());
        Ok(())
    }

    fn remove_member(&self, team_id: &str, user_id: &str) -> AppResult<bool> {
        let mut inner = self.inner.write();
        Ok(inner
            .members
            .get_mut(team_id)
            .is_some_and(|m| m.remove(user_id).is_some()))
    }

    fn members(&self, team_id: &str) -> AppResult<Vec<Member>> {
        let inner = self.inner.read();
        Ok(inner
            .members
            .get(team_id)
            .map(|m| m.values().cloned().collect())
            .unwrap_or_default())
    }

    fn publish_month(&self, snapshot: &PublishedMonth) -> AppResult<()> {
        let key = (
            snapshot.team_id.clone(),
            snapshot.user_id.clone(),
            snapshot.month,
        );
        self.inner.write().published.insert(key, snapshot.clone());
        Ok(())
    }

    fn published_month(
        &self,
        team_id: &str,
        user_id: &str,
        month: MonthRef,
    ) -> AppResult<Option<PublishedMonth>> {
        let key = (team_id.to_string(), user_id.to_string(), month);
        Ok(self.inner.read().published.get(&key).cloned())
    }
}
