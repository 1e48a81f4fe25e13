//! SQLite backend. Opens a short-lived connection per operation, so the
//! store itself is `Send + Sync` and can be shared by report workers.

use super::{EntryStore, SettingsStore, TeamStore};
use crate::db::initialize::init_db;
use crate::db::log::{LogRow, load_log, ttlog};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::models::month::MonthRef;
use crate::models::settings::UserSettings;
use crate::models::team::{Member, PublishedMonth, Team};
use rusqlite::Connection;

pub struct SqliteStore {
    path: String,
}

impl SqliteStore {
    /// Open the database at `path`, applying pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self {
            path: path.to_string(),
        })
    }

    fn conn(&self) -> AppResult<DbPool> {
        Ok(DbPool::new(&self.path)?)
    }

    pub fn audit_log(&self) -> AppResult<Vec<LogRow>> {
        let pool = self.conn()?;
        load_log(&pool.conn)
    }
}

/// Audit failures never fail the operation itself.
fn audit(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(conn, operation, target, message) {
        tracing::warn!(error = %e, operation, "failed to write internal log");
    }
}

impl EntryStore for SqliteStore {
    fn insert_entry(&self, entry: &TimeEntry) -> AppResult<TimeEntry> {
        let pool = self.conn()?;
        let id = queries::insert_entry(&pool.conn, entry)?;
        audit(
            &pool.conn,
            "add",
            &format!("entry {id}"),
            &format!("{} {} for {}", entry.kind.label(), entry.start_str(), entry.user_id),
        );

        Ok(TimeEntry {
            id,
            ..entry.clone()
        })
    }

    fn update_entry(&self, entry: &TimeEntry) -> AppResult<()> {
        let pool = self.conn()?;
        if !queries::update_entry(&pool.conn, entry)? {
            return Err(AppError::EntryNotFound(entry.id));
        }
        audit(
            &pool.conn,
            "edit",
            &format!("entry {}", entry.id),
            &format!("{} {}", entry.start_str(), entry.span_label()),
        );
        Ok(())
    }

    fn delete_entry(&self, user_id: &str, id: i64) -> AppResult<()> {
        let pool = self.conn()?;
        if !queries::delete_entry(&pool.conn, user_id, id)? {
            return Err(AppError::EntryNotFound(id));
        }
        audit(&pool.conn, "del", &format!("entry {id}"), &format!("deleted for {user_id}"));
        Ok(())
    }

    fn entry(&self, user_id: &str, id: i64) -> AppResult<Option<TimeEntry>> {
        let pool = self.conn()?;
        queries::load_entry(&pool.conn, user_id, id)
    }

    fn entries_for_month(&self, user_id: &str, month: MonthRef) -> AppResult<Vec<TimeEntry>> {
        let pool = self.conn()?;
        queries::load_entries_for_month(&pool.conn, user_id, month)
    }

    fn running_entry(&self, user_id: &str) -> AppResult<Option<TimeEntry>> {
        let pool = self.conn()?;
        queries::load_running_entry(&pool.conn, user_id)
    }
}

impl SettingsStore for SqliteStore {
    fn load_settings(&self, user_id: &str) -> AppResult<UserSettings> {
        let pool = self.conn()?;

        match queries::load_settings_document(&pool.conn, user_id)? {
            Some(doc) => Ok(UserSettings::from_document(&doc)),
            None => {
                let defaults = UserSettings::default();
                queries::upsert_settings_document(&pool.conn, user_id, &defaults.to_document()?)?;
                tracing::debug!(user_id, "stored default settings");
                Ok(defaults)
            }
        }
    }

    fn save_settings(&self, user_id: &str, settings: &UserSettings) -> AppResult<()> {
        let pool = self.conn()?;
        queries::upsert_settings_document(&pool.conn, user_id, &settings.to_document()?)?;
        audit(&pool.conn, "settings", user_id, "settings updated");
        Ok(())
    }
}

impl TeamStore for SqliteStore {
    fn create_team(&self, team: &Team) -> AppResult<()> {
        let pool = self.conn()?;
        queries::insert_team(&pool.conn, team)?;
        audit(&pool.conn, "team", &team.id, &format!("team '{}' created", team.name));
        Ok(())
    }

    fn team(&self, team_id: &str) -> AppResult<Option<Team>> {
        let pool = self.conn()?;
        queries::load_team(&pool.conn, team_id)
    }

    fn upsert_member(&self, team_id: &str, member: &Member) -> AppResult<()> {
        let pool = self.conn()?;
        queries::upsert_member(&pool.conn, team_id, member)?;
        audit(&pool.conn, "team", team_id, &format!("member {} saved", member.user_id));
        Ok(())
    }

    fn remove_member(&self, team_id: &str, user_id: &str) -> AppResult<bool> {
        let pool = self.conn()?;
        let removed = queries::delete_member(&pool.conn, team_id, user_id)?;
        if removed {
            audit(&pool.conn, "team", team_id, &format!("member {user_id} removed"));
        }
        Ok(removed)
    }

    fn members(&self, team_id: &str) -> AppResult<Vec<Member>> {
        let pool = self.conn()?;
        queries::load_members(&pool.conn, team_id)
    }

    fn publish_month(&self, snapshot: &PublishedMonth) -> AppResult<()> {
        let pool = self.conn()?;
        queries::upsert_published(&pool.conn, snapshot)?;
        audit(
            &pool.conn,
            "publish",
            &format!("{}/{}", snapshot.team_id, snapshot.month),
            &format!("{} entries published by {}", snapshot.entries.len(), snapshot.user_id),
        );
        Ok(())
    }

    fn published_month(
        &self,
        team_id: &str,
        user_id: &str,
        month: MonthRef,
    ) -> AppResult<Option<PublishedMonth>> {
        let pool = self.conn()?;
        queries::load_published(&pool.conn, team_id, user_id, month)
    }
}
