//! Persistence interfaces and their backends.
//!
//! Each concern has one trait. A backend is chosen once at startup from
//! [`Backend`] and handed to the services as trait objects.

pub mod cache;
pub mod memory;
pub mod sqlite;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::entry::TimeEntry;
use crate::models::month::MonthRef;
use crate::models::settings::UserSettings;
use crate::models::team::{Member, PublishedMonth, Team};
use cache::CachedSettingsStore;
use clap::ValueEnum;
use memory::MemoryStore;
use serde::{Deserialize, Serialize};
use sqlite::SqliteStore;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Durable SQLite database (the configured `database` file)
    #[default]
    Sqlite,
    /// In-process store, discarded on exit
    Memory,
}

pub trait EntryStore: Send + Sync {
    /// Persist a new entry, returning it with its assigned id.
    fn insert_entry(&self, entry: &TimeEntry) -> AppResult<TimeEntry>;
    fn update_entry(&self, entry: &TimeEntry) -> AppResult<()>;
    fn delete_entry(&self, user_id: &str, id: i64) -> AppResult<()>;
    fn entry(&self, user_id: &str, id: i64) -> AppResult<Option<TimeEntry>>;
    /// Entries starting in `month`, sorted by start time.
    fn entries_for_month(&self, user_id: &str, month: MonthRef) -> AppResult<Vec<TimeEntry>>;
    fn running_entry(&self, user_id: &str) -> AppResult<Option<TimeEntry>>;
}

pub trait SettingsStore: Send + Sync {
    /// Settings of `user_id`; the defaults are stored on first read.
    fn load_settings(&self, user_id: &str) -> AppResult<UserSettings>;
    fn save_settings(&self, user_id: &str, settings: &UserSettings) -> AppResult<()>;
}

pub trait TeamStore: Send + Sync {
    fn create_team(&self, team: &Team) -> AppResult<()>;
    fn team(&self, team_id: &str) -> AppResult<Option<Team>>;
    fn upsert_member(&self, team_id: &str, member: &Member) -> AppResult<()>;
    fn remove_member(&self, team_id: &str, user_id: &str) -> AppResult<bool>;
    fn members(&self, team_id: &str) -> AppResult<Vec<Member>>;
    fn publish_month(&self, snapshot: &PublishedMonth) -> AppResult<()>;
    /// Published entries and settings for a (team, member, month) tuple.
    fn published_month(
        &self,
        team_id: &str,
        user_id: &str,
        month: MonthRef,
    ) -> AppResult<Option<PublishedMonth>>;
}

/// The stores a command works with.
#[derive(Clone)]
pub struct Storage {
    pub entries: Arc<dyn EntryStore>,
    pub settings: Arc<dyn SettingsStore>,
    pub teams: Arc<dyn TeamStore>,
}

impl Storage {
    /// Build the stores for `cfg.backend`. A non-zero
    /// `settings_cache_ttl_secs` puts a TTL cache in front of the settings.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let ttl = Duration::from_secs(cfg.settings_cache_ttl_secs);

        match cfg.backend {
            Backend::Sqlite => {
                let store = Arc::new(SqliteStore::open(&cfg.database)?);
                Ok(Self::from_parts(store.clone(), store.clone(), store, ttl))
            }
            Backend::Memory => {
                let store = Arc::new(MemoryStore::default());
                Ok(Self::from_parts(store.clone(), store.clone(), store, ttl))
            }
        }
    }

    pub fn from_parts(
        entries: Arc<dyn EntryStore>,
        settings: Arc<dyn SettingsStore>,
        teams: Arc<dyn TeamStore>,
        settings_ttl: Duration,
    ) -> Self {
        let settings: Arc<dyn SettingsStore> = if settings_ttl.is_zero() {
            settings
        } else {
            Arc::new(CachedSettingsStore::new(settings, settings_ttl))
        };

        Self {
            entries,
            settings,
            teams,
        }
    }

    /// In-memory stores without cache, handy for tests and dry runs.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::default());
        Self::from_parts(store.clone(), store.clone(), store, Duration::ZERO)
    }
}
