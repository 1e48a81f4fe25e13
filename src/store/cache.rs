//! Settings cache with moka.
//!
//! Wraps any [`SettingsStore`]. Reads are served from memory until the TTL
//! expires; a save writes through and replaces the cached value. Errors are
//! never cached.

use super::SettingsStore;
use crate::errors::AppResult;
use crate::models::settings::UserSettings;
use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;

/// Default max capacity (one entry per user)
pub const DEFAULT_SETTINGS_CACHE_CAPACITY: u64 = 1_000;

pub struct CachedSettingsStore {
    inner: Arc<dyn SettingsStore>,
    cache: Cache<String, UserSettings>,
}

impl CachedSettingsStore {
    pub fn new(inner: Arc<dyn SettingsStore>, ttl: Duration) -> Self {
        Self::with_capacity(inner, ttl, DEFAULT_SETTINGS_CACHE_CAPACITY)
    }

    pub fn with_capacity(inner: Arc<dyn SettingsStore>, ttl: Duration, max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();

        Self { inner, cache }
    }

    pub fn invalidate(&self, user_id: &str) {
        self.cache.invalidate(user_id);
    }
}

impl SettingsStore for CachedSettingsStore {
    fn load_settings(&self, user_id: &str) -> AppResult<UserSettings> {
        if let Some(hit) = self.cache.get(user_id) {
            tracing::trace!(user_id, "settings cache hit");
            return Ok(hit);
        }

        let settings = self.inner.load_settings(user_id)?;
        self.cache.insert(user_id.to_string(), settings.clone());
        Ok(settings)
    }

    fn save_settings(&self, user_id: &str, settings: &UserSettings) -> AppResult<()> {
        match self.inner.save_settings(user_id, settings) {
            Ok(()) => {
                self.cache.insert(user_id.to_string(), settings.clone());
                Ok(())
            }
            Err(e) => {
                self.invalidate(user_id);
                Err(e)
            }
        }
    }
}
