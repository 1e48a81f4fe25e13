use crate::errors::{AppError, AppResult};
use crate::store::Backend;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Environment variable overriding the configuration directory.
pub const HOME_ENV: &str = "TEAMHOURS_HOME";

/// Keys every configuration file is expected to carry.
const KNOWN_KEYS: [&str; 6] = [
    "database",
    "backend",
    "user",
    "settings_cache_ttl_secs",
    "log_filter",
    "separator_char",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub backend: Backend,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_cache_ttl")]
    pub settings_cache_ttl_secs: u64,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_user() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "me".to_string())
}
fn default_cache_ttl() -> u64 {
    300
}
fn default_log_filter() -> String {
    "warn".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            backend: Backend::default(),
            user: default_user(),
            settings_cache_ttl_secs: default_cache_ttl(),
            log_filter: default_log_filter(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(HOME_ENV) {
            return expand_tilde(&dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("teamhours")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".teamhours")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("teamhours.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("teamhours.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Missing keys are filled with their defaults.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Keys absent from the configuration file on disk.
    pub fn missing_keys() -> AppResult<Vec<&'static str>> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(KNOWN_KEYS.to_vec());
        }

        let content = fs::read_to_string(&path)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        let Some(map) = value.as_mapping() else {
            return Ok(KNOWN_KEYS.to_vec());
        };

        Ok(KNOWN_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(serde_yaml::Value::String(k.to_string())))
            .collect())
    }

    /// Initialize configuration (unless `is_test`) and the database directory.
    /// Returns the configuration that was written.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::load().unwrap_or_default()
        };

        if !is_test {
            config.save()?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
