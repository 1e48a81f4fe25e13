//! Unified application error type.
//! All modules (db, store, core, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database / serialization
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid location code: {0}")]
    InvalidLocation(String),

    #[error("Invalid entry kind: {0}")]
    InvalidEntryKind(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("No entry with id {0}")]
    EntryNotFound(i64),

    #[error("No team with id '{0}'")]
    TeamNotFound(String),

    #[error("Team '{0}' already exists")]
    TeamExists(String),

    #[error("A running entry already exists (started {0})")]
    AlreadyRunning(String),

    #[error("No running entry to stop")]
    NotRunning,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
