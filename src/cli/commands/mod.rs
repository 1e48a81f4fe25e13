//! Command handlers. Each one parses its arguments, calls the matching
//! `core` logic and prints the outcome.

pub mod add;
pub mod clock;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod publish;
pub mod report;
pub mod settings;
pub mod team;

use crate::core::add::EntryDraft;
use crate::errors::{AppError, AppResult};
use crate::models::entry_kind::EntryKind;
use crate::models::location::Location;
use crate::ui::messages::warning;
use crate::utils::date;
use crate::utils::time::{parse_duration_minutes, parse_optional_time};
use std::io::{self, Write};

/// Raw entry arguments shared by `add` and `edit`.
pub(crate) struct EntryArgs<'a> {
    pub date: Option<&'a String>,
    pub start: Option<&'a String>,
    pub end: Option<&'a String>,
    pub pause: Option<i64>,
    pub duration: Option<&'a String>,
    pub driver: Option<f64>,
    pub passenger: Option<f64>,
    pub pos: Option<&'a String>,
    pub kind: Option<&'a String>,
}

impl EntryArgs<'_> {
    pub fn into_draft(self) -> AppResult<EntryDraft> {
        let date = match self.date {
            Some(d) => Some(date::require_date(d)?),
            None => None,
        };

        let duration_minutes = match self.duration {
            Some(d) => Some(parse_duration_minutes(d)?),
            None => None,
        };

        Ok(EntryDraft {
            date,
            start: parse_optional_time(self.start)?,
            end: parse_optional_time(self.end)?,
            pause_minutes: self.pause,
            duration_minutes,
            driver_hours: self.driver,
            passenger_hours: self.passenger,
            location: parse_location(self.pos)?,
            kind: parse_kind(self.kind)?,
        })
    }
}

pub(crate) fn parse_location(pos: Option<&String>) -> AppResult<Option<Location>> {
    match pos {
        Some(code) => Location::from_code(code)
            .map(Some)
            .ok_or_else(|| {
                AppError::InvalidLocation(format!(
                    "'{}'. Use O (office), R (remote), C (customer) or T (travel)",
                    code
                ))
            }),
        None => Ok(None),
    }
}

pub(crate) fn parse_kind(kind: Option<&String>) -> AppResult<Option<EntryKind>> {
    match kind {
        Some(k) => EntryKind::from_input(k)
            .map(Some)
            .ok_or_else(|| AppError::InvalidEntryKind(k.to_string())),
        None => Ok(None),
    }
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
