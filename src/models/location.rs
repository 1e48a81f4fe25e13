use serde::{Deserialize, Serialize};

/// Where a time entry was worked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    #[default]
    Office, // O
    Remote, // R
    OnSite, // C (Customer)
    Travel, // T
}

impl Location {
    pub fn code(&self) -> &'static str {
        match self {
            Location::Office => "O",
            Location::Remote => "R",
            Location::OnSite => "C",
            Location::Travel => "T",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Location::Office => "Office",
            Location::Remote => "Remote",
            Location::OnSite => "On-site (Customer)",
            Location::Travel => "Travel",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "O" => Some(Location::Office),
            "R" => Some(Location::Remote),
            "C" => Some(Location::OnSite),
            "T" => Some(Location::Travel),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (code or full name, any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "office" => Some(Location::Office),
            "remote" => Some(Location::Remote),
            "customer" | "onsite" | "on-site" => Some(Location::OnSite),
            "travel" => Some(Location::Travel),
            other => Location::from_db_str(&other.to_uppercase()),
        }
    }
}
