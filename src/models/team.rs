use super::{entry::TimeEntry, month::MonthRef, settings::UserSettings};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub created_at: String,
}

/// A user as listed in a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub user_id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl Member {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            display_name: None,
            email: None,
        }
    }

    /// Name used for display and sorting: display name, then email, then id.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.email.as_deref().filter(|s| !s.trim().is_empty()))
            .unwrap_or(&self.user_id)
    }
}

/// Frozen copy of one member's month, shared with a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedMonth {
    pub team_id: String,
    pub user_id: String,
    pub month: MonthRef,
    pub entries: Vec<TimeEntry>,
    pub settings: UserSettings,
    pub published_at: String,
}
