use super::session_state::SessionState;
use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: i64,
    pub title: String,              // ⇔ sessions.title
    pub description: String,        // ⇔ sessions.description (TEXT, default '')
    pub scheduled_at: NaiveDateTime, // ⇔ sessions.scheduled_at ("YYYY-MM-DD HH:MM")
    pub state: SessionState,        // ⇔ sessions.state
    pub created_at: String,         // ⇔ sessions.created_at (TEXT, ISO8601)
}

impl Session {
    /// Constructor for sessions created from the CLI.
    /// New sessions always start in Preparing; `created_at` is filled by
    /// the caller so "now" stays under the configured timezone policy.
    pub fn new(title: String, description: String, scheduled_at: NaiveDateTime, created_at: String) -> Self {
        Self {
            id: 0,
            title,
            description,
            scheduled_at,
            state: SessionState::Preparing,
            created_at,
        }
    }

    pub fn scheduled_year(&self) -> i32 {
        self.scheduled_at.year()
    }

    pub fn scheduled_month(&self) -> u32 {
        self.scheduled_at.month()
    }

    pub fn scheduled_str(&self) -> String {
        self.scheduled_at.format("%Y-%m-%d %H:%M").to_string()
    }

    /// Executed sessions are the ones that left the Preparing state;
    /// only these count for correlatives and dieta reports.
    pub fn is_executed(&self) -> bool {
        !self.state.is_preparing()
    }
}
