use serde::Serialize;

/// Lifecycle of a council session.
/// Preparing -> InProgress -> Finalized, plus an explicit re-opening path
/// Finalized -> InProgress for corrections (admin override).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    Preparing,
    InProgress,
    Finalized,
}

impl SessionState {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            SessionState::Preparing => "preparing",
            SessionState::InProgress => "in_progress",
            SessionState::Finalized => "finalized",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "preparing" => Some(SessionState::Preparing),
            "in_progress" => Some(SessionState::InProgress),
            "finalized" => Some(SessionState::Finalized),
            _ => None,
        }
    }

    pub fn is_preparing(&self) -> bool {
        matches!(self, SessionState::Preparing)
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, SessionState::InProgress)
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self, SessionState::Finalized)
    }

    /// Whether `self -> to` is a legal lifecycle move.
    /// Finalized -> InProgress is the explicit re-opening override.
    pub fn can_transition_to(&self, to: SessionState) -> bool {
        matches!(
            (self, to),
            (SessionState::Preparing, SessionState::InProgress)
                | (SessionState::InProgress, SessionState::Finalized)
                | (SessionState::Finalized, SessionState::InProgress)
        )
    }

    /// Human-readable label for tables and messages.
    pub fn label(&self) -> &'static str {
        match self {
            SessionState::Preparing => "preparing",
            SessionState::InProgress => "in progress",
            SessionState::Finalized => "finalized",
        }
    }
}
