//! Session lifecycle logic: creation and state moves.

use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_session, load_session, update_session_state};
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::models::session_state::SessionState;
use chrono::NaiveDateTime;

pub struct SessionLogic;

impl SessionLogic {
    pub fn create(
        pool: &mut DbPool,
        title: String,
        description: String,
        scheduled_at: NaiveDateTime,
        created_at: String,
    ) -> AppResult<Session> {
        let mut session = Session::new(title, description, scheduled_at, created_at);
        session.id = insert_session(&pool.conn, &session)?;

        audit(
            &pool.conn,
            "session-create",
            &format!("session {}", session.id),
            &format!("'{}' scheduled at {}", session.title, session.scheduled_str()),
        )?;

        Ok(session)
    }

    /// Move a session to `to`, enforcing the lifecycle
    /// (Preparing → InProgress → Finalized, re-open Finalized → InProgress).
    pub fn transition(pool: &mut DbPool, id: i64, to: SessionState) -> AppResult<Session> {
        let session = load_session(&pool.conn, id)?;

        if !session.state.can_transition_to(to) {
            return Err(AppError::IllegalTransition {
                session: id,
                from: session.state.to_db_str().to_string(),
                to: to.to_db_str().to_string(),
            });
        }

        update_session_state(&pool.conn, id, to)?;

        audit(
            &pool.conn,
            "session-state",
            &format!("session {}", id),
            &format!("{} -> {}", session.state.to_db_str(), to.to_db_str()),
        )?;

        load_session(&pool.conn, id)
    }
}
