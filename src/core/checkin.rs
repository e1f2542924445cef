//! Business logic for marking attendance (Entrada / Salida).
//!
//! Validation order matters: session must exist and be in progress, the
//! person must exist, duplicates and Salida-without-Entrada are rejected,
//! and only then is the (lateness-annotated) row inserted. Nothing is
//! written when any precondition fails.

use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{
    has_attendance_kind, insert_attendance, load_person, load_session,
};
use crate::errors::{AppError, AppResult};
use crate::core::lateness::{LatenessCheck, NO_DIETA_MARKER, evaluate_lateness};
use crate::models::attendance::AttendanceRecord;
use crate::models::attendance_kind::AttendanceKind;
use crate::models::geo::GeoPoint;
use chrono::{NaiveDateTime, Utc};

/// What happened, for the command layer to phrase its confirmation.
#[derive(Debug, Clone)]
pub struct MarkOutcome {
    pub record_id: i64,
    pub person_name: String,
    pub session_title: String,
    pub kind: AttendanceKind,
    /// Present only for Entrada marks.
    pub lateness: Option<LatenessCheck>,
}

pub struct MarkLogic;

impl MarkLogic {
    /// Insert one attendance event after running every precondition check.
    /// `now` is the caller-resolved local timestamp (configured offset, or
    /// the explicit `--at` override).
    pub fn apply(
        pool: &mut DbPool,
        session_id: i64,
        person_id: i64,
        kind: AttendanceKind,
        location: GeoPoint,
        now: NaiveDateTime,
    ) -> AppResult<MarkOutcome> {
        let session = load_session(&pool.conn, session_id)?;
        if !session.state.is_in_progress() {
            return Err(AppError::SessionNotOpen {
                session: session_id,
            });
        }

        let person = load_person(&pool.conn, person_id)?;

        if has_attendance_kind(&pool.conn, person_id, session_id, kind)? {
            return Err(AppError::DuplicateAttendance {
                person: person_id,
                session: session_id,
                kind: kind.to_db_str().to_string(),
            });
        }

        if kind.is_salida()
            && !has_attendance_kind(&pool.conn, person_id, session_id, AttendanceKind::Entrada)?
        {
            return Err(AppError::MissingEntrada {
                person: person_id,
                session: session_id,
            });
        }

        // Lateness is evaluated fresh at every Entrada; the penalty marker
        // lands in the note and later excludes the session from the dieta.
        let (lateness, note) = if kind.is_entrada() {
            let check = evaluate_lateness(session.scheduled_at, now);
            let note = if check.is_late {
                NO_DIETA_MARKER.to_string()
            } else {
                String::new()
            };
            (Some(check), note)
        } else {
            (None, String::new())
        };

        let record = AttendanceRecord::new(
            person_id,
            session_id,
            kind,
            now,
            location,
            note,
            Utc::now().to_rfc3339(),
        );
        let record_id = insert_attendance(&pool.conn, &record)?;

        audit(
            &pool.conn,
            kind.to_db_str(),
            &format!("session {}", session_id),
            &format!(
                "{} marked {} at {}",
                person.name,
                kind.to_db_str(),
                record.recorded_str()
            ),
        )?;

        Ok(MarkOutcome {
            record_id,
            person_name: person.name,
            session_title: session.title,
            kind,
            lateness,
        })
    }
}
