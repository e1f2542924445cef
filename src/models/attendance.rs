use super::{attendance_kind::AttendanceKind, geo::GeoPoint};
use chrono::NaiveDateTime;
use serde::Serialize;

/// One attendance event row. Append-only: records are inserted once at
/// marking time and never updated or deleted by the normal flow.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub person_id: i64,          // ⇔ attendance.person_id
    pub session_id: i64,         // ⇔ attendance.session_id
    pub kind: AttendanceKind,    // ⇔ attendance.kind ('entrada' | 'salida')
    pub recorded_at: NaiveDateTime, // ⇔ attendance.recorded_at ("YYYY-MM-DD HH:MM")
    pub location: GeoPoint,      // ⇔ attendance.lat / attendance.lng
    pub note: String,            // ⇔ attendance.note (penalty marker when late)
    pub created_at: String,      // ⇔ attendance.created_at (TEXT, ISO8601)
}

impl AttendanceRecord {
    pub fn new(
        person_id: i64,
        session_id: i64,
        kind: AttendanceKind,
        recorded_at: NaiveDateTime,
        location: GeoPoint,
        note: String,
        created_at: String,
    ) -> Self {
        Self {
            id: 0,
            person_id,
            session_id,
            kind,
            recorded_at,
            location,
            note,
            created_at,
        }
    }

    pub fn recorded_str(&self) -> String {
        self.recorded_at.format("%Y-%m-%d %H:%M").to_string()
    }
}
