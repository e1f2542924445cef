use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceRecord;
use crate::models::attendance_kind::AttendanceKind;
use crate::models::geo::GeoPoint;
use crate::models::person::Person;
use crate::models::session::Session;
use crate::models::session_state::SessionState;
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const DT_FMT: &str = "%Y-%m-%d %H:%M";

fn conversion_err(e: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
}

fn parse_dt_column(s: &str) -> rusqlite::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DT_FMT)
        .map_err(|_| conversion_err(AppError::InvalidTime(s.to_string())))
}

// ---------------------------------------------------------------------------
// Row mappers
// ---------------------------------------------------------------------------

pub fn map_session_row(row: &Row) -> Result<Session> {
    let scheduled_str: String = row.get("scheduled_at")?;
    let state_str: String = row.get("state")?;

    let state = SessionState::from_db_str(&state_str)
        .ok_or_else(|| conversion_err(AppError::InvalidState(state_str.clone())))?;

    Ok(Session {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        scheduled_at: parse_dt_column(&scheduled_str)?,
        state,
        created_at: row.get("created_at")?,
    })
}

pub fn map_person_row(row: &Row) -> Result<Person> {
    Ok(Person {
        id: row.get("id")?,
        name: row.get("name")?,
        title: row.get("title")?,
    })
}

pub fn map_attendance_row(row: &Row) -> Result<AttendanceRecord> {
    let recorded_str: String = row.get("recorded_at")?;
    let kind_str: String = row.get("kind")?;

    let kind = AttendanceKind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_err(AppError::InvalidKind(kind_str.clone())))?;

    Ok(AttendanceRecord {
        id: row.get("id")?,
        person_id: row.get("person_id")?,
        session_id: row.get("session_id")?,
        kind,
        recorded_at: parse_dt_column(&recorded_str)?,
        location: GeoPoint {
            lat: row.get("lat")?,
            lng: row.get("lng")?,
        },
        note: row.get("note")?,
        created_at: row.get("created_at")?,
    })
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

pub fn insert_session(conn: &Connection, session: &Session) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO sessions (title, description, scheduled_at, state, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            session.title,
            session.description,
            session.scheduled_at.format(DT_FMT).to_string(),
            session.state.to_db_str(),
            session.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_session(conn: &Connection, id: i64) -> AppResult<Session> {
    let session = conn
        .prepare("SELECT * FROM sessions WHERE id = ?1")?
        .query_row([id], map_session_row)
        .optional()?;

    session.ok_or(AppError::SessionNotFound(id))
}

/// All sessions scheduled inside one calendar year, any state,
/// chronological order (id breaks timestamp ties).
pub fn load_sessions_by_year(conn: &Connection, year: i32) -> AppResult<Vec<Session>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM sessions
         WHERE scheduled_at >= ?1 AND scheduled_at < ?2
         ORDER BY scheduled_at ASC, id ASC",
    )?;

    let from = format!("{:04}-01-01 00:00", year);
    let to = format!("{:04}-01-01 00:00", year + 1);

    let rows = stmt.query_map([from, to], map_session_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_session_state(conn: &Connection, id: i64, state: SessionState) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE sessions SET state = ?1 WHERE id = ?2",
        params![state.to_db_str(), id],
    )?;
    if changed == 0 {
        return Err(AppError::SessionNotFound(id));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Persons
// ---------------------------------------------------------------------------

pub fn insert_person(conn: &Connection, person: &Person) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO persons (name, title) VALUES (?1, ?2)",
        params![person.name, person.title],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_person(conn: &Connection, id: i64) -> AppResult<Person> {
    let person = conn
        .prepare("SELECT * FROM persons WHERE id = ?1")?
        .query_row([id], map_person_row)
        .optional()?;

    person.ok_or(AppError::PersonNotFound(id))
}

pub fn load_persons(conn: &Connection) -> AppResult<Vec<Person>> {
    let mut stmt = conn.prepare("SELECT * FROM persons ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_person_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Attendance
// ---------------------------------------------------------------------------

pub fn insert_attendance(conn: &Connection, rec: &AttendanceRecord) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO attendance
            (person_id, session_id, kind, recorded_at, lat, lng, note, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            rec.person_id,
            rec.session_id,
            rec.kind.to_db_str(),
            rec.recorded_at.format(DT_FMT).to_string(),
            rec.location.lat,
            rec.location.lng,
            rec.note,
            rec.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Precondition probe: does this person already have an event of this kind
/// for this session? (The invariant is enforced here, before insert, not
/// by a DB constraint.)
pub fn has_attendance_kind(
    conn: &Connection,
    person_id: i64,
    session_id: i64,
    kind: AttendanceKind,
) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached(
        "SELECT 1 FROM attendance
         WHERE person_id = ?1 AND session_id = ?2 AND kind = ?3
         LIMIT 1",
    )?;
    let exists = stmt.exists(params![person_id, session_id, kind.to_db_str()])?;
    Ok(exists)
}

pub fn load_attendance_by_session(
    conn: &Connection,
    session_id: i64,
) -> AppResult<Vec<AttendanceRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM attendance
         WHERE session_id = ?1
         ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([session_id], map_attendance_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// All attendance rows belonging to sessions of one calendar year, in
/// insertion order so the last-seen-wins tie-break is well defined.
pub fn load_attendance_by_year(conn: &Connection, year: i32) -> AppResult<Vec<AttendanceRecord>> {
    let mut stmt = conn.prepare(
        "SELECT a.* FROM attendance a
         JOIN sessions s ON s.id = a.session_id
         WHERE s.scheduled_at >= ?1 AND s.scheduled_at < ?2
         ORDER BY a.id ASC",
    )?;

    let from = format!("{:04}-01-01 00:00", year);
    let to = format!("{:04}-01-01 00:00", year + 1);

    let rows = stmt.query_map([from, to], map_attendance_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
