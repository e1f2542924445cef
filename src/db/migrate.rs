//! Schema migrations driven by `PRAGMA user_version`.
//! All schema creation and upgrades live here; nothing else issues DDL.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

const SCHEMA_VERSION: i64 = 2;

fn user_version(conn: &Connection) -> AppResult<i64> {
    let v: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(v)
}

fn set_user_version(conn: &Connection, v: i64) -> AppResult<()> {
    conn.execute_batch(&format!("PRAGMA user_version = {}", v))?;
    Ok(())
}

/// v1: base schema.
fn migration_v1(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            title        TEXT NOT NULL,
            description  TEXT NOT NULL DEFAULT '',
            scheduled_at TEXT NOT NULL,
            state        TEXT NOT NULL DEFAULT 'preparing'
                         CHECK(state IN ('preparing','in_progress','finalized')),
            created_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS persons (
            id     INTEGER PRIMARY KEY AUTOINCREMENT,
            name   TEXT NOT NULL,
            title  TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS attendance (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            person_id   INTEGER NOT NULL REFERENCES persons(id),
            session_id  INTEGER NOT NULL REFERENCES sessions(id),
            kind        TEXT NOT NULL CHECK(kind IN ('entrada','salida')),
            recorded_at TEXT NOT NULL,
            lat         REAL NOT NULL,
            lng         REAL NOT NULL,
            note        TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT NOT NULL DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// v2: indexes for the report queries.
fn migration_v2(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_sessions_scheduled ON sessions(scheduled_at);
        CREATE INDEX IF NOT EXISTS idx_attendance_session ON attendance(session_id);
        CREATE INDEX IF NOT EXISTS idx_attendance_person_session
            ON attendance(person_id, session_id, kind);
        "#,
    )?;
    Ok(())
}

/// Apply every migration newer than the stored user_version.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let mut version = user_version(conn)?;

    while version < SCHEMA_VERSION {
        let next = version + 1;
        match next {
            1 => migration_v1(conn)?,
            2 => migration_v2(conn)?,
            n => {
                return Err(AppError::Migration(format!(
                    "no migration registered for schema version {}",
                    n
                )));
            }
        }
        set_user_version(conn, next)?;
        version = next;
    }

    Ok(())
}

/// True when the stored schema is older than this binary expects.
pub fn needs_migration(conn: &Connection) -> AppResult<bool> {
    Ok(user_version(conn)? < SCHEMA_VERSION)
}
