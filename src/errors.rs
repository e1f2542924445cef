//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid attendance kind: {0}")]
    InvalidKind(String),

    #[error("Invalid session state: {0}")]
    InvalidState(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Session {0} not found")]
    SessionNotFound(i64),

    #[error("Person {0} not found")]
    PersonNotFound(i64),

    #[error("Session {session}: illegal state transition {from} -> {to}")]
    IllegalTransition {
        session: i64,
        from: String,
        to: String,
    },

    #[error("Session {session} is not in progress; attendance cannot be marked")]
    SessionNotOpen { session: i64 },

    #[error("Person {person} already has a {kind} for session {session}")]
    DuplicateAttendance {
        person: i64,
        session: i64,
        kind: String,
    },

    #[error("Person {person} has no check-in for session {session}; check-out rejected")]
    MissingEntrada { person: i64, session: i64 },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
