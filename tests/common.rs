#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::path::PathBuf;

pub fn dtr() -> Command {
    cargo_bin_cmd!("dietario")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dietario.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    std::fs::remove_file(&p).ok();
    p
}

/// Initialize DB, add a small roster, and one in-progress session.
/// Session 1: "Sesión ordinaria" scheduled 2026-03-10 08:00 (30' tolerance).
/// Persons: 1 = Ana López (Alcaldesa), 2 = Pedro Sosa (Concejal Segundo).
pub fn init_db_with_data(db_path: &str) {
    dtr()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    dtr()
        .args([
            "--db", db_path, "--test",
            "person", "add",
            "--name", "Ana López",
            "--title", "Alcaldesa Municipal",
        ])
        .assert()
        .success();

    dtr()
        .args([
            "--db", db_path, "--test",
            "person", "add",
            "--name", "Pedro Sosa",
            "--title", "Concejal Segundo",
        ])
        .assert()
        .success();

    dtr()
        .args([
            "--db", db_path, "--test",
            "session", "create",
            "--title", "Sesión ordinaria",
            "--at", "2026-03-10 08:00",
        ])
        .assert()
        .success();

    dtr()
        .args(["--db", db_path, "--test", "session", "start", "1"])
        .assert()
        .success();
}

/// Mark a full on-time attendance (Entrada + Salida) for a person in a
/// session scheduled at 08:00.
pub fn attend_on_time(db_path: &str, session: &str, person: &str, date: &str) {
    dtr()
        .args([
            "--db", db_path, "--test",
            "checkin", session, person,
            "--lat", "14.62", "--lng=-90.52",
            "--at", &format!("{} 08:05", date),
        ])
        .assert()
        .success();

    dtr()
        .args([
            "--db", db_path, "--test",
            "checkout", session, person,
            "--lat", "14.62", "--lng=-90.52",
            "--at", &format!("{} 10:30", date),
        ])
        .assert()
        .success();
}
