use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{attend_on_time, dtr, init_db_with_data, setup_test_db, temp_out};

fn setup_with_attendance(name: &str) -> String {
    let db_path = setup_test_db(name);
    init_db_with_data(&db_path);
    attend_on_time(&db_path, "1", "1", "2026-03-10");
    db_path
}

#[test]
fn test_export_csv() {
    let db_path = setup_with_attendance("export_csv");
    let out = temp_out("export_csv", "csv");

    dtr()
        .args([
            "--db", &db_path, "--test",
            "export", "--format", "csv", "--file", &out, "--year", "2026",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = std::fs::read_to_string(&out).expect("csv written");
    assert!(content.starts_with("person_id,name,title,sessions,rate,total"));
    assert!(content.contains("Ana López"));
    assert!(content.contains("Q1500.00"));
}

#[test]
fn test_export_json_includes_correlatives() {
    let db_path = setup_with_attendance("export_json");
    let out = temp_out("export_json", "json");

    dtr()
        .args([
            "--db", &db_path, "--test",
            "export", "--format", "json", "--file", &out, "--year", "2026",
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = std::fs::read_to_string(&out).expect("json written");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(doc["period"], "2026");
    assert_eq!(doc["session_count"], 1);
    assert_eq!(doc["first_correlative"], "001");
    assert_eq!(doc["rows"][0]["name"], "Ana López");
    assert_eq!(doc["rows"][0]["sessions"], 1);
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_with_attendance("export_overwrite");
    let out = temp_out("export_overwrite", "csv");
    std::fs::write(&out, "existing").expect("seed file");

    dtr()
        .args([
            "--db", &db_path, "--test",
            "export", "--format", "csv", "--file", &out, "--year", "2026",
        ])
        .assert()
        .failure()
        .stderr(contains("already exists").and(contains("--force")));

    // unchanged
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "existing");

    dtr()
        .args([
            "--db", &db_path, "--test",
            "export", "--format", "csv", "--file", &out, "--year", "2026", "--force",
        ])
        .assert()
        .success();

    assert!(std::fs::read_to_string(&out).unwrap().contains("Ana López"));
}
