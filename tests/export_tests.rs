use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{add_client, cb, init_env, temp_out};

fn seed_board(db: &str, dir: &str) {
    add_client(db, dir, "C0001", "Alice", "Andersen");
    add_client(db, dir, "C0002", "Bruno", "Costa");

    cb().args([
        "--db",
        db,
        "--status-dir",
        dir,
        "add",
        "C0001",
        "--status",
        "rehab",
        "--date",
        "2024-01-10",
        "--comment",
        "ACL",
    ])
    .assert()
    .success();
}

#[test]
fn test_export_csv() {
    let (db, dir) = init_env("export_csv");
    seed_board(&db, &dir);

    let out = temp_out("export_csv", "csv");

    cb().args([
        "--db", &db, "--status-dir", &dir, "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with("client_id,name,status,restrictions,last_updated"));
    assert!(content.contains("C0001,Alice Andersen,Rehab,ACL,2024-01-10"));
    assert!(content.contains("Bruno Costa,Full Training"));

    // display order: Full Training rows come before Rehab rows
    let full_pos = content.find("Full Training").expect("full row");
    let rehab_pos = content.find("Rehab").expect("rehab row");
    assert!(full_pos < rehab_pos);
}

#[test]
fn test_export_json() {
    let (db, dir) = init_env("export_json");
    seed_board(&db, &dir);

    let out = temp_out("export_json", "json");

    cb().args([
        "--db", &db, "--status-dir", &dir, "export", "--format", "json", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("parse json");
    let rows = rows.as_array().expect("array");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["status"], "Full Training");
    assert_eq!(rows[0]["name"], "Bruno Costa");
    assert_eq!(rows[1]["status"], "Rehab");
    assert_eq!(rows[1]["restrictions"], "ACL");
}

#[test]
fn test_export_pdf() {
    let (db, dir) = init_env("export_pdf");
    seed_board(&db, &dir);

    let out = temp_out("export_pdf", "pdf");

    cb().args([
        "--db", &db, "--status-dir", &dir, "export", "--format", "pdf", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));
    assert!(!bytes.is_empty());
}

#[test]
fn test_export_relative_path_rejected() {
    let (db, dir) = init_env("export_relpath");
    seed_board(&db, &dir);

    cb().args([
        "--db",
        &db,
        "--status-dir",
        &dir,
        "export",
        "--format",
        "csv",
        "--file",
        "relative.csv",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file_needs_force() {
    let (db, dir) = init_env("export_force");
    seed_board(&db, &dir);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").expect("pre-create");

    // refusing the overwrite prompt aborts the export
    cb().args([
        "--db", &db, "--status-dir", &dir, "export", "--format", "csv", "--file", &out,
    ])
    .write_stdin("n\n")
    .assert()
    .failure()
    .stderr(contains("not overwritten"));

    // --force skips the prompt
    cb().args([
        "--db", &db, "--status-dir", &dir, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("client_id"));
}

#[test]
fn test_export_group_filter() {
    let (db, dir) = init_env("export_group");
    seed_board(&db, &dir);

    cb().args(["--db", &db, "--status-dir", &dir, "group", "create", "Sprinters"])
        .assert()
        .success();
    cb().args([
        "--db", &db, "--status-dir", &dir, "group", "join", "1", "C0002",
    ])
    .assert()
    .success();

    let out = temp_out("export_group", "csv");

    cb().args([
        "--db", &db, "--status-dir", &dir, "export", "--format", "csv", "--file", &out,
        "--group", "1",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("Bruno Costa"));
    assert!(!content.contains("Alice Andersen"));
}

#[test]
fn test_export_unknown_group_fails() {
    let (db, dir) = init_env("export_unknown_group");
    seed_board(&db, &dir);

    let out = temp_out("export_unknown_group", "csv");

    cb().args([
        "--db", &db, "--status-dir", &dir, "export", "--format", "csv", "--file", &out,
        "--group", "9",
    ])
    .assert()
    .failure()
    .stderr(contains("Group not found"));
}

#[test]
fn test_backup_creates_archive() {
    let (db, dir) = init_env("backup_archive");
    seed_board(&db, &dir);

    let out = temp_out("backup_archive", "zip");

    cb().args([
        "--db", &db, "--status-dir", &dir, "backup", "--file", &out, "--compress",
    ])
    .assert()
    .success()
    .stdout(contains("Backup created"));

    let bytes = fs::read(&out).expect("read archive");
    // zip local file header magic
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_backup_missing_database_fails() {
    let db = common::setup_test_db("backup_missing");
    let dir = common::setup_status_dir("backup_missing");
    let out = temp_out("backup_missing", "zip");

    cb().args([
        "--db", &db, "--status-dir", &dir, "backup", "--file", &out,
    ])
    .assert()
    .failure()
    .stderr(contains("Database not found"));
}

#[test]
fn test_show_renders_timeline_labels() {
    let (db, dir) = init_env("show_timeline");
    add_client(&db, &dir, "C0001", "Alice", "Andersen");

    cb().args(["--db", &db, "--status-dir", &dir, "show", "C0001"])
        .assert()
        .success()
        .stdout(contains("Full Training"))
        .stdout(contains("█"))
        .stdout(contains("Restrictions & Comments").or(contains("Restrictions")));
}
