#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cb() -> Command {
    cargo_bin_cmd!("coachboard")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_coachboard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique status-document root inside the system temp dir
pub fn setup_status_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_coachboard_status", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB + status dir for a test and return both paths
pub fn init_env(name: &str) -> (String, String) {
    let db = setup_test_db(name);
    let dir = setup_status_dir(name);

    cb().args(["--db", &db, "--status-dir", &dir, "--test", "init"])
        .assert()
        .success();

    (db, dir)
}

/// Register one athlete in the directory
pub fn add_client(db: &str, dir: &str, id: &str, first: &str, last: &str) {
    cb().args([
        "--db",
        db,
        "--status-dir",
        dir,
        "client",
        "add",
        first,
        last,
        "--id",
        id,
    ])
    .assert()
    .success();
}

/// Path of one client's status document
pub fn doc_path(dir: &str, last: &str, first: &str, id: &str) -> PathBuf {
    PathBuf::from(dir)
        .join(format!("{}_{}_{}", last, first, id))
        .join("status.json")
}

/// Parse one client's status document
pub fn read_doc(dir: &str, last: &str, first: &str, id: &str) -> serde_json::Value {
    let content = fs::read_to_string(doc_path(dir, last, first, id)).expect("read status.json");
    serde_json::from_str(&content).expect("parse status.json")
}
