use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_client, cb, init_env, read_doc};

#[test]
fn test_init_creates_directory_tables() {
    let (db, dir) = init_env("init_tables");

    cb().args(["--db", &db, "--status-dir", &dir, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("clients:     0"))
        .stdout(contains("groups:      0"));
}

#[test]
fn test_client_add_and_list_ordering() {
    let (db, dir) = init_env("client_ordering");

    add_client(&db, &dir, "C0001", "Zoe", "Adams");
    add_client(&db, &dir, "C0002", "Anna", "Berg");

    // ordered by last name, Adams before Berg
    cb().args(["--db", &db, "--status-dir", &dir, "client", "list"])
        .assert()
        .success()
        .stdout(
            predicates::str::is_match("(?s)Zoe Adams.*Anna Berg").expect("Invalid regex"),
        );
}

#[test]
fn test_client_generated_id() {
    let (db, dir) = init_env("client_gen_id");

    cb().args([
        "--db",
        &db,
        "--status-dir",
        &dir,
        "client",
        "add",
        "Jane",
        "Doe",
    ])
    .assert()
    .success()
    .stdout(contains("C0001"));

    cb().args([
        "--db",
        &db,
        "--status-dir",
        &dir,
        "client",
        "add",
        "John",
        "Doe",
    ])
    .assert()
    .success()
    .stdout(contains("C0002"));
}

#[test]
fn test_add_status_and_show() {
    let (db, dir) = init_env("add_show");
    add_client(&db, &dir, "C0042", "Jane", "Doe");

    cb().args([
        "--db",
        &db,
        "--status-dir",
        &dir,
        "add",
        "C0042",
        "--status",
        "rehab",
        "--date",
        "2024-01-10",
        "--comment",
        "ACL",
    ])
    .assert()
    .success()
    .stdout(contains("Rehab"));

    cb().args(["--db", &db, "--status-dir", &dir, "show", "C0042"])
        .assert()
        .success()
        .stdout(contains("Jane Doe"))
        .stdout(contains("Full Training")) // synthesized first entry
        .stdout(contains("Rehab"))
        .stdout(contains("2024-01-10"))
        .stdout(contains("ACL"));

    let doc = read_doc(&dir, "Doe", "Jane", "C0042");
    assert_eq!(doc["current_status"], "Rehab");
    assert_eq!(doc["last_updated"], "2024-01-10");
    assert_eq!(doc["restrictions"], "ACL");
    assert_eq!(doc["history"].as_array().expect("history").len(), 2);
}

#[test]
fn test_add_same_status_is_noop() {
    let (db, dir) = init_env("add_noop");
    add_client(&db, &dir, "C0042", "Jane", "Doe");

    cb().args([
        "--db",
        &db,
        "--status-dir",
        &dir,
        "add",
        "C0042",
        "--status",
        "rehab",
        "--date",
        "2024-01-10",
        "--comment",
        "ACL",
    ])
    .assert()
    .success();

    // repeating the same status must not create a new timeline segment
    cb().args([
        "--db",
        &db,
        "--status-dir",
        &dir,
        "add",
        "C0042",
        "--status",
        "rehab",
        "--date",
        "2024-01-15",
        "--comment",
        "still sore",
    ])
    .assert()
    .success()
    .stdout(contains("already in Rehab"));

    let doc = read_doc(&dir, "Doe", "Jane", "C0042");
    assert_eq!(doc["history"].as_array().expect("history").len(), 2);
    assert_eq!(doc["last_updated"], "2024-01-10");
}

#[test]
fn test_add_unknown_client_fails() {
    let (db, dir) = init_env("add_unknown");

    cb().args([
        "--db",
        &db,
        "--status-dir",
        &dir,
        "add",
        "C9999",
        "--status",
        "rehab",
    ])
    .assert()
    .failure()
    .stderr(contains("Client not found"));
}

#[test]
fn test_add_invalid_status_code_fails() {
    let (db, dir) = init_env("add_bad_status");
    add_client(&db, &dir, "C0001", "Jane", "Doe");

    cb().args([
        "--db",
        &db,
        "--status-dir",
        &dir,
        "add",
        "C0001",
        "--status",
        "resting",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid training status"));
}

#[test]
fn test_edit_entry_resyncs_derived_fields() {
    let (db, dir) = init_env("edit_resync");
    add_client(&db, &dir, "C0007", "Ana", "Silva");

    cb().args([
        "--db",
        &db,
        "--status-dir",
        &dir,
        "add",
        "C0007",
        "--status",
        "modified",
        "--date",
        "2024-03-01",
        "--comment",
        "no sprints",
    ])
    .assert()
    .success();

    // entry 2 is the appended one; correcting its date must re-derive
    // last_updated from the history
    cb().args([
        "--db",
        &db,
        "--status-dir",
        &dir,
        "edit",
        "C0007",
        "--entry",
        "2",
        "--date",
        "2024-03-05",
        "--comment",
        "no sprints, light jog ok",
    ])
    .assert()
    .success();

    let doc = read_doc(&dir, "Silva", "Ana", "C0007");
    assert_eq!(doc["current_status"], "Modified Training");
    assert_eq!(doc["last_updated"], "2024-03-05");
    assert_eq!(doc["restrictions"], "no sprints, light jog ok");
}

#[test]
fn test_edit_invalid_entry_fails() {
    let (db, dir) = init_env("edit_invalid");
    add_client(&db, &dir, "C0007", "Ana", "Silva");

    cb().args([
        "--db",
        &db,
        "--status-dir",
        &dir,
        "edit",
        "C0007",
        "--entry",
        "5",
        "--comment",
        "stale index",
    ])
    .assert()
    .failure()
    .stderr(contains("does not exist"));
}

#[test]
fn test_del_entry_with_confirmation() {
    let (db, dir) = init_env("del_confirm");
    add_client(&db, &dir, "C0003", "Mia", "Larsen");

    cb().args([
        "--db",
        &db,
        "--status-dir",
        &dir,
        "add",
        "C0003",
        "--status",
        "none",
        "--date",
        "2024-05-01",
        "--comment",
        "surgery",
    ])
    .assert()
    .success();

    cb().args([
        "--db",
        &db,
        "--status-dir",
        &dir,
        "del",
        "C0003",
        "--entry",
        "2",
    ])
    .write_stdin("y\n")
    .assert()
    .success()
    .stdout(contains("deleted"));

    // back to the synthesized first entry
    let doc = read_doc(&dir, "Larsen", "Mia", "C0003");
    assert_eq!(doc["current_status"], "Full Training");
    assert_eq!(doc["history"].as_array().expect("history").len(), 1);
}

#[test]
fn test_del_cancelled_keeps_entry() {
    let (db, dir) = init_env("del_cancel");
    add_client(&db, &dir, "C0003", "Mia", "Larsen");

    cb().args([
        "--db",
        &db,
        "--status-dir",
        &dir,
        "add",
        "C0003",
        "--status",
        "rehab",
        "--date",
        "2024-05-01",
    ])
    .assert()
    .success();

    cb().args([
        "--db",
        &db,
        "--status-dir",
        &dir,
        "del",
        "C0003",
        "--entry",
        "2",
    ])
    .write_stdin("n\n")
    .assert()
    .success()
    .stdout(contains("cancelled"));

    let doc = read_doc(&dir, "Larsen", "Mia", "C0003");
    assert_eq!(doc["history"].as_array().expect("history").len(), 2);
}

#[test]
fn test_del_nonexistent_entry() {
    let (db, dir) = init_env("del_nonexistent");
    add_client(&db, &dir, "C0003", "Mia", "Larsen");

    cb().args([
        "--db",
        &db,
        "--status-dir",
        &dir,
        "del",
        "C0003",
        "--entry",
        "5",
        "--yes",
    ])
    .assert()
    .failure()
    .stderr(contains("does not exist"));
}

#[test]
fn test_board_grouping_and_display_order() {
    let (db, dir) = init_env("board_order");
    add_client(&db, &dir, "C0001", "Alice", "Andersen");
    add_client(&db, &dir, "C0002", "Bruno", "Costa");
    add_client(&db, &dir, "C0003", "Carla", "Diaz");

    cb().args([
        "--db", &db, "--status-dir", &dir, "add", "C0001", "--status", "rehab", "--comment",
        "ankle",
    ])
    .assert()
    .success();

    cb().args([
        "--db", &db, "--status-dir", &dir, "add", "C0003", "--status", "rehab", "--comment",
        "wrist",
    ])
    .assert()
    .success();

    // board shows Full Training before Rehab (fixed display order) and
    // both rehab clients inside the Rehab section
    cb().args(["--db", &db, "--status-dir", &dir, "list"])
        .assert()
        .success()
        .stdout(
            predicates::str::is_match(
                "(?s)Full Training.*Bruno Costa.*Rehab.*Alice Andersen.*Carla Diaz",
            )
            .expect("Invalid regex"),
        );
}

#[test]
fn test_board_group_filter() {
    let (db, dir) = init_env("board_group_filter");
    add_client(&db, &dir, "C0001", "Alice", "Andersen");
    add_client(&db, &dir, "C0002", "Bruno", "Costa");

    cb().args(["--db", &db, "--status-dir", &dir, "group", "create", "Sprinters"])
        .assert()
        .success()
        .stdout(contains("Sprinters"));

    cb().args([
        "--db", &db, "--status-dir", &dir, "group", "join", "1", "C0001",
    ])
    .assert()
    .success();

    cb().args(["--db", &db, "--status-dir", &dir, "list", "--group", "1"])
        .assert()
        .success()
        .stdout(contains("Alice Andersen"))
        .stdout(contains("Bruno Costa").not());
}

#[test]
fn test_archived_client_leaves_board() {
    let (db, dir) = init_env("board_archive");
    add_client(&db, &dir, "C0001", "Alice", "Andersen");
    add_client(&db, &dir, "C0002", "Bruno", "Costa");

    cb().args(["--db", &db, "--status-dir", &dir, "client", "archive", "C0002"])
        .assert()
        .success();

    cb().args(["--db", &db, "--status-dir", &dir, "list"])
        .assert()
        .success()
        .stdout(contains("Alice Andersen"))
        .stdout(contains("Bruno Costa").not());
}

#[test]
fn test_audit_log_records_operations() {
    let (db, dir) = init_env("audit_log");
    add_client(&db, &dir, "C0001", "Jane", "Doe");

    cb().args([
        "--db", &db, "--status-dir", &dir, "add", "C0001", "--status", "modified",
    ])
    .assert()
    .success();

    cb().args(["--db", &db, "--status-dir", &dir, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("client"))
        .stdout(contains("add"));

    // regex filter narrows the listing
    cb().args([
        "--db",
        &db,
        "--status-dir",
        &dir,
        "log",
        "--print",
        "--filter",
        "initialized",
    ])
    .assert()
    .success()
    .stdout(contains("Database initialized"))
    .stdout(contains("directory").not());
}
