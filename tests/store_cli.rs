use assert_cmd::Command;
use predicates::prelude::*;

const HEADER: &str = "id,date,content,category,tags";

fn kiroku(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("kiroku").unwrap();
    cmd.env("KIROKU_HOME", data_dir);
    cmd
}

#[test]
fn save_then_cat_round_trips() {
    let temp = tempfile::tempdir().unwrap();
    let blob = format!("{}\n1,2024-01-01,hello,misc,\n", HEADER);

    kiroku(temp.path())
        .arg("save")
        .write_stdin(blob.clone())
        .assert()
        .success()
        .stdout(predicate::str::contains("Diary saved."));

    kiroku(temp.path())
        .arg("cat")
        .assert()
        .success()
        .stdout(predicate::str::diff(blob));
}

#[test]
fn rejects_payload_with_wrong_header() {
    let temp = tempfile::tempdir().unwrap();

    kiroku(temp.path())
        .arg("save")
        .write_stdin("bad header\n1,2024-01-01,x,misc,\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("column header"));

    // Nothing was persisted.
    assert!(!temp.path().join("diaries.csv").exists());
}

#[test]
fn save_sanitizes_formula_cells() {
    let temp = tempfile::tempdir().unwrap();
    let blob = format!("{}\n1,2024-01-01,=SUM(A1),misc,\n", HEADER);

    kiroku(temp.path())
        .arg("save")
        .write_stdin(blob)
        .assert()
        .success();

    kiroku(temp.path())
        .arg("cat")
        .assert()
        .success()
        .stdout(predicate::str::contains("'=SUM(A1)"));
}

#[test]
fn delete_removes_only_exact_id_and_leaves_backup() {
    let temp = tempfile::tempdir().unwrap();
    let blob = format!(
        "{}\n1,2024-01-01,first,misc,\n10,2024-01-02,second,misc,\n",
        HEADER
    );

    kiroku(temp.path())
        .arg("save")
        .write_stdin(blob)
        .assert()
        .success();

    kiroku(temp.path()).args(["delete", "1"]).assert().success();

    kiroku(temp.path())
        .arg("cat")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("10,2024-01-02,second")
                .and(predicate::str::contains("1,2024-01-01,first").not()),
        );

    // The first save bootstrapped a fresh store (no backup); the delete is
    // the one mutation of an existing store.
    let backups: Vec<_> = std::fs::read_dir(temp.path().join("backups"))
        .unwrap()
        .collect();
    assert_eq!(backups.len(), 1);
}

#[test]
fn delete_with_bad_id_fails_validation() {
    let temp = tempfile::tempdir().unwrap();

    kiroku(temp.path())
        .args(["delete", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid entry id"));
}

#[test]
fn cat_bootstraps_missing_store() {
    let temp = tempfile::tempdir().unwrap();

    kiroku(temp.path())
        .arg("cat")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", HEADER)));

    assert!(temp.path().join("diaries.csv").exists());
}

#[test]
fn init_twice_leaves_single_header_line() {
    let temp = tempfile::tempdir().unwrap();

    kiroku(temp.path()).arg("init").assert().success();
    kiroku(temp.path()).arg("init").assert().success();

    let content = std::fs::read_to_string(temp.path().join("diaries.csv")).unwrap();
    assert_eq!(content, format!("{}\n", HEADER));
}

#[test]
fn list_shows_entry_content() {
    let temp = tempfile::tempdir().unwrap();
    let blob = format!("{}\n1,2024-01-01,walked the cat,pets,\n", HEADER);

    kiroku(temp.path())
        .arg("save")
        .write_stdin(blob)
        .assert()
        .success();

    kiroku(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("walked the cat"));
}

#[test]
fn log_appends_to_dated_file() {
    let temp = tempfile::tempdir().unwrap();

    kiroku(temp.path())
        .args(["log", "info", "client started"])
        .assert()
        .success();

    let logs: Vec<_> = std::fs::read_dir(temp.path().join("logs"))
        .unwrap()
        .map(|e| e.unwrap())
        .collect();
    assert_eq!(logs.len(), 1);

    let content = std::fs::read_to_string(logs[0].path()).unwrap();
    assert!(content.contains("info: client started"));
}

#[test]
fn log_rejects_unknown_level() {
    let temp = tempfile::tempdir().unwrap();

    kiroku(temp.path())
        .args(["log", "loud", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown log level"));
}
