use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn task_tracker(dir: &assert_fs::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("task-tracker").unwrap();
    cmd.arg("--dir").arg(dir.path());
    cmd
}

#[test]
fn add_prints_confirmation_and_persists_both_resources() {
    let dir = assert_fs::TempDir::new().unwrap();

    task_tracker(&dir)
        .args(["add", "Buy milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task added successfully (ID: 1)"));

    dir.child("tasks.json")
        .assert(predicate::str::contains("\"Buy milk\""));
    dir.child("id.txt").assert("1");
}

#[test]
fn state_carries_over_between_invocations() {
    let dir = assert_fs::TempDir::new().unwrap();

    task_tracker(&dir).args(["add", "Buy milk"]).assert().success();
    task_tracker(&dir)
        .args(["add", "Wash car"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 2)"));

    task_tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk").and(predicate::str::contains("Wash car")));
}

#[test]
fn deleting_a_missing_task_fails_with_a_message() {
    let dir = assert_fs::TempDir::new().unwrap();

    task_tracker(&dir)
        .args(["delete", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no task found with ID 3"));
}

#[test]
fn updating_a_missing_task_fails_with_a_message() {
    let dir = assert_fs::TempDir::new().unwrap();

    task_tracker(&dir)
        .args(["update", "9", "New description"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no task found with ID 9"));
}

#[test]
fn marking_accepts_only_in_progress_and_done() {
    let dir = assert_fs::TempDir::new().unwrap();
    task_tracker(&dir).args(["add", "Buy milk"]).assert().success();

    task_tracker(&dir)
        .args(["mark", "1", "todo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));

    task_tracker(&dir)
        .args(["mark", "1", "in-progress"])
        .assert()
        .success();

    task_tracker(&dir)
        .args(["list", "in-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"));
}

#[test]
fn list_filters_out_non_matching_tasks() {
    let dir = assert_fs::TempDir::new().unwrap();
    task_tracker(&dir).args(["add", "Buy milk"]).assert().success();
    task_tracker(&dir).args(["add", "Wash car"]).assert().success();
    task_tracker(&dir).args(["mark", "2", "done"]).assert().success();

    task_tracker(&dir)
        .args(["list", "done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wash car").and(predicate::str::contains("Buy milk").not()));

    task_tracker(&dir)
        .args(["list", "todo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk").and(predicate::str::contains("Wash car").not()));
}

#[test]
fn listing_an_empty_store_reports_no_items() {
    let dir = assert_fs::TempDir::new().unwrap();

    task_tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No items to display."));
}

#[test]
fn delete_then_list_shows_only_remaining_tasks() {
    let dir = assert_fs::TempDir::new().unwrap();
    task_tracker(&dir).args(["add", "Buy milk"]).assert().success();
    task_tracker(&dir).args(["add", "Wash car"]).assert().success();
    task_tracker(&dir).args(["delete", "1"]).assert().success();

    task_tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wash car").and(predicate::str::contains("Buy milk").not()));

    // The deleted id stays burned.
    task_tracker(&dir)
        .args(["add", "Walk dog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 3)"));
}

#[test]
fn update_changes_the_stored_description() {
    let dir = assert_fs::TempDir::new().unwrap();
    task_tracker(&dir).args(["add", "Buy milk"]).assert().success();

    task_tracker(&dir)
        .args(["update", "1", "Buy oat milk"])
        .assert()
        .success();

    task_tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy oat milk"));
}
