use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn habitz(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("habitz").unwrap();
    cmd.env("HABITZ_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("HABITZ_LOG");
    cmd
}

/// Start from an empty list instead of the samples.
fn empty_home() -> TempDir {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("habits.json"), "[]").unwrap();
    home
}

#[test]
fn fresh_install_lists_samples() {
    let home = TempDir::new().unwrap();
    habitz(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading"))
        .stdout(predicate::str::contains("Drink Water"))
        .stdout(predicate::str::contains("1 of 4 habits completed (25%)"));
}

#[test]
fn empty_list_and_no_match_are_different_messages() {
    let home = empty_home();
    habitz(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No habits yet!"));

    habitz(&home).args(["add", "Stretch"]).assert().success();

    habitz(&home)
        .args(["list", "--search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No habits match your current filters."))
        .stdout(predicate::str::contains("No habits yet!").not());
}

#[test]
fn add_joins_words_and_rejects_blank_names() {
    let home = empty_home();
    habitz(&home)
        .args(["add", "Drink", "Water"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Habit added: Drink Water"));

    habitz(&home)
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Habit name cannot be empty"));

    habitz(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 of 1 habit completed (0%)"));
}

#[test]
fn toggle_by_position_then_filter() {
    let home = empty_home();
    habitz(&home).args(["add", "Reading"]).assert().success();

    habitz(&home)
        .args(["toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Habit completed: Reading"));

    habitz(&home)
        .args(["list", "-f", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading"))
        .stdout(predicate::str::contains("1 of 1 habit completed (100%)"));

    habitz(&home)
        .args(["list", "-f", "pending"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No habits match your current filters."));
}

#[test]
fn searched_listing_numbers_match_toggle() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("habits.json"),
        r#"[{"id":1,"name":"Reading","completed":false,"createdAt":100},
            {"id":2,"name":"Exercise","completed":false,"createdAt":200}]"#,
    )
    .unwrap();

    // Newest first numbers Exercise 1 and Reading 2, with or without a search.
    habitz(&home)
        .args(["list", "--search", "read"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2. ○ Reading"))
        .stdout(predicate::str::contains("Exercise").not());

    habitz(&home)
        .args(["toggle", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Habit completed: Reading"));
}

#[test]
fn remove_asks_for_confirmation() {
    let home = empty_home();
    habitz(&home).args(["add", "Reading"]).assert().success();

    habitz(&home)
        .args(["remove", "Reading"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));

    habitz(&home)
        .args(["remove", "reading"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Habit removed: Reading"));

    habitz(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No habits yet!"));
}

#[test]
fn stale_id_is_not_an_error() {
    let home = empty_home();
    habitz(&home)
        .args(["toggle", "#12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to toggle"));

    habitz(&home)
        .args(["remove", "--yes", "#12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to remove"));
}

#[test]
fn clear_removes_only_completed() {
    let home = TempDir::new().unwrap();

    habitz(&home)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 1 completed habit."));

    habitz(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercise").not())
        .stdout(predicate::str::contains("0 of 3 habits completed (0%)"));

    habitz(&home)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No completed habits to clear."));
}

#[test]
fn config_default_sort_changes_listing_order() {
    let home = empty_home();
    habitz(&home).args(["add", "Zumba"]).assert().success();
    habitz(&home).args(["add", "Archery"]).assert().success();

    habitz(&home)
        .args(["config", "default-sort", "alphabetical"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default-sort set to alphabetical"));

    habitz(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)1\. .*Archery.*2\. .*Zumba").unwrap());

    habitz(&home)
        .args(["config", "default-sort", "sideways"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown sort mode: sideways"));
}
