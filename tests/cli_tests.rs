use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, init_db_with_data, th};

#[test]
fn test_init_creates_schema() {
    let db_path = init_db("cli_init");
    assert!(std::path::Path::new(&db_path).exists());

    th("cli_init")
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied").and(contains("init")));
}

#[test]
fn test_add_manual_entry_shows_span_and_hours() {
    let db_path = init_db("cli_add_span");

    th("cli_add_span")
        .args([
            "--db", &db_path, "--user", "ada", "add", "2025-09-03", "--in", "09:30", "--out",
            "12:00",
        ])
        .assert()
        .success()
        .stdout(contains("09:30–12:00").and(contains("2.50 h")));

    th("cli_add_span")
        .args(["--db", &db_path, "--user", "ada", "list", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(contains("09:30–12:00").and(contains("2.50")));
}

#[test]
fn test_add_rejects_end_before_start() {
    let db_path = init_db("cli_add_invalid");

    th("cli_add_invalid")
        .args([
            "--db", &db_path, "--user", "ada", "add", "2025-09-03", "--in", "12:00", "--out",
            "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("END must be later than START"));
}

#[test]
fn test_add_rejects_negative_travel() {
    let db_path = init_db("cli_add_negative_travel");

    th("cli_add_negative_travel")
        .args([
            "--db", &db_path, "--user", "ada", "add", "2025-09-03", "--in", "09:00", "--out",
            "12:00", "--driver=-1",
        ])
        .assert()
        .failure()
        .stderr(contains("driver hours"));
}

#[test]
fn test_add_rejects_invalid_location() {
    let db_path = init_db("cli_add_bad_pos");

    th("cli_add_bad_pos")
        .args([
            "--db", &db_path, "--user", "ada", "add", "2025-09-03", "--in", "09:00", "--pos", "X",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid location code"));
}

#[test]
fn test_special_entry_uses_current_work_hours() {
    let db_path = init_db("cli_pto");

    th("cli_pto")
        .args(["--db", &db_path, "--user", "ada", "settings", "--work-hours", "8.5"])
        .assert()
        .success();

    th("cli_pto")
        .args([
            "--db", &db_path, "--user", "ada", "add", "2025-09-04", "--kind", "pto",
        ])
        .assert()
        .success()
        .stdout(contains("8.50 h"));
}

#[test]
fn test_settings_validation() {
    let db_path = init_db("cli_settings_invalid");

    th("cli_settings_invalid")
        .args(["--db", &db_path, "--user", "ada", "settings", "--work-hours", "11"])
        .assert()
        .failure()
        .stderr(contains("Invalid setting"));

    th("cli_settings_invalid")
        .args(["--db", &db_path, "--user", "ada", "settings", "--show"])
        .assert()
        .success()
        .stdout(contains("7.00 h").and(contains("90.0%")));
}

#[test]
fn test_clock_in_and_out() {
    let db_path = init_db("cli_clock");
    let args = ["--db", &db_path, "--user", "ada"];

    th("cli_clock")
        .args(args)
        .args(["start", "--at", "08:00"])
        .assert()
        .success()
        .stdout(contains("Clocked in"));

    th("cli_clock")
        .args(args)
        .args(["start", "--at", "08:05"])
        .assert()
        .failure()
        .stderr(contains("running entry already exists"));

    th("cli_clock")
        .args(args)
        .args(["stop", "--at", "12:00", "--pause", "15"])
        .assert()
        .success()
        .stdout(contains("08:00–12:00").and(contains("3.75 h")));

    th("cli_clock")
        .args(args)
        .args(["stop", "--at", "13:00"])
        .assert()
        .failure()
        .stderr(contains("No running entry"));
}

#[test]
fn test_edit_and_delete_entry() {
    let db_path = init_db("cli_edit_del");
    let args = ["--db", &db_path, "--user", "ada"];

    th("cli_edit_del")
        .args(args)
        .args(["add", "2025-09-03", "--in", "09:00", "--out", "12:00"])
        .assert()
        .success()
        .stdout(contains("Entry #1"));

    th("cli_edit_del")
        .args(args)
        .args(["edit", "1", "--out", "13:00", "--pause", "30"])
        .assert()
        .success()
        .stdout(contains("09:00–13:00").and(contains("3.50 h")));

    th("cli_edit_del")
        .args(args)
        .args(["del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    th("cli_edit_del")
        .args(args)
        .args(["del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No entry with id 1"));
}

#[test]
fn test_entries_are_scoped_per_user() {
    let db_path = init_db_with_data("cli_scoped", "ada");

    th("cli_scoped")
        .args(["--db", &db_path, "--user", "bob", "list", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(contains("No entries for 2025-09"));
}

#[test]
fn test_month_report_totals() {
    let db_path = init_db_with_data("cli_report", "ada");

    // 7.5 + 7.5 + (6 + 2) + 0.9 passenger
    th("cli_report")
        .args(["--db", &db_path, "--user", "ada", "report", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(
            contains("September 2025")
                .and(contains("23.90 h"))
                .and(contains("154.00 h"))
                .and(contains("-130.10 h")),
        );
}

#[test]
fn test_team_report_flow() {
    let db_path = init_db_with_data("cli_team", "ada");
    let db = ["--db", db_path.as_str()];

    th("cli_team")
        .args(db)
        .args(["team", "create", "ops", "Operations"])
        .assert()
        .success();

    th("cli_team")
        .args(db)
        .args(["team", "create", "ops", "Again"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    th("cli_team")
        .args(db)
        .args(["team", "add-member", "ops", "ada", "--name", "Ada"])
        .assert()
        .success();

    th("cli_team")
        .args(db)
        .args(["team", "add-member", "ops", "bob", "--email", "bob@example.com"])
        .assert()
        .success();

    th("cli_team")
        .args(db)
        .args(["--user", "ada", "publish", "ops", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(contains("3 entries"));

    th("cli_team")
        .args(db)
        .args(["--user", "carol", "publish", "ops", "--month", "2025-09"])
        .assert()
        .failure()
        .stderr(contains("not a member"));

    th("cli_team")
        .args(db)
        .args(["team", "report", "ops", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(
            contains("Ada")
                .and(contains("23.90"))
                .and(contains("bob@example.com"))
                .and(contains("no")),
        );
}

#[test]
fn test_memory_backend_runs_without_database() {
    th("cli_memory")
        .args([
            "--backend", "memory", "--user", "ada", "add", "2025-09-03", "--in", "09:00", "--out",
            "12:00",
        ])
        .assert()
        .success()
        .stdout(contains("3.00 h"));
}

#[test]
fn test_config_check_reports_missing_keys() {
    let _ = common::setup_test_db("cli_config_check");

    th("cli_config_check")
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing keys").and(contains("log_filter")));
}
