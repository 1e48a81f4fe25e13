#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary command isolated from the developer's own configuration.
pub fn th(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("teamhours");
    cmd.env("TEAMHOURS_HOME", home_dir(name))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Per-test configuration directory inside the system temp dir
pub fn home_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_teamhours_home", name));
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_teamhours.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    fs::remove_dir_all(home_dir(name)).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB for `name` and return its path.
pub fn init_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    th(name)
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

/// Initialize DB and add a small dataset for `user`:
/// two office days in September 2025 and one trip with travel time.
pub fn init_db_with_data(name: &str, user: &str) -> String {
    let db_path = init_db(name);

    for args in [
        vec!["2025-09-01", "--in", "09:00", "--out", "17:00", "--pause", "30"],
        vec!["2025-09-15", "--in", "09:00", "--out", "17:00", "--pause", "30"],
        vec![
            "2025-09-16", "--in", "10:00", "--out", "16:00", "--pos", "C", "--driver", "2",
            "--passenger", "1",
        ],
    ] {
        th(name)
            .args(["--db", &db_path, "--user", user, "add"])
            .args(args)
            .assert()
            .success();
    }

    db_path
}
