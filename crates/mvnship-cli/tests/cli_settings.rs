mod common;

use std::fs;

use common::mvnship_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_settings_stdout() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".mvnship.toml"),
        "[github]\nserver-id = \"gh\"\n",
    )
    .unwrap();

    mvnship_cmd()
        .current_dir(tmp.path())
        .args(["settings", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<settings"))
        .stdout(predicate::str::contains("<id>gh</id>"))
        .stdout(predicate::str::contains("${env.MAVEN_CENTRAL_PASSWORD}"));
}

#[test]
fn test_settings_default_path_under_home() {
    let tmp = TempDir::new().unwrap();
    let home = tmp.path().join("home");

    mvnship_cmd()
        .current_dir(tmp.path())
        .env("HOME", &home)
        .arg("settings")
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote"));

    assert!(home.join(".m2/settings.xml").is_file());

    mvnship_cmd()
        .current_dir(tmp.path())
        .env("HOME", &home)
        .arg("settings")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_settings_stdout_conflicts_with_output() {
    let tmp = TempDir::new().unwrap();
    mvnship_cmd()
        .current_dir(tmp.path())
        .args(["settings", "--stdout", "--output", "x.xml"])
        .assert()
        .failure();
}
