mod common;

use std::fs;

use common::mvnship_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_env_empty_project_shows_no_entries() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("pom.xml"), "<project/>").unwrap();

    mvnship_cmd()
        .current_dir(tmp.path())
        .arg("env")
        .assert()
        .success()
        .stdout(predicate::str::contains("No environment variables configured."));
}

#[test]
fn test_env_shows_entries_masked() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("pom.xml"), "<project/>").unwrap();
    fs::write(
        tmp.path().join(".mvnship.env"),
        "MAVEN_CENTRAL_PASSWORD=abcdefgh1234\nGITHUB_TOKEN=short\n",
    )
    .unwrap();

    mvnship_cmd()
        .current_dir(tmp.path())
        .arg("env")
        .assert()
        .success()
        .stdout(predicate::str::contains(".mvnship.env (2 entries):"))
        .stdout(predicate::str::contains("MAVEN_CENTRAL_PASSWORD = ********1234"))
        .stdout(predicate::str::contains("GITHUB_TOKEN = *****"))
        .stdout(predicate::str::contains("abcdefgh").not());
}

#[test]
fn test_env_reveal_shows_values() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("pom.xml"), "<project/>").unwrap();
    fs::write(tmp.path().join(".mvnship.env"), "GITHUB_TOKEN=ghp_visible\n").unwrap();

    mvnship_cmd()
        .current_dir(tmp.path())
        .args(["env", "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GITHUB_TOKEN = ghp_visible"));
}
