#![cfg(unix)]

mod common;

use std::fs;

use common::{maven_project, mvnship_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_doctor_reports_project_and_wrapper() {
    let tmp = maven_project("1.0.0");
    mvnship_cmd()
        .current_dir(tmp.path())
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("mvn      ok"))
        .stdout(predicate::str::contains("mvnw"))
        .stdout(predicate::str::contains("root     "));
}

#[test]
fn test_doctor_accepts_gpg_passphrase_alias() {
    let tmp = maven_project("1.0.0");
    fs::write(tmp.path().join(".mvnship.env"), "GPG_PASSPHRASE=hunter2\n").unwrap();

    mvnship_cmd()
        .current_dir(tmp.path())
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("MAVEN_GPG_PASSPHRASE     set"))
        .stdout(predicate::str::contains("MAVEN_GPG_PASSPHRASE     not set").not());
}

#[test]
fn test_doctor_outside_project_without_maven_fails() {
    let tmp = TempDir::new().unwrap();
    let empty = tmp.path().join("empty-bin");
    fs::create_dir(&empty).unwrap();

    mvnship_cmd()
        .current_dir(tmp.path())
        .env("PATH", &empty)
        .arg("doctor")
        .assert()
        .failure()
        .stdout(predicate::str::contains("no pom.xml"))
        .stderr(predicate::str::contains("`mvn` was not found"));
}
