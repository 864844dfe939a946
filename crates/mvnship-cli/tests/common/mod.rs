#![allow(dead_code)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

#[allow(deprecated)]
pub fn mvnship_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mvnship").unwrap();
    for var in [
        "GITHUB_REPOSITORY",
        "GITHUB_ACTOR",
        "GITHUB_TOKEN",
        "MAVEN_CENTRAL_USERNAME",
        "MAVEN_CENTRAL_PASSWORD",
        "MAVEN_GPG_PASSPHRASE",
        "GPG_PASSPHRASE",
        "MVNSHIP_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// A Maven project whose `./mvnw` answers `help:evaluate` with `version`
/// and appends every other invocation to `mvn.log`.
pub fn maven_project(version: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(
        root.join("pom.xml"),
        format!(
            "<project>\n  <groupId>org.acme</groupId>\n  <artifactId>widgets</artifactId>\n  \
             <version>{version}</version>\n</project>\n"
        ),
    )
    .unwrap();
    write_script(
        &root.join("mvnw"),
        &format!(
            "case \"$*\" in\n  *help:evaluate*) echo '{version}' ;;\n  \
             *) echo \"$@\" >> \"$(dirname \"$0\")/mvn.log\" ;;\nesac"
        ),
    );
    tmp
}

pub fn write_script(path: &Path, body: &str) {
    fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }
}

pub fn mvn_log(root: &Path) -> String {
    fs::read_to_string(root.join("mvn.log")).unwrap_or_default()
}
