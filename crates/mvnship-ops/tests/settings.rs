use std::fs;

use mvnship_ops::ops_settings::{write, SettingsOptions};
use tempfile::TempDir;

fn options(output: &str, force: bool) -> SettingsOptions {
    SettingsOptions {
        output: Some(output.into()),
        force,
        stdout: false,
    }
}

#[test]
fn test_settings_written_relative_to_cwd() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".mvnship.toml"),
        "[gpg]\nkey-id = \"ABCD1234\"\n",
    )
    .unwrap();

    write(tmp.path(), &options("out/settings.xml", false)).unwrap();

    let xml = fs::read_to_string(tmp.path().join("out/settings.xml")).unwrap();
    assert!(xml.contains("<id>github</id>"));
    assert!(xml.contains("<id>central</id>"));
    assert!(xml.contains("${env.GITHUB_TOKEN}"));
    assert!(xml.contains("ABCD1234"));
}

#[cfg(unix)]
#[test]
fn test_settings_file_is_private() {
    use std::os::unix::fs::PermissionsExt;
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), &options("settings.xml", false)).unwrap();
    let mode = fs::metadata(tmp.path().join("settings.xml"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_existing_settings_need_force() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.xml");
    fs::write(&path, "<settings/>").unwrap();

    let err = write(tmp.path(), &options("settings.xml", false)).unwrap_err();
    assert!(err.to_string().contains("--force"), "got: {err}");
    assert_eq!(fs::read_to_string(&path).unwrap(), "<settings/>");

    write(tmp.path(), &options("settings.xml", true)).unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("<servers>"));
}

#[test]
fn test_stdout_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let opts = SettingsOptions {
        output: Some("settings.xml".into()),
        force: false,
        stdout: true,
    };
    write(tmp.path(), &opts).unwrap();
    assert!(!tmp.path().join("settings.xml").exists());
}
