use std::collections::BTreeMap;

use mvnship_core::config::{ProjectConfig, CENTRAL_SNAPSHOTS_URL};

#[test]
fn test_defaults_from_empty_toml() {
    let config = ProjectConfig::parse_toml("", &BTreeMap::new()).unwrap();
    assert_eq!(config.maven.command, "mvn");
    assert!(config.maven.auto_wrapper);
    assert!(config.maven.args.is_empty());
    assert_eq!(config.github.server_id, "github");
    assert!(config.github.repository.is_none());
    assert_eq!(config.central.server_id, "central");
    assert_eq!(config.central.profile, "release");
    assert!(!config.central.snapshots);
    assert_eq!(config.central.snapshot_url, CENTRAL_SNAPSHOTS_URL);
    assert!(config.gpg.key_id.is_none());
}

#[test]
fn test_full_config() {
    let toml = r#"
[maven]
command = "mvn3"
auto-wrapper = false
settings = "ci/settings.xml"
args = ["-ntp", "-T", "1C"]
skip-tests = true

[github]
repository = "acme/widgets"
server-id = "gh-packages"

[central]
server-id = "ossrh"
profile = "sign"
snapshots = true

[gpg]
key-id = "ABCDEF0123456789"
"#;
    let config = ProjectConfig::parse_toml(toml, &BTreeMap::new()).unwrap();
    assert_eq!(config.maven.command, "mvn3");
    assert!(!config.maven.auto_wrapper);
    assert_eq!(config.maven.settings.as_deref(), Some("ci/settings.xml"));
    assert_eq!(config.maven.args, vec!["-ntp", "-T", "1C"]);
    assert!(config.maven.skip_tests);
    assert_eq!(config.github.repository.as_deref(), Some("acme/widgets"));
    assert_eq!(config.github.server_id, "gh-packages");
    assert_eq!(config.central.server_id, "ossrh");
    assert_eq!(config.central.profile, "sign");
    assert!(config.central.snapshots);
    assert_eq!(config.gpg.key_id.as_deref(), Some("ABCDEF0123456789"));
}

#[test]
fn test_env_interpolation() {
    let mut env = BTreeMap::new();
    env.insert("SIGNING_KEY".to_string(), "0011223344556677".to_string());
    let toml = r#"
[gpg]
key-id = "${env:SIGNING_KEY}"
"#;
    let config = ProjectConfig::parse_toml(toml, &env).unwrap();
    assert_eq!(config.gpg.key_id.as_deref(), Some("0011223344556677"));
}

#[test]
fn test_unset_interpolation_becomes_none() {
    let toml = r#"
[github]
repository = "${env:MVNSHIP_TEST_SURELY_UNSET_REPO}"
"#;
    let config = ProjectConfig::parse_toml(toml, &BTreeMap::new()).unwrap();
    assert!(config.github.repository.is_none());
}

#[test]
fn test_unknown_section_is_rejected() {
    let err = ProjectConfig::parse_toml("[deploy]\nx = 1\n", &BTreeMap::new()).unwrap_err();
    assert!(err.to_string().contains("Config error"), "got: {err}");
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let tmp = tempfile::TempDir::new().unwrap();
    let config = ProjectConfig::load(&tmp.path().join(".mvnship.toml"), &BTreeMap::new()).unwrap();
    assert_eq!(config.maven.command, "mvn");
}
