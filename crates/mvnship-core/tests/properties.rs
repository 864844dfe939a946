use std::collections::BTreeMap;

use mvnship_core::credentials::{gpg_passphrase, mask, ServerCredentials};
use mvnship_core::properties::{interpolate, load_env_file, Environment};

#[test]
fn test_load_env_file_formats() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join(".mvnship.env");
    std::fs::write(
        &path,
        "# deployment secrets\n\
         MAVEN_CENTRAL_USERNAME=alice\n\
         export MAVEN_CENTRAL_PASSWORD=\"p@ss word\"\n\
         \n\
         MAVEN_GPG_PASSPHRASE='quoted'\n\
         not a pair\n",
    )
    .unwrap();
    let map = load_env_file(&path).unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map["MAVEN_CENTRAL_USERNAME"], "alice");
    assert_eq!(map["MAVEN_CENTRAL_PASSWORD"], "p@ss word");
    assert_eq!(map["MAVEN_GPG_PASSPHRASE"], "quoted");
}

#[test]
fn test_load_env_file_missing_is_empty() {
    let tmp = tempfile::TempDir::new().unwrap();
    let map = load_env_file(&tmp.path().join("nope.env")).unwrap();
    assert!(map.is_empty());
}

#[test]
fn test_interpolate_prefers_overrides() {
    let mut env = BTreeMap::new();
    env.insert("MVNSHIP_TEST_OWNER".to_string(), "acme".to_string());
    assert_eq!(
        interpolate("${env:MVNSHIP_TEST_OWNER}/widgets", &env),
        "acme/widgets"
    );
}

#[test]
fn test_interpolate_unterminated_is_left_alone() {
    assert_eq!(interpolate("${env:OOPS", &BTreeMap::new()), "${env:OOPS");
}

#[test]
fn test_interpolate_does_not_expand_substituted_values() {
    let mut env = BTreeMap::new();
    env.insert("MVNSHIP_TEST_SELF".to_string(), "${env:MVNSHIP_TEST_SELF}".to_string());
    env.insert("MVNSHIP_TEST_A".to_string(), "${env:MVNSHIP_TEST_B}".to_string());
    env.insert("MVNSHIP_TEST_B".to_string(), "${env:MVNSHIP_TEST_A}".to_string());

    assert_eq!(
        interpolate("${env:MVNSHIP_TEST_SELF}", &env),
        "${env:MVNSHIP_TEST_SELF}"
    );
    assert_eq!(
        interpolate("${env:MVNSHIP_TEST_A}-${env:MVNSHIP_TEST_B}", &env),
        "${env:MVNSHIP_TEST_B}-${env:MVNSHIP_TEST_A}"
    );
}

#[test]
fn test_environment_empty_values_are_unset() {
    let mut file = BTreeMap::new();
    file.insert("MVNSHIP_TEST_EMPTY".to_string(), String::new());
    let env = Environment::new(file);
    assert_eq!(env.get("MVNSHIP_TEST_EMPTY"), None);
}

#[test]
fn test_central_credentials_need_both() {
    let mut file = BTreeMap::new();
    file.insert("MAVEN_CENTRAL_USERNAME".to_string(), "alice".to_string());
    let partial = Environment::new(file.clone());
    if std::env::var("MAVEN_CENTRAL_PASSWORD").is_err() {
        assert!(ServerCredentials::central(&partial).is_none());
    }

    file.insert("MAVEN_CENTRAL_PASSWORD".to_string(), "secret".to_string());
    let full = Environment::new(file);
    let creds = ServerCredentials::central(&full).unwrap();
    assert_eq!(creds.username, "alice");
    assert!(!format!("{creds:?}").contains("secret"));
}

#[test]
fn test_gpg_passphrase_alias() {
    let mut file = BTreeMap::new();
    file.insert("GPG_PASSPHRASE".to_string(), "from-alias".to_string());
    let env = Environment::new(file);
    if std::env::var("MAVEN_GPG_PASSPHRASE").is_err() {
        assert_eq!(gpg_passphrase(&env).as_deref(), Some("from-alias"));
    }
}

#[test]
fn test_mask() {
    assert_eq!(mask("short"), "********");
    assert_eq!(mask("ghp_abcdefghijklmnop"), "********mnop");
}
