//! Well-known credential variables and the secrets pushed to GitHub.

use crate::properties::Environment;

pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
pub const GITHUB_ACTOR: &str = "GITHUB_ACTOR";
pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const CENTRAL_USERNAME: &str = "MAVEN_CENTRAL_USERNAME";
pub const CENTRAL_PASSWORD: &str = "MAVEN_CENTRAL_PASSWORD";
pub const GPG_PASSPHRASE: &str = "MAVEN_GPG_PASSPHRASE";
pub const GPG_PASSPHRASE_ALIAS: &str = "GPG_PASSPHRASE";

/// Name of the repository secret holding the signing passphrase.
pub const GPG_PASSPHRASE_SECRET: &str = "GPG_PASSPHRASE";

/// Name of the repository secret holding the ASCII-armored signing key.
pub const GPG_PRIVATE_KEY_SECRET: &str = "GPG_PRIVATE_KEY";

/// Username/password pair for a Maven server.
#[derive(Clone, PartialEq, Eq)]
pub struct ServerCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for ServerCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerCredentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

impl ServerCredentials {
    /// Central Portal user token from `MAVEN_CENTRAL_USERNAME`/`MAVEN_CENTRAL_PASSWORD`.
    pub fn central(env: &Environment) -> Option<Self> {
        Some(Self {
            username: env.get(CENTRAL_USERNAME)?,
            password: env.get(CENTRAL_PASSWORD)?,
        })
    }

    /// GitHub Packages credentials from `GITHUB_ACTOR`/`GITHUB_TOKEN`.
    pub fn github(env: &Environment) -> Option<Self> {
        Some(Self {
            username: env.get(GITHUB_ACTOR)?,
            password: env.get(GITHUB_TOKEN)?,
        })
    }
}

/// The signing passphrase, under either of its usual names.
pub fn gpg_passphrase(env: &Environment) -> Option<String> {
    env.get_any(&[GPG_PASSPHRASE, GPG_PASSPHRASE_ALIAS])
}

/// Mask all but the last few characters of a secret for display.
pub fn mask(value: &str) -> String {
    let visible = 4;
    let count = value.chars().count();
    if count <= visible * 2 {
        return "********".to_string();
    }
    let tail: String = value.chars().skip(count - visible).collect();
    format!("********{tail}")
}
