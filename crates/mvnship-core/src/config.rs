use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use mvnship_util::errors::ShipError;

use crate::properties::interpolate;

/// Default snapshot repository of the Sonatype Central Portal.
pub const CENTRAL_SNAPSHOTS_URL: &str =
    "https://central.sonatype.com/repository/maven-snapshots/";

/// Per-project configuration loaded from `.mvnship.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub maven: MavenConfig,

    #[serde(default)]
    pub github: GithubConfig,

    #[serde(default)]
    pub central: CentralConfig,

    #[serde(default)]
    pub gpg: GpgConfig,
}

/// How Maven is invoked, from `[maven]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MavenConfig {
    #[serde(default = "default_mvn")]
    pub command: String,
    /// Use an executable `./mvnw` in the project root when present.
    #[serde(default = "default_true")]
    pub auto_wrapper: bool,
    /// Passed to Maven as `-s <settings>`.
    #[serde(default)]
    pub settings: Option<String>,
    /// Extra arguments for every Maven invocation.
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub skip_tests: bool,
}

impl Default for MavenConfig {
    fn default() -> Self {
        Self {
            command: default_mvn(),
            auto_wrapper: true,
            settings: None,
            args: Vec::new(),
            skip_tests: false,
        }
    }
}

fn default_mvn() -> String {
    "mvn".to_string()
}

fn default_true() -> bool {
    true
}

/// GitHub repository and Packages server, from `[github]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GithubConfig {
    /// `owner/repo`; also the default for `secrets`.
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default = "default_github_server")]
    pub server_id: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            repository: None,
            server_id: default_github_server(),
        }
    }
}

fn default_github_server() -> String {
    "github".to_string()
}

/// Maven Central settings, from `[central]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CentralConfig {
    #[serde(default = "default_central_server")]
    pub server_id: String,
    /// Maven profile activated for signed releases.
    #[serde(default = "default_release_profile")]
    pub profile: String,
    /// Allow SNAPSHOT deploys to the Central snapshot repository.
    #[serde(default)]
    pub snapshots: bool,
    #[serde(default = "default_snapshot_url")]
    pub snapshot_url: String,
}

impl Default for CentralConfig {
    fn default() -> Self {
        Self {
            server_id: default_central_server(),
            profile: default_release_profile(),
            snapshots: false,
            snapshot_url: default_snapshot_url(),
        }
    }
}

fn default_central_server() -> String {
    "central".to_string()
}

fn default_release_profile() -> String {
    "release".to_string()
}

fn default_snapshot_url() -> String {
    CENTRAL_SNAPSHOTS_URL.to_string()
}

/// Signing key, from `[gpg]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GpgConfig {
    #[serde(default)]
    pub key_id: Option<String>,
}

impl ProjectConfig {
    /// Parse a config document and resolve `${env:VAR}` references.
    pub fn parse_toml(content: &str, env: &BTreeMap<String, String>) -> miette::Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(|e| ShipError::Config {
            message: e.to_string(),
        })?;
        config.interpolate(env);
        Ok(config)
    }

    /// Load `path`, or return defaults if the file doesn't exist.
    pub fn load(path: &Path, env: &BTreeMap<String, String>) -> miette::Result<Self> {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no project config, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| ShipError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse_toml(&content, env)
    }

    fn interpolate(&mut self, env: &BTreeMap<String, String>) {
        let resolve = |s: &mut String| *s = interpolate(s, env);
        resolve(&mut self.maven.command);
        self.maven.settings.iter_mut().for_each(resolve);
        self.maven.args.iter_mut().for_each(resolve);
        self.github.repository.iter_mut().for_each(resolve);
        resolve(&mut self.central.snapshot_url);
        self.gpg.key_id.iter_mut().for_each(resolve);

        // A reference to an unset variable leaves an empty string behind.
        self.github.repository = self.github.repository.take().filter(|s| !s.is_empty());
        self.gpg.key_id = self.gpg.key_id.take().filter(|s| !s.is_empty());
        self.maven.settings = self.maven.settings.take().filter(|s| !s.is_empty());
    }
}
