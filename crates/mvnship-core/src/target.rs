//! Deployment targets and which versions each one accepts.

use std::fmt;
use std::str::FromStr;

use mvnship_util::errors::ShipError;

use crate::version::{ProjectVersion, VersionKind};

/// Names accepted on the command line, in the order they are listed in errors.
pub const TARGET_NAMES: &[&str] = &["github", "central", "local"];

/// Where a build gets deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeployTarget {
    /// `https://maven.pkg.github.com/<owner>/<repo>`.
    GithubPackages,
    /// Maven Central through the Sonatype Central Portal.
    MavenCentral,
    /// The local `~/.m2/repository` (`mvn install`).
    Local,
}

impl DeployTarget {
    /// Canonical short name.
    pub fn name(self) -> &'static str {
        match self {
            Self::GithubPackages => "github",
            Self::MavenCentral => "central",
            Self::Local => "local",
        }
    }

    /// Human readable registry name for status lines.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::GithubPackages => "GitHub Packages",
            Self::MavenCentral => "Maven Central",
            Self::Local => "local repository",
        }
    }

    /// The Maven lifecycle phase that publishes to this target.
    pub fn maven_goal(self) -> &'static str {
        match self {
            Self::Local => "install",
            Self::GithubPackages | Self::MavenCentral => "deploy",
        }
    }

    pub fn is_remote(self) -> bool {
        self != Self::Local
    }

    /// Central requires signed artifacts for releases.
    pub fn needs_signing(self, kind: VersionKind) -> bool {
        self == Self::MavenCentral && kind == VersionKind::Release
    }

    /// Reject version/target combinations the registry would refuse.
    ///
    /// `central_snapshots` reflects `central.snapshots` in the project config.
    pub fn check_version(
        self,
        version: &ProjectVersion,
        central_snapshots: bool,
    ) -> Result<(), ShipError> {
        if self == Self::MavenCentral && version.is_snapshot() && !central_snapshots {
            return Err(ShipError::Target {
                message: format!(
                    "{version} is a SNAPSHOT and Maven Central only accepts releases. \
                     Deploy it to `github` instead, release it as {}, \
                     or set `central.snapshots = true` in .mvnship.toml",
                    version.release_of()
                ),
            });
        }
        Ok(())
    }
}

impl fmt::Display for DeployTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeployTarget {
    type Err = ShipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "github" | "github-packages" | "gh" => Ok(Self::GithubPackages),
            "central" | "maven-central" | "sonatype" => Ok(Self::MavenCentral),
            "local" | "install" => Ok(Self::Local),
            other => Err(ShipError::Target {
                message: format!(
                    "unknown target '{other}' (expected one of: {})",
                    TARGET_NAMES.join(", ")
                ),
            }),
        }
    }
}
