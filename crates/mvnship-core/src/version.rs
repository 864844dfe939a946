//! Maven project versions and the SNAPSHOT/RELEASE split.

use std::fmt;
use std::str::FromStr;

use mvnship_util::errors::ShipError;
use semver::{Prerelease, Version};
use serde::Serialize;

const SNAPSHOT: &str = "SNAPSHOT";

/// Whether a version is a mutable pre-release build or an immutable release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionKind {
    Snapshot,
    Release,
}

impl fmt::Display for VersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Snapshot => f.write_str("SNAPSHOT"),
            Self::Release => f.write_str("RELEASE"),
        }
    }
}

/// A validated project version backed by semver.
///
/// The original text is kept so it can be handed back to Maven unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectVersion {
    raw: String,
    version: Version,
}

impl ProjectVersion {
    /// Validate a version string such as `1.4.0` or `1.4.0-SNAPSHOT`.
    pub fn parse(input: &str) -> Result<Self, ShipError> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(ShipError::Version {
                message: "version is empty".to_string(),
            });
        }
        if raw.starts_with(['v', 'V']) {
            return Err(ShipError::Version {
                message: format!("'{raw}' has a leading 'v'; use '{}'", &raw[1..]),
            });
        }
        let version = Version::parse(raw).map_err(|e| ShipError::Version {
            message: format!("'{raw}' is not MAJOR.MINOR.PATCH[-qualifier]: {e}"),
        })?;
        Ok(Self {
            raw: raw.to_string(),
            version,
        })
    }

    pub fn kind(&self) -> VersionKind {
        let pre = self.version.pre.as_str();
        let snapshot = pre == SNAPSHOT
            || pre.ends_with(&format!("-{SNAPSHOT}"))
            || pre.ends_with(&format!(".{SNAPSHOT}"));
        if snapshot {
            VersionKind::Snapshot
        } else {
            VersionKind::Release
        }
    }

    pub fn is_snapshot(&self) -> bool {
        self.kind() == VersionKind::Snapshot
    }

    /// The release this snapshot leads up to (`1.2.0-SNAPSHOT` -> `1.2.0`).
    /// A release version is returned unchanged.
    pub fn release_of(&self) -> Self {
        if !self.is_snapshot() {
            return self.clone();
        }
        let pre = self.version.pre.as_str();
        let stripped = pre
            .strip_suffix(SNAPSHOT)
            .unwrap_or(pre)
            .trim_end_matches(['-', '.']);
        let mut version = self.version.clone();
        version.pre = Prerelease::new(stripped).unwrap_or(Prerelease::EMPTY);
        Self {
            raw: version.to_string(),
            version,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ProjectVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ProjectVersion {
    type Err = ShipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
