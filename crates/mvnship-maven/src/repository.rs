//! Remote Maven repositories: URL layout and the registries mvnship deploys to.

use mvnship_core::credentials::ServerCredentials;
use mvnship_util::errors::ShipError;

use crate::pom::Coordinate;

/// Maven Central base URL (where released artifacts become visible).
pub const MAVEN_CENTRAL_URL: &str = "https://repo.maven.apache.org/maven2";

/// GitHub Packages Maven endpoint; the repository path is appended.
pub const GITHUB_PACKAGES_URL: &str = "https://maven.pkg.github.com";

/// A Maven repository with optional credentials.
#[derive(Debug, Clone)]
pub struct MavenRepository {
    pub name: String,
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl MavenRepository {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.trim_end_matches('/').to_string(),
            username: None,
            password: None,
        }
    }

    /// Construct the Maven Central read repository.
    pub fn maven_central() -> Self {
        Self::new("maven-central", MAVEN_CENTRAL_URL)
    }

    /// The GitHub Packages repository of `owner/repo`.
    pub fn github_packages(owner_repo: &str) -> Result<Self, ShipError> {
        let (owner, repo) = split_owner_repo(owner_repo)?;
        Ok(Self::new(
            "github",
            &format!("{GITHUB_PACKAGES_URL}/{owner}/{repo}"),
        ))
    }

    /// Attach credentials if there are any.
    pub fn with_credentials(mut self, credentials: Option<ServerCredentials>) -> Self {
        if let Some(c) = credentials {
            self.username = Some(c.username);
            self.password = Some(c.password);
        }
        self
    }

    /// Standard Maven layout path for a given coordinate.
    ///
    /// `org.example:my-lib:1.0.0` becomes `org/example/my-lib/1.0.0`
    pub fn coordinate_path(group: &str, artifact: &str, version: &str) -> String {
        format!("{}/{}/{}", group.replace('.', "/"), artifact, version)
    }

    /// URL to the POM file for a given coordinate.
    pub fn pom_url(&self, coord: &Coordinate) -> String {
        format!(
            "{}/{}/{}-{}.pom",
            self.url,
            Self::coordinate_path(&coord.group_id, &coord.artifact_id, &coord.version),
            coord.artifact_id,
            coord.version
        )
    }

    /// The `-DaltDeploymentRepository` value for this repository.
    pub fn alt_deployment(&self, server_id: &str) -> String {
        format!("{server_id}::{}", self.url)
    }

    /// Whether this repository has authentication configured.
    pub fn has_auth(&self) -> bool {
        self.username.is_some() || self.password.is_some()
    }
}

/// Validate and split `owner/repo`.
pub fn split_owner_repo(owner_repo: &str) -> Result<(&str, &str), ShipError> {
    let valid_part = |s: &str| {
        !s.is_empty()
            && s
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    };
    match owner_repo.trim().split_once('/') {
        Some((owner, repo)) if valid_part(owner) && valid_part(repo) => Ok((owner, repo)),
        _ => Err(ShipError::Target {
            message: format!("'{owner_repo}' is not a GitHub repository (expected owner/repo)"),
        }),
    }
}
