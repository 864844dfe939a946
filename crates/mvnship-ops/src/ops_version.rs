//! Detecting and reporting the project version.

use std::path::Path;

use miette::Result;
use serde::Serialize;

use mvnship_core::project::Project;
use mvnship_core::version::{ProjectVersion, VersionKind};
use mvnship_maven::pom::{self, Coordinate};
use mvnship_toolchain::discovery;
use mvnship_toolchain::mvn::Maven;
use mvnship_util::errors::ShipError;
use mvnship_util::progress;

/// Where a detected version came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionSource {
    /// `mvn help:evaluate`.
    Maven,
    /// Read straight from `pom.xml` because Maven could not be asked.
    Pom,
    /// Given on the command line.
    Flag,
}

/// Maven for `project`, honouring the wrapper, settings and extra args.
pub fn maven_for(project: &Project) -> Result<Maven> {
    let tool = discovery::maven(&project.root, &project.config.maven)?;
    Ok(Maven::new(tool, &project.root)
        .with_settings(project.settings_path())
        .with_args(project.config.maven.args.clone()))
}

/// Ask Maven for the version, falling back to reading `pom.xml`.
pub fn detect_version(
    project: &Project,
    maven: Option<&Maven>,
) -> Result<(ProjectVersion, VersionSource)> {
    if let Some(mvn) = maven {
        match mvn.evaluate_version() {
            Ok(raw) => return Ok((ProjectVersion::parse(&raw)?, VersionSource::Maven)),
            Err(e) => {
                tracing::warn!("mvn help:evaluate failed: {e}");
                progress::status_warn("Fallback", "reading the version from pom.xml");
            }
        }
    }
    let raw = pom::read_pom(&project.pom_path())?
        .effective_version()
        .ok_or_else(|| ShipError::Project {
            message: "pom.xml declares no <version>".to_string(),
        })?;
    Ok((ProjectVersion::parse(&raw)?, VersionSource::Pom))
}

/// The project's coordinate with `version` substituted.
pub fn coordinate(project: &Project, version: &ProjectVersion) -> Result<Coordinate> {
    let mut pom = pom::read_pom(&project.pom_path())?;
    pom.version = Some(version.to_string());
    Ok(pom.coordinate()?)
}

#[derive(Serialize)]
struct VersionReport<'a> {
    version: &'a str,
    kind: VersionKind,
    source: VersionSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    coordinate: Option<String>,
}

/// `mvnship version`.
pub fn show(cwd: &Path, json: bool) -> Result<()> {
    let project = Project::discover(cwd)?;
    let maven = match maven_for(&project) {
        Ok(m) => Some(m),
        Err(e) => {
            tracing::warn!("{e}");
            None
        }
    };
    let (version, source) = detect_version(&project, maven.as_ref())?;
    let coordinate = coordinate(&project, &version).ok().map(|c| c.to_string());

    if json {
        let report = VersionReport {
            version: version.as_str(),
            kind: version.kind(),
            source,
            coordinate,
        };
        let out = serde_json::to_string_pretty(&report).map_err(|e| ShipError::Generic {
            message: format!("Failed to serialize version report: {e}"),
        })?;
        println!("{out}");
    } else {
        println!("{version} ({})", version.kind());
        if let Some(c) = coordinate {
            println!("  {c}");
        }
    }
    Ok(())
}
