//! `mvnship deploy`: version detection, SNAPSHOT/RELEASE routing, and the
//! Maven run that publishes to the chosen target.

use std::path::Path;
use std::time::Duration;

use miette::Result;

use mvnship_core::credentials::{self, ServerCredentials};
use mvnship_core::project::Project;
use mvnship_core::target::DeployTarget;
use mvnship_core::version::{ProjectVersion, VersionKind};
use mvnship_maven::pom::Coordinate;
use mvnship_maven::repository::MavenRepository;
use mvnship_maven::visibility;
use mvnship_toolchain::mvn::{Invocation, Maven};
use mvnship_util::errors::ShipError;
use mvnship_util::progress;

use crate::ops_version::{self, VersionSource};

/// Options of `mvnship deploy`.
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    pub target: String,
    /// Deploy this version instead of the one in the POM.
    pub version: Option<String>,
    /// `owner/repo` for GitHub Packages.
    pub repository: Option<String>,
    pub skip_tests: bool,
    pub dry_run: bool,
    /// Skip the confirmation for release deploys.
    pub yes: bool,
    /// Seconds to wait for the release to become visible.
    pub wait: Option<u64>,
    /// Passed through to Maven after everything else.
    pub extra_args: Vec<String>,
}

/// Everything decided before Maven runs.
#[derive(Debug, Clone)]
pub struct DeployPlan {
    pub target: DeployTarget,
    pub version: ProjectVersion,
    pub source: VersionSource,
    pub invocation: Invocation,
    /// Where the released artifact can be fetched from afterwards.
    pub visible_in: Option<MavenRepository>,
    pub warnings: Vec<String>,
}

impl DeployPlan {
    pub fn kind(&self) -> VersionKind {
        self.version.kind()
    }
}

/// Decide target, version and Maven switches for a deploy of `project`.
///
/// Only reads the project; a `--version` is applied later by [`execute`].
pub fn plan(project: &Project, maven: &Maven, opts: &DeployOptions) -> Result<DeployPlan> {
    let target: DeployTarget = opts.target.parse()?;
    let config = &project.config;

    let (version, source) = match opts.version {
        Some(ref raw) => (ProjectVersion::parse(raw)?, VersionSource::Flag),
        None => ops_version::detect_version(project, Some(maven))?,
    };
    let kind = version.kind();
    target.check_version(&version, config.central.snapshots)?;

    let mut warnings = Vec::new();
    let mut invocation = Invocation {
        goal: target.maven_goal().to_string(),
        skip_tests: opts.skip_tests || config.maven.skip_tests,
        ..Invocation::default()
    };
    let mut visible_in = None;

    match target {
        DeployTarget::GithubPackages => {
            let owner_repo = project
                .github_repository(opts.repository.as_deref())
                .ok_or_else(|| ShipError::Target {
                    message: "no GitHub repository to deploy to: pass --repository owner/repo, \
                              set [github] repository in .mvnship.toml, or export GITHUB_REPOSITORY"
                        .to_string(),
                })?;
            let repo = MavenRepository::github_packages(&owner_repo)?;
            invocation.alt_repository = Some(repo.alt_deployment(&config.github.server_id));

            let creds = ServerCredentials::github(&project.env);
            if let Some(ref c) = creds {
                forward_credentials(
                    &mut invocation,
                    c,
                    credentials::GITHUB_ACTOR,
                    credentials::GITHUB_TOKEN,
                );
            } else {
                warnings.push(format!(
                    "{} or {} is not set; server '{}' must get credentials from settings.xml",
                    credentials::GITHUB_ACTOR,
                    credentials::GITHUB_TOKEN,
                    config.github.server_id
                ));
            }
            visible_in = Some(repo.with_credentials(creds));
        }
        DeployTarget::MavenCentral if kind == VersionKind::Snapshot => {
            let repo = MavenRepository::new("central-snapshots", &config.central.snapshot_url);
            invocation.alt_repository = Some(repo.alt_deployment(&config.central.server_id));
            require_central_credentials(project, &mut invocation, opts.dry_run, &mut warnings)?;
        }
        DeployTarget::MavenCentral => {
            invocation.profiles.push(config.central.profile.clone());
            require_central_credentials(project, &mut invocation, opts.dry_run, &mut warnings)?;
            visible_in = Some(MavenRepository::maven_central());
        }
        DeployTarget::Local => {}
    }

    if target.needs_signing(kind) {
        if let Some(ref key) = config.gpg.key_id {
            invocation.extra_args.push(format!("-Dgpg.keyname={key}"));
        }
        match credentials::gpg_passphrase(&project.env) {
            Some(pass) => invocation
                .env
                .push((credentials::GPG_PASSPHRASE.to_string(), pass)),
            None => warnings.push(format!(
                "{} is not set; signing relies on gpg-agent",
                credentials::GPG_PASSPHRASE
            )),
        }
    }

    invocation.extra_args.extend(opts.extra_args.iter().cloned());

    Ok(DeployPlan {
        target,
        version,
        source,
        invocation,
        visible_in,
        warnings,
    })
}

/// Export `creds` to Maven under the names `settings.xml` reads them from.
fn forward_credentials(
    invocation: &mut Invocation,
    creds: &ServerCredentials,
    username_var: &str,
    password_var: &str,
) {
    invocation
        .env
        .push((username_var.to_string(), creds.username.clone()));
    invocation
        .env
        .push((password_var.to_string(), creds.password.clone()));
}

fn require_central_credentials(
    project: &Project,
    invocation: &mut Invocation,
    dry_run: bool,
    warnings: &mut Vec<String>,
) -> Result<()> {
    if let Some(creds) = ServerCredentials::central(&project.env) {
        forward_credentials(
            invocation,
            &creds,
            credentials::CENTRAL_USERNAME,
            credentials::CENTRAL_PASSWORD,
        );
        return Ok(());
    }
    let message = format!(
        "{} and {} must be set to deploy to Maven Central",
        credentials::CENTRAL_USERNAME,
        credentials::CENTRAL_PASSWORD
    );
    if dry_run {
        warnings.push(message);
        Ok(())
    } else {
        Err(ShipError::Credentials { message }.into())
    }
}

/// `mvnship deploy`.
pub async fn deploy(cwd: &Path, opts: &DeployOptions) -> Result<()> {
    let project = Project::discover(cwd)?;
    let maven = ops_version::maven_for(&project)?;
    let plan = plan(&project, &maven, opts)?;

    for warning in &plan.warnings {
        progress::status_warn("Warning", warning);
    }

    let summary = format!(
        "{} {} to {}",
        plan.version,
        plan.kind(),
        plan.target.display_name()
    );

    if opts.dry_run {
        progress::status_info("Dry run", &summary);
        if plan.source == VersionSource::Flag {
            progress::status_info("Would set", &format!("project version to {}", plan.version));
        }
        println!("{}", maven.command(&plan.invocation).display());
        return Ok(());
    }

    if plan.target.is_remote() && plan.kind() == VersionKind::Release && !opts.yes {
        crate::confirm(&format!("Deploy {summary}?"))?;
    }

    progress::status("Deploying", &summary);
    execute(&maven, &plan)?;
    progress::status("Deployed", &summary);

    if let Some(secs) = opts.wait {
        wait_for_release(&project, &plan, Duration::from_secs(secs)).await?;
    }

    Ok(())
}

/// Run a validated plan: apply a `--version` override, then the Maven goal.
pub fn execute(maven: &Maven, plan: &DeployPlan) -> Result<()> {
    if plan.source == VersionSource::Flag {
        progress::status("Versioning", &format!("project to {}", plan.version));
        maven.set_version(plan.version.as_str())?;
    }
    maven.command(&plan.invocation).run_checked()?;
    Ok(())
}

async fn wait_for_release(project: &Project, plan: &DeployPlan, timeout: Duration) -> Result<()> {
    let Some(ref repo) = plan.visible_in else {
        progress::status_warn("Skipped", "nothing to wait for on this target");
        return Ok(());
    };
    if plan.kind() == VersionKind::Snapshot {
        progress::status_warn("Skipped", "SNAPSHOT artifacts are timestamped; not waiting");
        return Ok(());
    }
    let coord: Coordinate = match ops_version::coordinate(project, &plan.version) {
        Ok(c) => c,
        Err(e) => {
            progress::status_warn("Skipped", &format!("cannot tell what to wait for: {e}"));
            return Ok(());
        }
    };

    let visible =
        visibility::wait_until_visible(repo, &coord, timeout, Duration::from_secs(15)).await?;
    if visible {
        progress::status("Published", &format!("{coord} is live on {}", repo.name));
    } else {
        progress::status_warn(
            "Pending",
            &format!(
                "{coord} is not visible after {}s; registry sync can take a while longer",
                timeout.as_secs()
            ),
        );
    }
    Ok(())
}
