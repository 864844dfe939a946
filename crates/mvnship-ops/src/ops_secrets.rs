//! `mvnship secrets`: push deployment credentials into GitHub Actions secrets.

use std::path::Path;

use miette::Result;

use mvnship_core::credentials::{self, CENTRAL_PASSWORD, CENTRAL_USERNAME};
use mvnship_core::project::Project;
use mvnship_maven::repository::split_owner_repo;
use mvnship_toolchain::gh::GitHubCli;
use mvnship_toolchain::gpg::{self, Gpg};
use mvnship_util::errors::ShipError;
use mvnship_util::progress;

/// Options of `mvnship secrets setup`.
#[derive(Debug, Clone, Default)]
pub struct SecretsOptions {
    pub repository: Option<String>,
    pub gpg_key: Option<String>,
    pub skip_gpg: bool,
    pub dry_run: bool,
}

/// A secret ready to upload. The value is never printed.
struct Secret {
    name: &'static str,
    value: String,
}

fn repository(project: &Project, flag: Option<&str>) -> Result<String> {
    let repo = project.github_repository(flag).ok_or_else(|| ShipError::Target {
        message: "no GitHub repository: pass --repository owner/repo or set [github] repository"
            .to_string(),
    })?;
    split_owner_repo(&repo)?;
    Ok(repo)
}

fn authenticated_gh() -> Result<GitHubCli> {
    let gh = GitHubCli::discover()?;
    if !gh.is_authenticated()? {
        return Err(ShipError::Credentials {
            message: "gh is not logged in; run `gh auth login`".to_string(),
        }
        .into());
    }
    Ok(gh)
}

/// Collect the secrets that can be provisioned from the environment and GPG.
fn collect(project: &Project, opts: &SecretsOptions) -> Result<Vec<Secret>> {
    let mut secrets = Vec::new();

    for name in [CENTRAL_USERNAME, CENTRAL_PASSWORD] {
        match project.env.get(name) {
            Some(value) => secrets.push(Secret { name, value }),
            None => progress::status_warn("Missing", &format!("{name} is not set, skipping")),
        }
    }

    if opts.skip_gpg {
        return Ok(secrets);
    }

    let passphrase = credentials::gpg_passphrase(&project.env);
    let gpg = Gpg::discover()?;
    let keys = gpg.list_secret_keys()?;
    let wanted = opts
        .gpg_key
        .as_deref()
        .or(project.config.gpg.key_id.as_deref());
    let key = gpg::select_key(&keys, wanted)?;
    progress::status_info("Signing key", &key.describe());

    let armored = if opts.dry_run {
        String::new()
    } else {
        gpg.export_secret_key(&key.key_id, passphrase.as_deref())?
    };
    secrets.push(Secret {
        name: credentials::GPG_PRIVATE_KEY_SECRET,
        value: armored,
    });

    match passphrase {
        Some(value) => secrets.push(Secret {
            name: credentials::GPG_PASSPHRASE_SECRET,
            value,
        }),
        None => progress::status_warn(
            "Missing",
            &format!("{} is not set, skipping", credentials::GPG_PASSPHRASE),
        ),
    }

    Ok(secrets)
}

/// `mvnship secrets setup`.
pub fn setup(cwd: &Path, opts: &SecretsOptions) -> Result<()> {
    let project = crate::project_or_cwd(cwd)?;
    let repo = repository(&project, opts.repository.as_deref())?;
    let gh = if opts.dry_run {
        None
    } else {
        Some(authenticated_gh()?)
    };

    let secrets = collect(&project, opts)?;
    if secrets.is_empty() {
        return Err(ShipError::Credentials {
            message: format!(
                "nothing to upload: set {CENTRAL_USERNAME}, {CENTRAL_PASSWORD} or {} \
                 (in the environment or .mvnship.env), or drop --skip-gpg",
                credentials::GPG_PASSPHRASE
            ),
        }
        .into());
    }

    match gh {
        None => {
            progress::status_info("Dry run", &format!("{} secrets for {repo}", secrets.len()));
            for secret in &secrets {
                println!("{}", secret.name);
            }
        }
        Some(gh) => {
            for secret in &secrets {
                gh.set_secret(&repo, secret.name, &secret.value)?;
                progress::status("Set", &format!("{} on {repo}", secret.name));
            }
        }
    }

    Ok(())
}

/// `mvnship secrets list`.
pub fn list(cwd: &Path, repository_flag: Option<&str>) -> Result<()> {
    let project = crate::project_or_cwd(cwd)?;
    let repo = repository(&project, repository_flag)?;
    let names = authenticated_gh()?.list_secrets(&repo)?;
    if names.is_empty() {
        println!("No secrets configured for {repo}.");
        return Ok(());
    }
    println!("{repo} ({} secrets):", names.len());
    for name in names {
        println!("  {name}");
    }
    Ok(())
}
