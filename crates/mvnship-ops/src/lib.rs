//! Operations behind each `mvnship` command.
//!
//! Every `ops_*` module takes the directory the command was run from plus
//! its options, and returns `miette::Result<()>`; printing is part of the
//! operation so the CLI layer stays a thin dispatcher.

pub mod ops_deploy;
pub mod ops_doctor;
pub mod ops_env;
pub mod ops_secrets;
pub mod ops_settings;
pub mod ops_version;

use std::path::Path;

use dialoguer::Confirm;
use mvnship_core::project::Project;
use mvnship_util::errors::ShipError;

/// Ask a yes/no question; anything but "yes" aborts.
///
/// Without a terminal there is nobody to ask, so the caller must have
/// passed `--yes` instead.
pub(crate) fn confirm(prompt: &str) -> miette::Result<()> {
    if !atty::is(atty::Stream::Stdin) {
        return Err(ShipError::Aborted {
            message: format!("{prompt} (not a terminal; pass --yes to confirm)"),
        }
        .into());
    }
    let accepted = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| ShipError::Generic {
            message: format!("Prompt error: {e}"),
        })?;
    if accepted {
        Ok(())
    } else {
        Err(ShipError::Aborted {
            message: "declined by user".to_string(),
        }
        .into())
    }
}

/// The enclosing Maven project, or `cwd` itself with its config when there
/// is no `pom.xml` (for commands that do not build anything).
pub(crate) fn project_or_cwd(cwd: &Path) -> miette::Result<Project> {
    match Project::discover(cwd) {
        Ok(project) => Ok(project),
        Err(e) => {
            tracing::debug!("no Maven project ({e}), using {}", cwd.display());
            Project::load(cwd.to_path_buf())
        }
    }
}
