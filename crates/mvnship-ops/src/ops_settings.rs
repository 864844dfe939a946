//! `mvnship settings`: write a Maven `settings.xml` wired to the deploy secrets.

use std::path::{Path, PathBuf};

use miette::Result;

use mvnship_maven::settings::SettingsTemplate;
use mvnship_util::errors::ShipError;
use mvnship_util::fs::{home_dir, write_private};
use mvnship_util::progress;

/// Options of `mvnship settings`.
#[derive(Debug, Clone, Default)]
pub struct SettingsOptions {
    /// Defaults to `~/.m2/settings.xml`.
    pub output: Option<PathBuf>,
    pub force: bool,
    /// Print instead of writing a file.
    pub stdout: bool,
}

/// The user-level Maven settings file.
pub fn default_settings_path() -> PathBuf {
    home_dir().join(".m2").join("settings.xml")
}

pub fn write(cwd: &Path, opts: &SettingsOptions) -> Result<()> {
    let project = crate::project_or_cwd(cwd)?;
    let xml = SettingsTemplate::from_config(&project.config).render()?;

    if opts.stdout {
        print!("{xml}");
        return Ok(());
    }

    let path = match opts.output {
        Some(ref p) if p.is_relative() => cwd.join(p),
        Some(ref p) => p.clone(),
        None => default_settings_path(),
    };
    if path.exists() && !opts.force {
        return Err(ShipError::Generic {
            message: format!(
                "{} already exists; pass --force to overwrite it",
                path.display()
            ),
        }
        .into());
    }

    write_private(&path, &xml).map_err(|e| ShipError::Generic {
        message: format!("Failed to write {}: {e}", path.display()),
    })?;
    progress::status("Wrote", &path.display().to_string());
    Ok(())
}
