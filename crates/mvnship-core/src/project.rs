//! Locating the Maven project and loading its configuration.

use std::path::{Path, PathBuf};

use mvnship_util::errors::ShipError;
use mvnship_util::fs::find_ancestor_with;

use crate::config::ProjectConfig;
use crate::properties::Environment;
use crate::{CONFIG_FILE, ENV_FILE, POM_FILE};

/// A Maven project root with its mvnship configuration.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: ProjectConfig,
    pub env: Environment,
}

impl Project {
    /// Find the nearest ancestor of `start` containing `pom.xml` and load
    /// `.mvnship.env` and `.mvnship.toml` from it.
    pub fn discover(start: &Path) -> miette::Result<Self> {
        let root = find_ancestor_with(start, POM_FILE).ok_or_else(|| ShipError::Project {
            message: format!("Could not find {POM_FILE} in this directory or any parent"),
        })?;
        Self::load(root)
    }

    /// Load configuration for a known project root.
    pub fn load(root: PathBuf) -> miette::Result<Self> {
        let env = Environment::load(&root.join(ENV_FILE))?;
        let config = ProjectConfig::load(&root.join(CONFIG_FILE), env.file_entries())?;
        tracing::debug!(root = %root.display(), "loaded project");
        Ok(Self { root, config, env })
    }

    pub fn pom_path(&self) -> PathBuf {
        self.root.join(POM_FILE)
    }

    pub fn env_path(&self) -> PathBuf {
        self.root.join(ENV_FILE)
    }

    /// `owner/repo` from an explicit flag, the config, or `GITHUB_REPOSITORY`.
    pub fn github_repository(&self, flag: Option<&str>) -> Option<String> {
        flag.map(str::to_string)
            .or_else(|| self.config.github.repository.clone())
            .or_else(|| self.env.get(crate::credentials::GITHUB_REPOSITORY))
    }

    /// The settings file from config, resolved against the project root.
    pub fn settings_path(&self) -> Option<PathBuf> {
        self.config
            .maven
            .settings
            .as_deref()
            .map(|s| self.root.join(s))
    }
}
