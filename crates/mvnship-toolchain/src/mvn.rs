//! Driving Maven: version queries, version bumps, and deploy/install runs.

use std::path::{Path, PathBuf};

use mvnship_util::errors::ShipError;
use mvnship_util::process::CommandBuilder;

use crate::discovery::Tool;

/// Maven bound to a project root, with the options shared by every run.
#[derive(Debug, Clone)]
pub struct Maven {
    tool: Tool,
    root: PathBuf,
    settings: Option<PathBuf>,
    args: Vec<String>,
}

/// One lifecycle run (`deploy` or `install`) and its switches.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    pub goal: String,
    pub skip_tests: bool,
    pub profiles: Vec<String>,
    /// `id::url` for `-DaltDeploymentRepository`.
    pub alt_repository: Option<String>,
    pub env: Vec<(String, String)>,
    pub extra_args: Vec<String>,
}

impl Maven {
    pub fn new(tool: Tool, root: &Path) -> Self {
        Self {
            tool,
            root: root.to_path_buf(),
            settings: None,
            args: Vec::new(),
        }
    }

    /// Pass `-s <settings>` on every run.
    pub fn with_settings(mut self, settings: Option<PathBuf>) -> Self {
        self.settings = settings;
        self
    }

    /// Extra arguments placed before the goal on every run.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    fn base(&self) -> CommandBuilder {
        let mut cmd = self.tool.command().cwd(&self.root);
        if let Some(ref settings) = self.settings {
            cmd = cmd.arg("-s").arg(settings.to_string_lossy());
        }
        cmd.arg("-B").args(self.args.iter().cloned())
    }

    /// Ask Maven for `project.version`.
    pub fn evaluate_version(&self) -> Result<String, ShipError> {
        let output = self
            .base()
            .args([
                "-q",
                "help:evaluate",
                "-Dexpression=project.version",
                "-DforceStdout",
            ])
            .exec_checked()?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_evaluate_output(&stdout).ok_or_else(|| ShipError::Project {
            message: "mvn help:evaluate printed no version".to_string(),
        })
    }

    /// Rewrite the project version in every module's POM.
    pub fn set_version(&self, version: &str) -> Result<(), ShipError> {
        self.base()
            .args([
                "-q".to_string(),
                "versions:set".to_string(),
                format!("-DnewVersion={version}"),
                "-DgenerateBackupPoms=false".to_string(),
            ])
            .exec_checked()
            .map(|_| ())
    }

    /// The full command line for `invocation`.
    pub fn command(&self, invocation: &Invocation) -> CommandBuilder {
        let mut cmd = self.base().arg(&invocation.goal);
        if invocation.skip_tests {
            cmd = cmd.arg("-DskipTests");
        }
        if !invocation.profiles.is_empty() {
            cmd = cmd.arg("-P").arg(invocation.profiles.join(","));
        }
        if let Some(ref alt) = invocation.alt_repository {
            cmd = cmd.arg(format!("-DaltDeploymentRepository={alt}"));
        }
        for (k, v) in &invocation.env {
            cmd = cmd.env(k, v);
        }
        cmd.args(invocation.extra_args.iter().cloned())
    }
}

/// Extract the version from `help:evaluate -DforceStdout` output.
///
/// The version is the last line that is not Maven log output; it may be
/// preceded by download or warning lines when `-q` is ignored.
pub fn parse_evaluate_output(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('['))
        .filter(|l| !l.starts_with("Download"))
        .last()
        .map(str::to_string)
}
