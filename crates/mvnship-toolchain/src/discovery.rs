//! Tool discovery: find executables on `PATH` and the Maven wrapper.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use mvnship_core::config::MavenConfig;
use mvnship_util::errors::ShipError;
use mvnship_util::process::CommandBuilder;

/// An external program resolved to a concrete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub name: String,
    pub path: PathBuf,
}

impl Tool {
    /// A builder that will run this tool.
    pub fn command(&self) -> CommandBuilder {
        CommandBuilder::new(self.path.to_string_lossy())
    }

    /// First non-empty line of `<tool> --version`, if the tool answers.
    pub fn version_line(&self) -> Option<String> {
        let output = self.command().arg("--version").exec().ok()?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        stdout
            .lines()
            .chain(stderr.lines())
            .map(str::trim)
            .find(|l| !l.is_empty())
            .map(str::to_string)
    }
}

/// Look `program` up on the process `PATH`.
///
/// A program given with a path separator is checked as-is.
pub fn find_on_path(program: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    find_in(program, &path_var)
}

/// Look `program` up in the directories of `path_var`.
pub fn find_in(program: &str, path_var: &OsStr) -> Option<PathBuf> {
    let direct = Path::new(program);
    if direct.components().count() > 1 {
        return is_executable(direct).then(|| direct.to_path_buf());
    }
    std::env::split_paths(path_var)
        .flat_map(|dir| candidates(&dir, program))
        .find(|candidate| is_executable(candidate))
}

/// Resolve `program` or fail with [`ShipError::ToolMissing`].
pub fn require(program: &str) -> Result<Tool, ShipError> {
    find_on_path(program)
        .map(|path| Tool {
            name: program.to_string(),
            path,
        })
        .ok_or_else(|| ShipError::ToolMissing {
            tool: program.to_string(),
        })
}

/// The Maven executable for a project: `./mvnw` when it exists and
/// `auto-wrapper` is on, otherwise the configured command from `PATH`.
pub fn maven(project_root: &Path, config: &MavenConfig) -> Result<Tool, ShipError> {
    if config.auto_wrapper {
        if let Some(path) = candidates(project_root, "mvnw")
            .into_iter()
            .find(|p| is_executable(p))
        {
            tracing::debug!(path = %path.display(), "using Maven wrapper");
            return Ok(Tool {
                name: "mvnw".to_string(),
                path,
            });
        }
    }
    require(&config.command)
}

fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    if cfg!(windows) {
        ["", ".exe", ".cmd", ".bat"]
            .iter()
            .map(|ext| dir.join(format!("{program}{ext}")))
            .collect()
    } else {
        vec![dir.join(program)]
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
