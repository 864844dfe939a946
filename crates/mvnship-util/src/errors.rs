use std::process::Output;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all mvnship operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ShipError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No Maven project could be located or read.
    #[error("Project error: {message}")]
    #[diagnostic(help("Run mvnship from inside a Maven project (a directory containing pom.xml)"))]
    Project { message: String },

    /// Invalid `.mvnship.toml` or `.mvnship.env`.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check .mvnship.toml in the project root for syntax errors"))]
    Config { message: String },

    /// The project version is not a usable Maven version.
    #[error("Invalid version: {message}")]
    #[diagnostic(help("Maven versions look like 1.2.3, 1.2.3-RC1 or 1.2.3-SNAPSHOT"))]
    Version { message: String },

    /// Unknown deployment target or a target that cannot take this version.
    #[error("Target error: {message}")]
    Target { message: String },

    /// An external command ran but exited unsuccessfully.
    #[error("`{program}` failed ({status}){detail}")]
    Command {
        program: String,
        status: String,
        detail: String,
    },

    /// A required external tool is not installed.
    #[error("`{tool}` was not found on PATH")]
    #[diagnostic(help("Install {tool} or add it to PATH, then run `mvnship doctor`"))]
    ToolMissing { tool: String },

    /// A credential needed for the operation is not set.
    #[error("Missing credentials: {message}")]
    #[diagnostic(help("Export the variable or add it to .mvnship.env in the project root"))]
    Credentials { message: String },

    /// Network request failed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The user declined a confirmation, or none could be asked for.
    #[error("Aborted: {message}")]
    Aborted { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

impl ShipError {
    /// Build a [`ShipError::Command`] from the captured output of a failed process.
    pub fn command_failed(program: &str, output: &Output) -> Self {
        let status = match output.status.code() {
            Some(code) => format!("exit code {code}"),
            None => "terminated by signal".to_string(),
        };
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        let detail = if stderr.is_empty() {
            String::new()
        } else {
            format!(": {stderr}")
        };
        Self::Command {
            program: program.to_string(),
            status,
            detail,
        }
    }
}

/// Convenience alias for `miette::Result<T>`.
pub type ShipResult<T> = miette::Result<T>;
