//! CLI argument definitions for mvnship.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "mvnship",
    version,
    about = "Ship Maven artifacts to GitHub Packages and Maven Central",
    long_about = "mvnship detects the project version, routes SNAPSHOTs and releases to the \
                  right registry, and wires the credentials Maven needs to deploy them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Deploy the project: github, central, or local
    Deploy {
        /// Deploy target (github, central, local)
        target: String,
        /// Set the project version before deploying
        #[arg(long = "version", value_name = "VERSION")]
        set_version: Option<String>,
        /// GitHub repository as owner/repo
        #[arg(long)]
        repository: Option<String>,
        /// Skip running tests
        #[arg(long)]
        skip_tests: bool,
        /// Print the Maven command instead of running it
        #[arg(long)]
        dry_run: bool,
        /// Do not ask for confirmation before a release
        #[arg(short, long)]
        yes: bool,
        /// Wait until the release is downloadable (seconds, default 600)
        #[arg(long, value_name = "SECS", num_args = 0..=1, default_missing_value = "600")]
        wait: Option<u64>,
        /// Extra arguments passed to Maven
        #[arg(last = true)]
        args: Vec<String>,
    },

    /// Manage GitHub Actions secrets used by deploy workflows
    Secrets {
        #[command(subcommand)]
        action: SecretsAction,
    },

    /// Write a Maven settings.xml that reads credentials from the environment
    Settings {
        /// Output path (default: ~/.m2/settings.xml)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with_all = ["output", "force"])]
        stdout: bool,
    },

    /// Print the project version and whether it is a SNAPSHOT or release
    Version {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that mvn, gh, gpg and credentials are available
    Doctor,

    /// Print variables from .mvnship.env
    Env {
        /// Show actual values instead of masking them
        #[arg(long)]
        reveal: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SecretsAction {
    /// Upload Central and GPG credentials as repository secrets
    Setup {
        /// GitHub repository as owner/repo
        #[arg(long)]
        repository: Option<String>,
        /// GPG key id or fingerprint to export
        #[arg(long)]
        gpg_key: Option<String>,
        /// Do not export a GPG key
        #[arg(long)]
        skip_gpg: bool,
        /// List the secrets without uploading
        #[arg(long)]
        dry_run: bool,
    },
    /// List the repository's secret names
    List {
        /// GitHub repository as owner/repo
        #[arg(long)]
        repository: Option<String>,
    },
}

/// Parse command-line arguments into a [`Cli`] struct.
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn deploy_wait_default() {
        let cli = Cli::parse_from(["mvnship", "deploy", "central", "--wait"]);
        match cli.command {
            Command::Deploy { wait, .. } => assert_eq!(wait, Some(600)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn deploy_passthrough_args() {
        let cli = Cli::parse_from([
            "mvnship", "deploy", "local", "--version", "1.0.0", "--", "-pl", "core",
        ]);
        match cli.command {
            Command::Deploy {
                set_version,
                args,
                wait,
                ..
            } => {
                assert_eq!(set_version.as_deref(), Some("1.0.0"));
                assert_eq!(args, vec!["-pl", "core"]);
                assert_eq!(wait, None);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
