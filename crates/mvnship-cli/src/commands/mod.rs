//! Command dispatch and handler modules.

mod deploy;
mod doctor;
mod env;
mod secrets;
mod settings;
mod version;

use std::path::PathBuf;

use miette::Result;
use mvnship_util::errors::ShipError;

use crate::cli::{Cli, Command};

fn cwd() -> Result<PathBuf> {
    Ok(std::env::current_dir().map_err(ShipError::Io)?)
}

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    let cwd = cwd()?;
    match cli.command {
        Command::Deploy {
            target,
            set_version,
            repository,
            skip_tests,
            dry_run,
            yes,
            wait,
            args,
        } => {
            let opts = mvnship_ops::ops_deploy::DeployOptions {
                target,
                version: set_version,
                repository,
                skip_tests,
                dry_run,
                yes,
                wait,
                extra_args: args,
            };
            deploy::exec(&cwd, &opts).await
        }
        Command::Secrets { action } => secrets::exec(&cwd, action),
        Command::Settings {
            output,
            force,
            stdout,
        } => settings::exec(&cwd, output, force, stdout),
        Command::Version { json } => version::exec(&cwd, json),
        Command::Doctor => doctor::exec(&cwd),
        Command::Env { reveal } => env::exec(&cwd, reveal),
    }
}
