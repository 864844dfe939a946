use std::path::Path;

use miette::Result;

use mvnship_ops::ops_secrets::{self, SecretsOptions};

use crate::cli::SecretsAction;

pub fn exec(cwd: &Path, action: SecretsAction) -> Result<()> {
    match action {
        SecretsAction::Setup {
            repository,
            gpg_key,
            skip_gpg,
            dry_run,
        } => ops_secrets::setup(
            cwd,
            &SecretsOptions {
                repository,
                gpg_key,
                skip_gpg,
                dry_run,
            },
        ),
        SecretsAction::List { repository } => ops_secrets::list(cwd, repository.as_deref()),
    }
}
