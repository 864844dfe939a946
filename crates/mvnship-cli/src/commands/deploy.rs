use std::path::Path;

use miette::Result;

use mvnship_ops::ops_deploy::{self, DeployOptions};

pub async fn exec(cwd: &Path, opts: &DeployOptions) -> Result<()> {
    tracing::debug!(deploy_target = %opts.target, dry_run = opts.dry_run, "deploy");
    ops_deploy::deploy(cwd, opts).await
}
