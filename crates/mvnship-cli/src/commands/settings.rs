use std::path::{Path, PathBuf};

use miette::Result;

use mvnship_ops::ops_settings::{self, SettingsOptions};

pub fn exec(cwd: &Path, output: Option<PathBuf>, force: bool, stdout: bool) -> Result<()> {
    ops_settings::write(
        cwd,
        &SettingsOptions {
            output,
            force,
            stdout,
        },
    )
}
