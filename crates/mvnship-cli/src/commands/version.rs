use std::path::Path;

use miette::Result;

pub fn exec(cwd: &Path, json: bool) -> Result<()> {
    mvnship_ops::ops_version::show(cwd, json)
}
