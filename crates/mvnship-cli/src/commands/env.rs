use std::path::Path;

use miette::Result;

pub fn exec(cwd: &Path, reveal: bool) -> Result<()> {
    mvnship_ops::ops_env::show(cwd, reveal)
}
