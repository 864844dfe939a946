use std::path::Path;

use miette::Result;

pub fn exec(cwd: &Path) -> Result<()> {
    mvnship_ops::ops_doctor::doctor(cwd)
}
