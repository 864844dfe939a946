use std::path::Path;

use miette::Result;

use mvnship_core::credentials::mask;

/// `mvnship env`: list `.mvnship.env` entries, masked unless `reveal`.
pub fn show(cwd: &Path, reveal: bool) -> Result<()> {
    let project = crate::project_or_cwd(cwd)?;
    let entries = project.env.file_entries();

    if entries.is_empty() {
        println!("No environment variables configured.");
        println!("  .mvnship.env: {}", project.env_path().display());
        return Ok(());
    }

    println!(".mvnship.env ({} entries):", entries.len());
    for (key, value) in entries {
        let display_value = if reveal { value.clone() } else { mask(value) };
        println!("  {key} = {display_value}");
    }

    Ok(())
}
