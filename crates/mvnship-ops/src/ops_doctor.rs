//! `mvnship doctor`: report which tools and credentials are in place.

use std::path::Path;

use miette::Result;

use mvnship_core::credentials;
use mvnship_core::project::Project;
use mvnship_toolchain::discovery::{self, Tool};
use mvnship_toolchain::gh::GitHubCli;
use mvnship_toolchain::gpg::Gpg;
use mvnship_util::errors::ShipError;

fn report(label: &str, tool: &Result<Tool, ShipError>) {
    match tool {
        Ok(t) => println!(
            "  {label:<8} ok       {} ({})",
            t.version_line().unwrap_or_else(|| "unknown version".to_string()),
            t.path.display()
        ),
        Err(_) => println!("  {label:<8} missing"),
    }
}

pub fn doctor(cwd: &Path) -> Result<()> {
    let discovered = Project::discover(cwd);
    let in_maven_project = discovered.is_ok();
    let project = match discovered {
        Ok(project) => project,
        Err(_) => Project::load(cwd.to_path_buf())?,
    };

    println!("Tools:");
    let mvn = discovery::maven(&project.root, &project.config.maven);
    report("mvn", &mvn);
    let gh = discovery::require("gh");
    report("gh", &gh);
    let gpg = discovery::require("gpg");
    report("gpg", &gpg);

    if let Ok(tool) = gh {
        let authenticated = GitHubCli::new(tool).is_authenticated().unwrap_or(false);
        println!(
            "  gh auth  {}",
            if authenticated { "logged in" } else { "not logged in (run `gh auth login`)" }
        );
    }
    if let Ok(tool) = gpg {
        match Gpg::new(tool).list_secret_keys() {
            Ok(keys) => {
                let usable = keys.iter().filter(|k| k.is_usable()).count();
                println!("  gpg keys {usable} usable secret key(s)");
            }
            Err(e) => println!("  gpg keys error: {e}"),
        }
    }

    println!();
    println!("Project:");
    if in_maven_project {
        println!("  root     {}", project.root.display());
    } else {
        println!("  no pom.xml in {} or any parent", cwd.display());
    }

    println!();
    println!("Credentials:");
    let rows = [
        (credentials::GITHUB_ACTOR, project.env.get(credentials::GITHUB_ACTOR)),
        (credentials::GITHUB_TOKEN, project.env.get(credentials::GITHUB_TOKEN)),
        (credentials::CENTRAL_USERNAME, project.env.get(credentials::CENTRAL_USERNAME)),
        (credentials::CENTRAL_PASSWORD, project.env.get(credentials::CENTRAL_PASSWORD)),
        (credentials::GPG_PASSPHRASE, credentials::gpg_passphrase(&project.env)),
    ];
    for (var, value) in rows {
        let state = if value.is_some() { "set" } else { "not set" };
        println!("  {var:<24} {state}");
    }

    if let Err(e) = mvn {
        return Err(e.into());
    }
    Ok(())
}
