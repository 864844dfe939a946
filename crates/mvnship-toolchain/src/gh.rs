//! The GitHub CLI: auth state and repository Actions secrets.

use mvnship_util::errors::ShipError;

use crate::discovery::Tool;

/// `gh`, resolved on `PATH`.
#[derive(Debug, Clone)]
pub struct GitHubCli {
    tool: Tool,
}

impl GitHubCli {
    pub fn new(tool: Tool) -> Self {
        Self { tool }
    }

    /// Locate `gh` on `PATH`.
    pub fn discover() -> Result<Self, ShipError> {
        crate::discovery::require("gh").map(Self::new)
    }

    /// Whether `gh auth status` reports a logged-in account.
    pub fn is_authenticated(&self) -> Result<bool, ShipError> {
        let output = self.tool.command().args(["auth", "status"]).exec()?;
        Ok(output.status.success())
    }

    /// Create or overwrite the Actions secret `name` in `repo`.
    ///
    /// The value goes through stdin so it never shows up in a process listing.
    pub fn set_secret(&self, repo: &str, name: &str, value: &str) -> Result<(), ShipError> {
        self.tool
            .command()
            .args(["secret", "set", name, "--repo", repo])
            .stdin_bytes(value)
            .exec_checked()
            .map(|_| ())
    }

    /// Names of the Actions secrets defined in `repo`.
    pub fn list_secrets(&self, repo: &str) -> Result<Vec<String>, ShipError> {
        let output = self
            .tool
            .command()
            .args(["secret", "list", "--repo", repo])
            .exec_checked()?;
        Ok(parse_secret_list(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Secret names from `gh secret list` (tab-separated, name first).
pub fn parse_secret_list(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.split('\t').next())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_list_parsing() {
        let out = "GPG_PASSPHRASE\t2025-01-02T10:00:00Z\n\
                   MAVEN_CENTRAL_USERNAME\t2025-01-02T10:00:01Z\n\
                   \n";
        assert_eq!(
            parse_secret_list(out),
            vec!["GPG_PASSPHRASE", "MAVEN_CENTRAL_USERNAME"]
        );
    }

    #[test]
    fn secret_list_empty() {
        assert!(parse_secret_list("").is_empty());
    }
}
