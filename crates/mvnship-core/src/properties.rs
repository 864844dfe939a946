use std::collections::BTreeMap;
use std::path::Path;

/// Loads a `.mvnship.env` file (shell-style `KEY=value` format).
///
/// `.mvnship.env` holds deployment secrets (registry passwords, the GPG
/// passphrase, tokens). An `export ` prefix and one pair of matching quotes
/// around the value are accepted so the file can also be `source`d.
pub fn load_env_file(path: &Path) -> miette::Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    if !path.is_file() {
        return Ok(map);
    }
    let content = std::fs::read_to_string(path).map_err(mvnship_util::errors::ShipError::Io)?;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
        if let Some((key, value)) = trimmed.split_once('=') {
            map.insert(key.trim().to_string(), unquote(value.trim()).to_string());
        }
    }
    Ok(map)
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Interpolate `${env:VAR}` references in a string.
///
/// Looks up values first from the provided `env_overrides` map (populated
/// from `.mvnship.env`), then falls back to actual process environment variables.
/// Substituted values are inserted verbatim and never expanded again.
pub fn interpolate(input: &str, env_overrides: &BTreeMap<String, String>) -> String {
    const OPEN: &str = "${env:";
    let mut result = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find(OPEN) {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let key = &rest[start + OPEN.len()..start + len];
        result.push_str(&rest[..start]);
        let value = env_overrides
            .get(key)
            .cloned()
            .or_else(|| std::env::var(key).ok())
            .unwrap_or_default();
        result.push_str(&value);
        rest = &rest[start + len + 1..];
    }
    result.push_str(rest);
    result
}

/// Variables from `.mvnship.env` layered over the process environment.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    file: BTreeMap<String, String>,
}

impl Environment {
    pub fn new(file: BTreeMap<String, String>) -> Self {
        Self { file }
    }

    /// Load `.mvnship.env` from `path` (missing file means no overrides).
    pub fn load(path: &Path) -> miette::Result<Self> {
        load_env_file(path).map(Self::new)
    }

    /// Look up `key`, preferring the env file. Empty values count as unset.
    pub fn get(&self, key: &str) -> Option<String> {
        self.file
            .get(key)
            .cloned()
            .or_else(|| std::env::var(key).ok())
            .filter(|v| !v.is_empty())
    }

    /// First of `keys` that is set.
    pub fn get_any(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|k| self.get(k))
    }

    /// Entries defined in the env file only.
    pub fn file_entries(&self) -> &BTreeMap<String, String> {
        &self.file
    }
}
