//! Reading the coordinates of a project from its `pom.xml`.
//!
//! Only the top-level `<project>` identity is read: group, artifact,
//! version, packaging, the `<parent>` reference they fall back to, and
//! `<properties>` for CI-friendly versions such as `${revision}`.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use mvnship_util::errors::ShipError;

/// Project identity as declared in a POM.
#[derive(Debug, Clone, Default)]
pub struct Pom {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub packaging: Option<String>,
    pub parent: Option<ParentRef>,
    pub properties: BTreeMap<String, String>,
}

/// Reference to a parent POM.
#[derive(Debug, Clone, Default)]
pub struct ParentRef {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

/// A fully resolved `group:artifact:version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

impl Pom {
    /// Effective group ID (falls back to parent).
    pub fn effective_group_id(&self) -> Option<String> {
        self.group_id
            .as_deref()
            .or(self.parent.as_ref().map(|p| p.group_id.as_str()))
            .map(|g| self.interpolate(g))
    }

    /// Effective version (falls back to parent), with `${...}` resolved.
    pub fn effective_version(&self) -> Option<String> {
        self.version
            .as_deref()
            .or(self.parent.as_ref().map(|p| p.version.as_str()))
            .map(|v| self.interpolate(v))
    }

    /// The project coordinate, or an error naming the missing element.
    pub fn coordinate(&self) -> Result<Coordinate, ShipError> {
        let missing = |what: &str| ShipError::Project {
            message: format!("pom.xml declares no {what} (and no <parent> to inherit it from)"),
        };
        let artifact_id = self
            .artifact_id
            .clone()
            .ok_or_else(|| ShipError::Project {
                message: "pom.xml declares no <artifactId>".to_string(),
            })?;
        let group_id = self.effective_group_id().ok_or_else(|| missing("<groupId>"))?;
        let version = self.effective_version().ok_or_else(|| missing("<version>"))?;
        if version.contains("${") {
            return Err(ShipError::Project {
                message: format!("pom.xml version '{version}' references an undefined property"),
            });
        }
        Ok(Coordinate {
            group_id,
            artifact_id,
            version,
        })
    }

    /// Resolve `${property}` references using POM properties and the
    /// built-in `project.*` variables. Unknown references are left in place.
    pub fn interpolate(&self, input: &str) -> String {
        let mut result = input.to_string();
        for _ in 0..20 {
            let Some(start) = result.find("${") else {
                break;
            };
            let Some(len) = result[start..].find('}') else {
                break;
            };
            let key = &result[start + 2..start + len];
            let Some(value) = self.resolve_property(key) else {
                break;
            };
            result.replace_range(start..start + len + 1, &value);
        }
        result
    }

    fn resolve_property(&self, key: &str) -> Option<String> {
        match key {
            "project.groupId" | "pom.groupId" => self
                .group_id
                .clone()
                .or_else(|| self.parent.as_ref().map(|p| p.group_id.clone())),
            "project.artifactId" | "pom.artifactId" => self.artifact_id.clone(),
            "project.parent.version" => self.parent.as_ref().map(|p| p.version.clone()),
            _ => self.properties.get(key).cloned(),
        }
    }
}

/// Read and parse the POM at `path`.
pub fn read_pom(path: &Path) -> Result<Pom, ShipError> {
    let xml = std::fs::read_to_string(path).map_err(|e| ShipError::Project {
        message: format!("Failed to read {}: {e}", path.display()),
    })?;
    parse_pom(&xml)
}

/// Parse a POM XML string.
pub fn parse_pom(xml: &str) -> Result<Pom, ShipError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut pom = Pom::default();
    let mut path: Vec<String> = Vec::new();
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                path.push(String::from_utf8_lossy(e.local_name().as_ref()).to_string());
                text.clear();
                if path_is(&path, &["project", "parent"]) {
                    pom.parent = Some(ParentRef::default());
                }
            }
            Ok(Event::Text(ref e)) => {
                text = e
                    .unescape()
                    .map_err(|e| parse_error(&e))?
                    .to_string();
            }
            Ok(Event::End(_)) => {
                let depth = path.len();
                let leaf = path.last().map(String::as_str).unwrap_or_default();

                if depth == 2 && path[0] == "project" {
                    let value = Some(text.clone());
                    match leaf {
                        "groupId" => pom.group_id = value,
                        "artifactId" => pom.artifact_id = value,
                        "version" => pom.version = value,
                        "packaging" => pom.packaging = value,
                        _ => {}
                    }
                } else if depth == 3 && path_is(&path[..2], &["project", "parent"]) {
                    if let Some(ref mut parent) = pom.parent {
                        match leaf {
                            "groupId" => parent.group_id = text.clone(),
                            "artifactId" => parent.artifact_id = text.clone(),
                            "version" => parent.version = text.clone(),
                            _ => {}
                        }
                    }
                } else if depth == 3 && path_is(&path[..2], &["project", "properties"]) {
                    pom.properties.insert(leaf.to_string(), text.clone());
                }

                path.pop();
                text.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(parse_error(&e)),
            _ => {}
        }
    }

    if pom.artifact_id.is_none() && pom.parent.is_none() && pom.group_id.is_none() {
        return Err(ShipError::Project {
            message: "pom.xml has no <project> coordinates".to_string(),
        });
    }

    Ok(pom)
}

fn path_is(path: &[String], expected: &[&str]) -> bool {
    path.len() == expected.len() && path.iter().zip(expected).all(|(a, b)| a == b)
}

fn parse_error(e: &dyn fmt::Display) -> ShipError {
    ShipError::Project {
        message: format!("Failed to parse pom.xml: {e}"),
    }
}
