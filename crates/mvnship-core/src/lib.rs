//! Core data types for mvnship.
//!
//! Version classification (SNAPSHOT vs RELEASE), deployment targets, the
//! project configuration in `.mvnship.toml`, secrets from `.mvnship.env`,
//! and the well-known credential variables.
//!
//! This crate is free of async code, network I/O and process spawning.

/// Maven project descriptor that marks a project root.
pub const POM_FILE: &str = "pom.xml";

/// Optional per-project configuration file.
pub const CONFIG_FILE: &str = ".mvnship.toml";

/// Optional per-project secrets file (`KEY=value` lines).
pub const ENV_FILE: &str = ".mvnship.env";

pub mod config;
pub mod credentials;
pub mod project;
pub mod properties;
pub mod target;
pub mod version;
