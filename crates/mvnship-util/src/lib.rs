//! Shared utilities for mvnship.
//!
//! Cross-cutting concerns used by every other crate in the workspace: the
//! error type, filesystem helpers, external process spawning, and the
//! Cargo-style status output.

pub mod errors;
pub mod fs;
pub mod process;
pub mod progress;
