//! The external tools mvnship drives: discovery of `mvn` (or the project's
//! `mvnw`), `gh` and `gpg` on `PATH`, and typed wrappers for the handful of
//! subcommands each one is used for.

pub mod discovery;
pub mod gh;
pub mod gpg;
pub mod mvn;
