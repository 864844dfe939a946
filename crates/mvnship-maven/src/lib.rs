//! Maven side of mvnship: reading POM coordinates, repository URL layout,
//! authentication, rendering `settings.xml`, and checking that a deployed
//! artifact is visible in its registry.

pub mod auth;
pub mod pom;
pub mod repository;
pub mod settings;
pub mod visibility;
