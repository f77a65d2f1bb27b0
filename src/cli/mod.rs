//! CLI command handlers for Folio.
//!
//! Headless access to the stored preferences and the project table, for
//! scripting and tests.

pub mod common;
pub mod config;
pub mod projects;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use projects::ProjectsArgs;
