//! CLI command handlers.
//!
//! Headless, scriptable access to the lesson catalog and the selection
//! logic, for automation and testing.

pub mod common;
pub mod config;
pub mod lessons;
pub mod locate;
pub mod show;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use lessons::LessonsArgs;
pub use locate::LocateArgs;
pub use show::ShowArgs;
