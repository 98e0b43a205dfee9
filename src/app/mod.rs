//! Application orchestration layer
//!
//! High-level startup that ties configuration, logging, the lesson catalog
//! and the TUI together without containing detailed logic of its own.

/// Interactive session startup with command-line overrides
pub mod launch;

// Re-export commonly used functions for convenience
pub use launch::{apply_overrides, launch_tui, LaunchOptions};
