//! Super-Res Lab Library
//!
//! Interactive tutorial for super-resolution network architectures. Each
//! lesson pairs a layer diagram with the code that implements it; selecting a
//! layer highlights its lines and selecting a line highlights its layer.
//!
//! The core is [`catalog::LessonCatalog`] (read-only lesson content) and
//! [`selection::SelectionController`] (the cross-highlight state). The TUI
//! and the CLI are thin layers over those two.

// Module declarations
pub mod app;
pub mod branding;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod selection;
pub mod shortcuts;
pub mod tui;
