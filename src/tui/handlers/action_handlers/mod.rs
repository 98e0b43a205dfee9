//! Action handlers organized by category

/// Lesson tab switching handlers
pub mod lessons;

/// Layer and code cursor navigation handlers
pub mod navigation;

/// Highlight handlers (activate line, clear)
pub mod selection;
