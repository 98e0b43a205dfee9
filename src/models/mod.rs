//! Data models for lessons and their diagram layers.
//!
//! Models are independent of the UI and the selection logic.

pub mod lesson;

pub use lesson::{CodeRange, Layer, LayerKind, Lesson, ResidualRole};
