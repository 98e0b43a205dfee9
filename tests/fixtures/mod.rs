//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::path::Path;
use std::process::{Command, Output};

use superres_lab::branding::CONFIG_DIR_ENV;
use superres_lab::catalog::LessonCatalog;
use superres_lab::models::{CodeRange, Layer, LayerKind, Lesson, ResidualRole};

/// Path to the superres-lab binary
pub fn superres_lab_bin() -> &'static str {
    env!("CARGO_BIN_EXE_superres-lab")
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to several commands to share state within a test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(superres_lab_bin());
    cmd.env(CONFIG_DIR_ENV, config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the binary with an isolated config directory.
pub fn run(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Parses stdout as JSON, failing the test with stderr on error.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}): {stdout}\nstderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

fn range(start: usize, end: usize) -> CodeRange {
    CodeRange::new(start, end).unwrap()
}

/// A lesson whose first two layers overlap on lines 3-5.
///
/// Layers: 0 `First` [1,5], 1 `Second` [3,8], 2 `No code` (no range),
/// 3 `Tail` [10,10]. Ten lines of code; line 9 is covered by nothing.
pub fn overlapping_lesson() -> Lesson {
    let code: String = (1..=10).map(|n| format!("line {n}\n")).collect();
    Lesson::new("overlap", "Overlap")
        .with_layer(Layer::new("First", LayerKind::Conv).with_code_range(range(1, 5)))
        .with_layer(Layer::new("Second", LayerKind::Conv).with_code_range(range(3, 8)))
        .with_layer(Layer::new("No code", LayerKind::Op))
        .with_layer(Layer::new("Tail", LayerKind::Data).with_code_range(range(10, 10)))
        .with_code(code)
}

/// A small second lesson with a residual connection.
pub fn residual_lesson() -> Lesson {
    Lesson::new("residual", "Residual")
        .with_layer(
            Layer::new("Input", LayerKind::Data)
                .with_residual(ResidualRole::Start)
                .with_code_range(range(1, 1)),
        )
        .with_layer(
            Layer::new("Body", LayerKind::Block)
                .with_residual(ResidualRole::Pass)
                .with_code_range(range(2, 3)),
        )
        .with_layer(
            Layer::new("Add", LayerKind::Op)
                .with_residual(ResidualRole::End)
                .with_code_range(range(4, 4)),
        )
        .with_code("x = input\ny = body(x)\ny = relu(y)\nreturn x + y\n")
}

/// Catalog of [`overlapping_lesson`] and [`residual_lesson`].
pub fn test_catalog() -> LessonCatalog {
    LessonCatalog::from_lessons(vec![overlapping_lesson(), residual_lesson()]).unwrap()
}

/// Index of a layer by name in a built-in lesson.
pub fn builtin_layer_index(catalog: &LessonCatalog, lesson: &str, layer: &str) -> usize {
    catalog
        .get(lesson)
        .unwrap()
        .layers
        .iter()
        .position(|l| l.name == layer)
        .unwrap_or_else(|| panic!("layer '{layer}' not found in '{lesson}'"))
}
