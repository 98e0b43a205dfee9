//! Lesson and layer data structures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive range of 1-based line numbers inside a lesson's code listing.
///
/// # Validation
///
/// - `start` must be at least 1
/// - `start` must not exceed `end`
///
/// Serialized as a two-element array (`[start, end]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[usize; 2]", into = "[usize; 2]")]
pub struct CodeRange {
    start: usize,
    end: usize,
}

impl CodeRange {
    /// Creates a new range covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is 0 or greater than `end`.
    pub fn new(start: usize, end: usize) -> anyhow::Result<Self> {
        if start == 0 {
            anyhow::bail!("Code range lines are 1-based, got start line 0");
        }
        if start > end {
            anyhow::bail!("Code range start {start} is after end {end}");
        }
        Ok(Self { start, end })
    }

    /// First line of the range.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Last line of the range (inclusive).
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Checks whether `line` falls inside the range (both ends inclusive).
    #[must_use]
    pub const fn contains(&self, line: usize) -> bool {
        line >= self.start && line <= self.end
    }
}

impl TryFrom<[usize; 2]> for CodeRange {
    type Error = anyhow::Error;

    fn try_from([start, end]: [usize; 2]) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl From<CodeRange> for [usize; 2] {
    fn from(range: CodeRange) -> Self {
        [range.start, range.end]
    }
}

impl fmt::Display for CodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "L{}", self.start)
        } else {
            write!(f, "L{}-{}", self.start, self.end)
        }
    }
}

/// Category of a diagram node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    /// Input or output tensor
    Data,
    /// Convolution
    Conv,
    /// Activation function
    #[serde(rename = "act", alias = "activation")]
    Activation,
    /// Composite block standing in for several stacked layers
    Block,
    /// Pointwise operation such as a residual add
    Op,
}

impl LayerKind {
    /// Short uppercase tag shown on diagram blocks.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Data => "DATA",
            Self::Conv => "CONV",
            Self::Activation => "ACT",
            Self::Block => "BLOCK",
            Self::Op => "OP",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Role of a layer in a drawn skip connection.
///
/// Purely visual: it tells the diagram where the connector branches out,
/// runs alongside, and merges back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResidualRole {
    /// Connector branches out of this layer
    Start,
    /// Connector runs past this layer
    Pass,
    /// Connector merges into this layer
    End,
}

/// One node of a lesson's block diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    /// Display name (e.g., "Conv1 (Feature Extraction)")
    pub name: String,
    /// Node category, used to pick a rendering style
    pub kind: LayerKind,
    /// Kernel description (e.g., "9x9", "3x3 x 18 layers")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel: Option<String>,
    /// Number of output filters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<u32>,
    /// Output tensor shape (e.g., "(1, 64, H, W)")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    /// Free-text annotation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Skip-connection role for the connector drawing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residual: Option<ResidualRole>,
    /// Lines of the lesson's code that implement this layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_range: Option<CodeRange>,
}

impl Layer {
    /// Creates a layer with only a name and kind set.
    pub fn new(name: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            kernel: None,
            filters: None,
            shape: None,
            note: None,
            residual: None,
            code_range: None,
        }
    }

    /// Sets the code range for this layer.
    #[must_use]
    pub const fn with_code_range(mut self, range: CodeRange) -> Self {
        self.code_range = Some(range);
        self
    }

    /// Sets the kernel description.
    pub fn with_kernel(mut self, kernel: impl Into<String>) -> Self {
        self.kernel = Some(kernel.into());
        self
    }

    /// Sets the filter count.
    #[must_use]
    pub const fn with_filters(mut self, filters: u32) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Sets the output shape.
    pub fn with_shape(mut self, shape: impl Into<String>) -> Self {
        self.shape = Some(shape.into());
        self
    }

    /// Sets the free-text note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Sets the residual role.
    #[must_use]
    pub const fn with_residual(mut self, role: ResidualRole) -> Self {
        self.residual = Some(role);
        self
    }

    /// One-line summary of the optional annotations, e.g. `9x9 · 64 filters`.
    #[must_use]
    pub fn details(&self) -> String {
        let mut parts = Vec::new();
        if let Some(kernel) = &self.kernel {
            parts.push(format!("kernel {kernel}"));
        }
        if let Some(filters) = self.filters {
            parts.push(format!("{filters} filters"));
        }
        parts.join(" · ")
    }
}

fn default_code_file() -> String {
    "model.py".to_string()
}

/// One architecture tutorial: descriptive text, a layer diagram and the
/// code listing the diagram points into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Unique, stable key (e.g., "vdsr")
    pub id: String,
    /// Heading
    pub title: String,
    /// Secondary heading
    #[serde(default)]
    pub subtitle: String,
    /// Introductory paragraph
    #[serde(default)]
    pub description: String,
    /// Short bullet points shown under the description
    #[serde(default)]
    pub key_points: Vec<String>,
    /// Hint explaining what to click and look for in this lesson
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insight: Option<String>,
    /// File name shown above the code listing
    #[serde(default = "default_code_file")]
    pub code_file: String,
    /// Diagram nodes in display order
    #[serde(default)]
    pub layers: Vec<Layer>,
    /// Source listing; line numbers in code ranges index into this
    #[serde(default)]
    pub code: String,
}

impl Lesson {
    /// Creates an empty lesson with the given id and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: String::new(),
            description: String::new(),
            key_points: Vec::new(),
            insight: None,
            code_file: default_code_file(),
            layers: Vec::new(),
            code: String::new(),
        }
    }

    /// Appends a layer.
    #[must_use]
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Sets the code listing.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Lines of the code listing. Line `n` (1-based) is `code_lines()[n - 1]`.
    #[must_use]
    pub fn code_lines(&self) -> Vec<&str> {
        self.code.lines().collect()
    }

    /// Number of lines in the code listing.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.code.lines().count()
    }

    /// Tab label, the id in upper case.
    #[must_use]
    pub fn tab_label(&self) -> String {
        self.id.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_range_rejects_zero_start() {
        assert!(CodeRange::new(0, 3).is_err());
    }

    #[test]
    fn test_code_range_rejects_reversed() {
        assert!(CodeRange::new(5, 4).is_err());
    }

    #[test]
    fn test_code_range_contains_is_inclusive() {
        let range = CodeRange::new(14, 18).unwrap();
        assert!(!range.contains(13));
        assert!(range.contains(14));
        assert!(range.contains(16));
        assert!(range.contains(18));
        assert!(!range.contains(19));
    }

    #[test]
    fn test_code_range_display() {
        assert_eq!(CodeRange::new(29, 29).unwrap().to_string(), "L29");
        assert_eq!(CodeRange::new(7, 11).unwrap().to_string(), "L7-11");
    }

    #[test]
    fn test_code_range_deserializes_from_array() {
        let layer: Layer =
            toml::from_str("name = \"Conv1\"\nkind = \"conv\"\ncode_range = [7, 11]\n").unwrap();
        assert_eq!(layer.code_range, Some(CodeRange::new(7, 11).unwrap()));
    }

    #[test]
    fn test_code_range_deserialize_rejects_reversed() {
        let result: Result<Layer, _> =
            toml::from_str("name = \"Bad\"\nkind = \"op\"\ncode_range = [9, 2]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_layer_kind_accepts_act_and_activation() {
        let act: Layer = toml::from_str("name = \"ReLU\"\nkind = \"act\"\n").unwrap();
        let long: Layer = toml::from_str("name = \"ReLU\"\nkind = \"activation\"\n").unwrap();
        assert_eq!(act.kind, LayerKind::Activation);
        assert_eq!(long.kind, LayerKind::Activation);
    }

    #[test]
    fn test_layer_details() {
        let layer = Layer::new("Conv1", LayerKind::Conv)
            .with_kernel("9x9")
            .with_filters(64);
        assert_eq!(layer.details(), "kernel 9x9 · 64 filters");
        assert_eq!(Layer::new("Input", LayerKind::Data).details(), "");
    }

    #[test]
    fn test_lesson_code_lines_ignore_trailing_newline() {
        let lesson = Lesson::new("demo", "Demo").with_code("a\nb\nc\n");
        assert_eq!(lesson.line_count(), 3);
        assert_eq!(lesson.code_lines()[2], "c");
    }

    #[test]
    fn test_lesson_defaults() {
        let lesson: Lesson = toml::from_str("id = \"x\"\ntitle = \"X\"\n").unwrap();
        assert_eq!(lesson.code_file, "model.py");
        assert!(lesson.layers.is_empty());
        assert_eq!(lesson.tab_label(), "X");
    }
}
