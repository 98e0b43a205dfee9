//! `show` command: print one lesson with its layers and code ranges.

use crate::cli::common::{find_lesson, load_catalog, print_json, CliResult};
use crate::models::{Layer, Lesson};
use clap::Args;
use serde::Serialize;

/// Show a lesson's details
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Lesson id (see `lessons`)
    #[arg(value_name = "ID")]
    pub lesson: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Also print the numbered code listing
    #[arg(long)]
    pub code: bool,
}

/// JSON response for a lesson
#[derive(Debug, Serialize)]
struct ShowResponse<'a> {
    #[serde(flatten)]
    lesson: &'a Lesson,
    line_count: usize,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog()?;
        let lesson = find_lesson(&catalog, &self.lesson)?;

        if self.json {
            return print_json(&ShowResponse {
                lesson,
                line_count: lesson.line_count(),
            });
        }

        println!("{} ({})", lesson.title, lesson.id);
        if !lesson.subtitle.is_empty() {
            println!("{}", lesson.subtitle);
        }
        println!();
        if !lesson.description.is_empty() {
            println!("{}", lesson.description);
            println!();
        }
        for point in &lesson.key_points {
            println!("  • {point}");
        }
        if !lesson.key_points.is_empty() {
            println!();
        }

        println!("Layers:");
        for (index, layer) in lesson.layers.iter().enumerate() {
            println!("  {}", format_layer(index, layer));
        }

        if self.code {
            println!();
            println!("{}:", lesson.code_file);
            let width = lesson.line_count().to_string().len();
            for (index, line) in lesson.code_lines().iter().enumerate() {
                println!("  {:>width$} │ {}", index + 1, line);
            }
        }

        Ok(())
    }
}

/// One layer row, e.g. `1. [CONV] Conv1 (Feature Extraction)  L7-11  kernel 9x9 · 64 filters`
fn format_layer(index: usize, layer: &Layer) -> String {
    let range = layer
        .code_range
        .map_or_else(|| "-".to_string(), |range| range.to_string());
    let mut row = format!(
        "{index}. [{}] {}  {range}",
        layer.kind.tag(),
        layer.name
    );
    let details = layer.details();
    if !details.is_empty() {
        row.push_str("  ");
        row.push_str(&details);
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CodeRange, LayerKind};

    #[test]
    fn test_format_layer() {
        let layer = Layer::new("Conv1", LayerKind::Conv)
            .with_kernel("9x9")
            .with_filters(64)
            .with_code_range(CodeRange::new(7, 11).unwrap());
        assert_eq!(
            format_layer(1, &layer),
            "1. [CONV] Conv1  L7-11  kernel 9x9 · 64 filters"
        );
        assert_eq!(
            format_layer(0, &Layer::new("Input", LayerKind::Data)),
            "0. [DATA] Input  -"
        );
    }
}
