//! `locate` command: run a selection against a lesson and print the result.
//!
//! `--line N` answers "which layer implements this line?" and `--layer I`
//! answers "which lines implement this layer?".

use crate::cli::common::{find_lesson, load_catalog, print_json, CliError, CliResult};
use crate::models::CodeRange;
use crate::selection::SelectionController;
use clap::{ArgGroup, Args};
use serde::Serialize;

/// Find the layer for a code line, or the code lines for a layer
#[derive(Debug, Clone, Args)]
#[command(group(ArgGroup::new("target").required(true).args(["line", "layer"])))]
pub struct LocateArgs {
    /// Lesson id (see `lessons`)
    #[arg(value_name = "ID")]
    pub lesson: String,

    /// 1-based code line to look up
    #[arg(long, value_name = "N")]
    pub line: Option<usize>,

    /// 0-based layer index to highlight
    #[arg(long, value_name = "I")]
    pub layer: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response describing the resulting selection
#[derive(Debug, Serialize)]
struct LocateResponse {
    lesson: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    layer_index: Option<usize>,
    layer_name: Option<String>,
    code_range: Option<CodeRange>,
}

impl LocateArgs {
    /// Execute the locate command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog()?;
        let lesson = find_lesson(&catalog, &self.lesson)?;
        let layer_count = lesson.layers.len();

        let mut controller = SelectionController::with_lesson(catalog.clone(), &self.lesson);
        match (self.line, self.layer) {
            (Some(line), _) => {
                controller.select_line(line);
            }
            (None, Some(index)) => {
                if index >= layer_count {
                    return Err(CliError::validation(format!(
                        "Layer index {index} is out of range; '{}' has {layer_count} layers (0-{})",
                        self.lesson,
                        layer_count.saturating_sub(1)
                    )));
                }
                controller.select_layer(index);
            }
            (None, None) => {
                return Err(CliError::validation("Either --line or --layer is required"));
            }
        }

        let selection = controller.selection();
        let layer_name = controller.active_lesson().and_then(|lesson| {
            selection
                .highlighted_layer()
                .and_then(|index| lesson.layers.get(index))
                .map(|layer| layer.name.clone())
        });

        let response = LocateResponse {
            lesson: self.lesson.clone(),
            line: self.line,
            layer_index: selection.highlighted_layer(),
            layer_name,
            code_range: selection.highlighted_range(),
        };

        if self.json {
            return print_json(&response);
        }

        match (&response.layer_name, response.layer_index) {
            (Some(name), Some(index)) => {
                let range = response
                    .code_range
                    .map_or_else(|| "no code".to_string(), |range| range.to_string());
                println!("Layer {index}: {name} ({range})");
            }
            _ => {
                if let Some(line) = self.line {
                    println!("Line {line} is not part of any layer");
                }
            }
        }

        Ok(())
    }
}
