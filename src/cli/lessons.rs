//! `lessons` command: list the built-in lessons.

use crate::cli::common::{load_catalog, print_json, CliResult};
use crate::catalog::DEFAULT_LESSON_ID;
use clap::Args;
use serde::Serialize;

/// List available lessons
#[derive(Debug, Clone, Args)]
pub struct LessonsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response for the lesson list
#[derive(Debug, Serialize)]
struct LessonsResponse {
    default: &'static str,
    lessons: Vec<LessonSummary>,
}

/// One lesson in the list
#[derive(Debug, Serialize)]
struct LessonSummary {
    id: String,
    title: String,
    subtitle: String,
    layers: usize,
    code_lines: usize,
}

impl LessonsArgs {
    /// Execute the lessons command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog()?;

        let lessons: Vec<LessonSummary> = catalog
            .iter()
            .map(|lesson| LessonSummary {
                id: lesson.id.clone(),
                title: lesson.title.clone(),
                subtitle: lesson.subtitle.clone(),
                layers: lesson.layers.len(),
                code_lines: lesson.line_count(),
            })
            .collect();

        if self.json {
            return print_json(&LessonsResponse {
                default: DEFAULT_LESSON_ID,
                lessons,
            });
        }

        let id_width = lessons
            .iter()
            .map(|lesson| lesson.id.len())
            .max()
            .unwrap_or(2);

        println!("{:<id_width$}  {:>6}  TITLE", "ID", "LAYERS");
        for lesson in &lessons {
            let marker = if lesson.id == DEFAULT_LESSON_ID {
                " (default)"
            } else {
                ""
            };
            println!(
                "{:<id_width$}  {:>6}  {}{}",
                lesson.id, lesson.layers, lesson.title, marker
            );
        }

        Ok(())
    }
}
