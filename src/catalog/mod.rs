//! Read-only catalog of the lessons shown by the application.
//!
//! The built-in lessons are embedded in the binary at compile time
//! (`lessons.toml`) and parsed once at startup.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;

use crate::models::Lesson;

/// Embedded lesson content
const LESSONS_TOML: &str = include_str!("lessons.toml");

/// Id of the lesson shown when nothing else is requested.
pub const DEFAULT_LESSON_ID: &str = "vdsr";

/// Root structure of the lesson content file.
#[derive(Debug, Deserialize)]
struct LessonFile {
    lessons: Vec<Lesson>,
}

/// Ordered, immutable collection of lessons.
///
/// Lookup is linear; the catalog holds a handful of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
}

impl LessonCatalog {
    /// Loads the lessons embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(LESSONS_TOML).context("Failed to load embedded lessons.toml")
    }

    /// Parses a lesson content file.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: LessonFile = toml::from_str(content).context("Failed to parse lesson content")?;
        Self::from_lessons(file.lessons)
    }

    /// Builds a catalog from lesson records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, an id is empty, or two lessons
    /// share an id.
    pub fn from_lessons(lessons: Vec<Lesson>) -> Result<Self> {
        if lessons.is_empty() {
            anyhow::bail!("Lesson catalog must contain at least one lesson");
        }

        let mut seen = HashSet::new();
        for lesson in &lessons {
            if lesson.id.trim().is_empty() {
                anyhow::bail!("Lesson '{}' has an empty id", lesson.title);
            }
            if !seen.insert(lesson.id.as_str()) {
                anyhow::bail!("Duplicate lesson id '{}'", lesson.id);
            }

            let line_count = lesson.line_count();
            for layer in &lesson.layers {
                if let Some(range) = layer.code_range {
                    if range.end() > line_count {
                        tracing::warn!(
                            lesson = %lesson.id,
                            layer = %layer.name,
                            "code range {} extends past the last line ({})",
                            range,
                            line_count
                        );
                    }
                }
            }
        }

        Ok(Self { lessons })
    }

    /// Gets a lesson by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id == id)
    }

    /// Position of a lesson in display order.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.lessons.iter().position(|lesson| lesson.id == id)
    }

    /// Gets a lesson by display position.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Lesson> {
        self.lessons.get(index)
    }

    /// Iterates lessons in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Lesson> {
        self.lessons.iter()
    }

    /// All lessons in display order.
    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Lesson ids in display order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.lessons.iter().map(|lesson| lesson.id.as_str()).collect()
    }

    /// Number of lessons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Always false for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

impl<'a> IntoIterator for &'a LessonCatalog {
    type Item = &'a Lesson;
    type IntoIter = std::slice::Iter<'a, Lesson>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
