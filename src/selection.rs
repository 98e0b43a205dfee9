//! Diagram/code cross-highlighting.
//!
//! [`Selection`] is the triple (active lesson, highlighted layer, highlighted
//! code range). Its three operations are pure transitions returning the next
//! state; [`SelectionController`] owns a catalog and the current state and
//! applies them in place.
//!
//! Invariants kept by every transition:
//! - a highlighted layer index is always valid for the active lesson
//! - when a layer is highlighted, the range is exactly that layer's code
//!   range (or `None` if it has none)
//! - changing lesson clears both the layer and the range

use crate::catalog::{LessonCatalog, DEFAULT_LESSON_ID};
use crate::models::{CodeRange, Lesson};

/// Finds the first layer, in list order, whose code range contains `line`.
///
/// Ranges may overlap; the earliest layer always wins.
#[must_use]
pub fn find_layer_for_line(lesson: &Lesson, line: usize) -> Option<usize> {
    lesson.layers.iter().position(|layer| {
        layer
            .code_range
            .is_some_and(|range| range.contains(line))
    })
}

/// Current selection state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    lesson_id: Option<String>,
    highlighted_layer: Option<usize>,
    highlighted_range: Option<CodeRange>,
}

impl Selection {
    /// Creates a selection with `lesson_id` active and nothing highlighted.
    #[must_use]
    pub fn new(catalog: &LessonCatalog, lesson_id: &str) -> Self {
        Self::default().select_lesson(catalog, lesson_id)
    }

    /// Switches to another lesson and clears any highlight.
    ///
    /// An id the catalog does not know leaves no lesson active.
    #[must_use]
    pub fn select_lesson(&self, catalog: &LessonCatalog, lesson_id: &str) -> Self {
        Self {
            lesson_id: catalog.get(lesson_id).map(|lesson| lesson.id.clone()),
            highlighted_layer: None,
            highlighted_range: None,
        }
    }

    /// Highlights the layer at `index` and its code range.
    ///
    /// An index outside the active lesson's layers, or a call with no active
    /// lesson, returns the state unchanged.
    #[must_use]
    pub fn select_layer(&self, catalog: &LessonCatalog, index: usize) -> Self {
        let Some(layer) = self
            .active_lesson(catalog)
            .and_then(|lesson| lesson.layers.get(index))
        else {
            return self.clone();
        };

        Self {
            lesson_id: self.lesson_id.clone(),
            highlighted_layer: Some(index),
            highlighted_range: layer.code_range,
        }
    }

    /// Highlights the first layer whose code range covers `line` (1-based).
    ///
    /// Clears the highlight when no layer covers the line.
    #[must_use]
    pub fn select_line(&self, catalog: &LessonCatalog, line: usize) -> Self {
        let found = self.active_lesson(catalog).and_then(|lesson| {
            find_layer_for_line(lesson, line).map(|index| (index, lesson.layers[index].code_range))
        });

        match found {
            Some((index, range)) => Self {
                lesson_id: self.lesson_id.clone(),
                highlighted_layer: Some(index),
                highlighted_range: range,
            },
            None => Self {
                lesson_id: self.lesson_id.clone(),
                highlighted_layer: None,
                highlighted_range: None,
            },
        }
    }

    /// Resolves the active lesson against the catalog.
    #[must_use]
    pub fn active_lesson<'c>(&self, catalog: &'c LessonCatalog) -> Option<&'c Lesson> {
        self.lesson_id.as_deref().and_then(|id| catalog.get(id))
    }

    /// Id of the active lesson, if any.
    #[must_use]
    pub fn lesson_id(&self) -> Option<&str> {
        self.lesson_id.as_deref()
    }

    /// Index of the highlighted layer in the active lesson.
    #[must_use]
    pub const fn highlighted_layer(&self) -> Option<usize> {
        self.highlighted_layer
    }

    /// Highlighted code lines.
    #[must_use]
    pub const fn highlighted_range(&self) -> Option<CodeRange> {
        self.highlighted_range
    }

    /// Checks whether a code line is inside the highlighted range.
    #[must_use]
    pub fn is_line_highlighted(&self, line: usize) -> bool {
        self.highlighted_range
            .is_some_and(|range| range.contains(line))
    }

    /// True when neither a layer nor a range is highlighted.
    #[must_use]
    pub const fn is_clear(&self) -> bool {
        self.highlighted_layer.is_none() && self.highlighted_range.is_none()
    }
}

/// Owns the lesson catalog and the current [`Selection`].
///
/// Every operation returns `true` when the selection changed, so the caller
/// knows to refresh its views.
#[derive(Debug, Clone)]
pub struct SelectionController {
    catalog: LessonCatalog,
    selection: Selection,
}

impl SelectionController {
    /// Creates a controller showing the default lesson.
    #[must_use]
    pub fn new(catalog: LessonCatalog) -> Self {
        Self::with_lesson(catalog, DEFAULT_LESSON_ID)
    }

    /// Creates a controller showing `lesson_id`.
    #[must_use]
    pub fn with_lesson(catalog: LessonCatalog, lesson_id: &str) -> Self {
        let selection = Selection::new(&catalog, lesson_id);
        Self { catalog, selection }
    }

    /// The lesson catalog.
    #[must_use]
    pub const fn catalog(&self) -> &LessonCatalog {
        &self.catalog
    }

    /// The current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The active lesson record, if any.
    #[must_use]
    pub fn active_lesson(&self) -> Option<&Lesson> {
        self.selection.active_lesson(&self.catalog)
    }

    /// Switches lesson. See [`Selection::select_lesson`].
    pub fn select_lesson(&mut self, lesson_id: &str) -> bool {
        let next = self.selection.select_lesson(&self.catalog, lesson_id);
        if next.lesson_id.is_none() {
            tracing::warn!("Unknown lesson '{}', no lesson is active", lesson_id);
        }
        self.apply(next, "select_lesson")
    }

    /// Highlights a layer. See [`Selection::select_layer`].
    pub fn select_layer(&mut self, index: usize) -> bool {
        let next = self.selection.select_layer(&self.catalog, index);
        self.apply(next, "select_layer")
    }

    /// Highlights the layer covering a code line. See [`Selection::select_line`].
    pub fn select_line(&mut self, line: usize) -> bool {
        let next = self.selection.select_line(&self.catalog, line);
        self.apply(next, "select_line")
    }

    fn apply(&mut self, next: Selection, operation: &str) -> bool {
        if next == self.selection {
            return false;
        }
        tracing::debug!(
            operation,
            lesson = ?next.lesson_id,
            layer = ?next.highlighted_layer,
            range = ?next.highlighted_range,
            "selection changed"
        );
        self.selection = next;
        true
    }
}
