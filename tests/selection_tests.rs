//! Integration tests for diagram/code cross-highlighting.
//!
//! Covers the selection properties over both a hand-built catalog with
//! overlapping ranges and the built-in lessons.

use superres_lab::catalog::LessonCatalog;
use superres_lab::models::CodeRange;
use superres_lab::selection::{find_layer_for_line, Selection, SelectionController};

mod fixtures;
use fixtures::*;

fn range(start: usize, end: usize) -> CodeRange {
    CodeRange::new(start, end).unwrap()
}

// ============================================================================
// select_layer
// ============================================================================

#[test]
fn test_select_layer_sets_that_layers_range_for_every_builtin_layer() {
    let catalog = LessonCatalog::builtin().unwrap();

    for lesson in &catalog {
        for (index, layer) in lesson.layers.iter().enumerate() {
            let selection = Selection::new(&catalog, &lesson.id).select_layer(&catalog, index);
            assert_eq!(
                selection.highlighted_layer(),
                Some(index),
                "{} layer {index}",
                lesson.id
            );
            assert_eq!(
                selection.highlighted_range(),
                layer.code_range,
                "{} layer {}",
                lesson.id,
                layer.name
            );
        }
    }
}

#[test]
fn test_select_layer_without_range_highlights_no_code() {
    let catalog = test_catalog();
    let selection = Selection::new(&catalog, "overlap").select_layer(&catalog, 2);
    assert_eq!(selection.highlighted_layer(), Some(2));
    assert_eq!(selection.highlighted_range(), None);
}

#[test]
fn test_select_layer_out_of_range_is_noop() {
    let catalog = test_catalog();
    let before = Selection::new(&catalog, "overlap").select_layer(&catalog, 1);

    let after = before.select_layer(&catalog, 4);
    assert_eq!(after, before);

    let after = before.select_layer(&catalog, usize::MAX);
    assert_eq!(after, before);

    // Also from a clear state
    let clear = Selection::new(&catalog, "overlap");
    assert_eq!(clear.select_layer(&catalog, 99), clear);
}

#[test]
fn test_srcnn_conv2_click_uses_its_own_range() {
    let catalog = LessonCatalog::builtin().unwrap();
    let index = builtin_layer_index(&catalog, "srcnn", "Conv2 (Non-linear Mapping)");

    let mut controller = SelectionController::with_lesson(catalog, "srcnn");
    assert!(controller.select_layer(index));

    assert_eq!(controller.selection().highlighted_layer(), Some(index));
    assert_eq!(controller.selection().highlighted_range(), Some(range(14, 18)));
}

// ============================================================================
// select_lesson
// ============================================================================

#[test]
fn test_select_lesson_resets_highlight_from_any_state() {
    let catalog = LessonCatalog::builtin().unwrap();

    for from in &catalog {
        for to in &catalog {
            let highlighted = Selection::new(&catalog, &from.id).select_layer(&catalog, 1);
            assert!(!highlighted.is_clear());

            let switched = highlighted.select_lesson(&catalog, &to.id);
            assert_eq!(switched.lesson_id(), Some(to.id.as_str()));
            assert_eq!(switched.highlighted_layer(), None);
            assert_eq!(switched.highlighted_range(), None);
        }
    }
}

#[test]
fn test_select_same_lesson_clears_highlight() {
    let mut controller = SelectionController::with_lesson(test_catalog(), "overlap");
    controller.select_line(7);
    assert!(controller.select_lesson("overlap"));
    assert!(controller.selection().is_clear());
    assert_eq!(controller.selection().lesson_id(), Some("overlap"));
}

#[test]
fn test_select_unknown_lesson_leaves_nothing_active() {
    let mut controller = SelectionController::with_lesson(test_catalog(), "overlap");
    assert!(controller.select_lesson("missing"));
    assert!(controller.active_lesson().is_none());
    assert!(controller.selection().is_clear());

    // Layer and line selection have nothing to act on
    assert!(!controller.select_layer(0));
    assert!(!controller.select_line(1));
}

// ============================================================================
// select_line
// ============================================================================

#[test]
fn test_select_line_unique_cover() {
    let catalog = test_catalog();
    let selection = Selection::new(&catalog, "overlap").select_line(&catalog, 7);
    assert_eq!(selection.highlighted_layer(), Some(1));
    assert_eq!(selection.highlighted_range(), Some(range(3, 8)));

    let selection = Selection::new(&catalog, "overlap").select_line(&catalog, 10);
    assert_eq!(selection.highlighted_layer(), Some(3));
    assert_eq!(selection.highlighted_range(), Some(range(10, 10)));
}

#[test]
fn test_overlapping_ranges_first_layer_wins() {
    let catalog = test_catalog();

    for line in 3..=5 {
        let selection = Selection::new(&catalog, "overlap").select_line(&catalog, line);
        assert_eq!(selection.highlighted_layer(), Some(0), "line {line}");
        assert_eq!(selection.highlighted_range(), Some(range(1, 5)), "line {line}");
    }
}

#[test]
fn test_uncovered_line_clears_highlight() {
    let catalog = test_catalog();
    let highlighted = Selection::new(&catalog, "overlap").select_layer(&catalog, 0);

    for line in [0, 9, 11, 500] {
        let selection = highlighted.select_line(&catalog, line);
        assert_eq!(selection.highlighted_layer(), None, "line {line}");
        assert_eq!(selection.highlighted_range(), None, "line {line}");
        assert_eq!(selection.lesson_id(), Some("overlap"));
    }
}

#[test]
fn test_vdsr_global_residual_add_line() {
    let catalog = LessonCatalog::builtin().unwrap();
    let index = builtin_layer_index(&catalog, "vdsr", "Global Residual Add");

    let mut controller = SelectionController::with_lesson(catalog, "vdsr");
    assert!(controller.select_line(29));

    assert_eq!(controller.selection().highlighted_layer(), Some(index));
    assert_eq!(controller.selection().highlighted_range(), Some(range(29, 29)));
}

#[test]
fn test_round_trip_for_non_overlapping_ranges() {
    let catalog = LessonCatalog::builtin().unwrap();

    for lesson in &catalog {
        for (index, layer) in lesson.layers.iter().enumerate() {
            let Some(own) = layer.code_range else {
                continue;
            };
            let overlaps = lesson.layers.iter().enumerate().any(|(other, l)| {
                other != index
                    && l.code_range
                        .is_some_and(|r| r.start() <= own.end() && own.start() <= r.end())
            });
            if overlaps {
                continue;
            }

            let selected = Selection::new(&catalog, &lesson.id).select_layer(&catalog, index);
            for line in [own.start(), own.end()] {
                let by_line = selected.select_line(&catalog, line);
                assert_eq!(
                    by_line.highlighted_layer(),
                    Some(index),
                    "{} line {line}",
                    lesson.id
                );
                assert_eq!(by_line.highlighted_range(), Some(own));
            }
        }
    }
}

#[test]
fn test_find_layer_matches_select_line() {
    let catalog = LessonCatalog::builtin().unwrap();
    for lesson in &catalog {
        for line in 0..=lesson.line_count() + 1 {
            let expected = find_layer_for_line(lesson, line);
            let selection = Selection::new(&catalog, &lesson.id).select_line(&catalog, line);
            assert_eq!(selection.highlighted_layer(), expected);
        }
    }
}

// ============================================================================
// Controller change reporting
// ============================================================================

#[test]
fn test_controller_reports_only_real_changes() {
    let mut controller = SelectionController::with_lesson(test_catalog(), "residual");

    assert!(controller.select_line(2));
    // Line 3 is in the same range: nothing changes
    assert!(!controller.select_line(3));
    assert!(controller.select_layer(2));
    assert!(!controller.select_layer(2));
    assert!(controller.select_lesson("overlap"));
    assert!(!controller.select_lesson("overlap"));
}
