//! Integration tests for the built-in lesson content.

use superres_lab::catalog::{LessonCatalog, DEFAULT_LESSON_ID};
use superres_lab::models::{LayerKind, ResidualRole};

#[test]
fn test_every_range_lies_within_its_code() {
    let catalog = LessonCatalog::builtin().unwrap();

    for lesson in &catalog {
        let line_count = lesson.line_count();
        assert!(line_count > 0, "{} has no code", lesson.id);

        for layer in &lesson.layers {
            if let Some(range) = layer.code_range {
                assert!(
                    range.end() <= line_count,
                    "{} / {}: {} past line {}",
                    lesson.id,
                    layer.name,
                    range,
                    line_count
                );
            }
        }
    }
}

#[test]
fn test_every_lesson_has_text_and_layers() {
    let catalog = LessonCatalog::builtin().unwrap();

    for lesson in &catalog {
        assert!(!lesson.title.is_empty(), "{}", lesson.id);
        assert!(!lesson.description.is_empty(), "{}", lesson.id);
        assert!(!lesson.key_points.is_empty(), "{}", lesson.id);
        assert!(lesson.insight.is_some(), "{}", lesson.id);
        assert!(!lesson.layers.is_empty(), "{}", lesson.id);
    }
}

#[test]
fn test_residual_connectors_are_well_formed() {
    let catalog = LessonCatalog::builtin().unwrap();

    for lesson in &catalog {
        let roles: Vec<ResidualRole> = lesson
            .layers
            .iter()
            .filter_map(|layer| layer.residual)
            .collect();
        if roles.is_empty() {
            continue;
        }

        assert_eq!(roles.first(), Some(&ResidualRole::Start), "{}", lesson.id);
        assert_eq!(roles.last(), Some(&ResidualRole::End), "{}", lesson.id);
        assert!(
            roles[1..roles.len() - 1]
                .iter()
                .all(|role| *role == ResidualRole::Pass),
            "{}",
            lesson.id
        );
    }
}

#[test]
fn test_residual_lessons() {
    let catalog = LessonCatalog::builtin().unwrap();
    let with_residual: Vec<&str> = catalog
        .iter()
        .filter(|lesson| lesson.layers.iter().any(|layer| layer.residual.is_some()))
        .map(|lesson| lesson.id.as_str())
        .collect();
    assert_eq!(with_residual, vec!["vdsr", "video-vdsr"]);
}

#[test]
fn test_lessons_start_with_data_and_contain_convolutions() {
    let catalog = LessonCatalog::builtin().unwrap();
    for lesson in &catalog {
        assert_eq!(lesson.layers[0].kind, LayerKind::Data, "{}", lesson.id);
        assert!(
            lesson
                .layers
                .iter()
                .any(|layer| matches!(layer.kind, LayerKind::Conv | LayerKind::Block)),
            "{}",
            lesson.id
        );
    }
}

#[test]
fn test_default_lesson_is_vdsr() {
    let catalog = LessonCatalog::builtin().unwrap();
    assert_eq!(DEFAULT_LESSON_ID, "vdsr");
    assert_eq!(catalog.position(DEFAULT_LESSON_ID), Some(1));
}

#[test]
fn test_custom_catalog_from_toml() {
    let content = r#"
[[lessons]]
id = "tiny"
title = "Tiny"
code = """
x = conv(x)
return x
"""

[[lessons.layers]]
name = "Conv"
kind = "conv"
kernel = "3x3"
filters = 8
code_range = [1, 1]

[[lessons.layers]]
name = "Out"
kind = "data"
"#;
    let catalog = LessonCatalog::from_toml(content).unwrap();
    let lesson = catalog.get("tiny").unwrap();
    assert_eq!(lesson.line_count(), 2);
    assert_eq!(lesson.layers.len(), 2);
    assert_eq!(lesson.layers[0].filters, Some(8));
    assert!(lesson.layers[1].code_range.is_none());
}
