//! Header panel: application title and one tab per lesson.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::screen;
use super::Theme;
use crate::branding::{self, APP_TAGLINE};
use crate::catalog::LessonCatalog;

const TAB_SEPARATOR: &str = "│";

/// Horizontal extent of each tab, as `(offset, width)` from the tab row start.
///
/// A tab is its label padded by one space on each side; tabs are separated
/// by a single divider column.
#[must_use]
pub fn tab_extents(catalog: &LessonCatalog) -> Vec<(u16, u16)> {
    let mut offset = 0u16;
    catalog
        .iter()
        .map(|lesson| {
            let width = lesson.tab_label().chars().count() as u16 + 2;
            let extent = (offset, width);
            offset = offset.saturating_add(width + 1);
            extent
        })
        .collect()
}

/// Finds the tab under a terminal cell of the header's inner area.
#[must_use]
pub fn tab_at(inner: Rect, catalog: &LessonCatalog, x: u16, y: u16) -> Option<usize> {
    if !screen::contains(inner, x, y) || y != inner.y {
        return None;
    }
    let column = x - inner.x;
    tab_extents(catalog)
        .iter()
        .position(|&(offset, width)| column >= offset && column < offset + width)
}

/// Renders the header with the active tab emphasised.
pub fn render(
    f: &mut Frame,
    area: Rect,
    catalog: &LessonCatalog,
    active: Option<&str>,
    theme: &Theme,
) {
    let mut spans = Vec::new();
    for (index, lesson) in catalog.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(
                TAB_SEPARATOR,
                Style::default().fg(theme.text_muted),
            ));
        }
        let style = if active == Some(lesson.id.as_str()) {
            Style::default()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        spans.push(Span::styled(format!(" {} ", lesson.tab_label()), style));
    }

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", branding::versioned_name()),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {APP_TAGLINE} "),
            Style::default().fg(theme.text_muted),
        ),
    ]);

    let header = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(title),
        );

    f.render_widget(header, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_extents_follow_labels() {
        let catalog = LessonCatalog::builtin().unwrap();
        // " SRCNN " | " VDSR " | " VIDEO-SRCNN " | " VIDEO-VDSR "
        assert_eq!(
            tab_extents(&catalog),
            vec![(0, 7), (8, 6), (15, 13), (29, 12)]
        );
    }

    #[test]
    fn test_tab_at_hits_and_misses() {
        let catalog = LessonCatalog::builtin().unwrap();
        let inner = Rect::new(1, 1, 80, 1);

        assert_eq!(tab_at(inner, &catalog, 1, 1), Some(0));
        assert_eq!(tab_at(inner, &catalog, 7, 1), Some(0));
        // divider column
        assert_eq!(tab_at(inner, &catalog, 8, 1), None);
        assert_eq!(tab_at(inner, &catalog, 9, 1), Some(1));
        assert_eq!(tab_at(inner, &catalog, 30, 1), Some(3));
        assert_eq!(tab_at(inner, &catalog, 60, 1), None);
        assert_eq!(tab_at(inner, &catalog, 3, 0), None);
    }
}
