//! Layer diagram: one bordered block per layer, top to bottom.
//!
//! Each block takes three rows and is followed by a one-row arrow, so layer
//! `i` starts at row `(i - scroll) * ROW_STRIDE` of the inner area. Lessons
//! with a skip connection reserve a narrow column on the right for the
//! residual connector.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::screen;
use super::Theme;
use crate::models::{Layer, Lesson, ResidualRole};
use crate::selection::Selection;

/// Rows of a layer block.
pub const BLOCK_HEIGHT: u16 = 3;
/// Rows from one block's top to the next block's top.
pub const ROW_STRIDE: u16 = BLOCK_HEIGHT + 1;
/// Columns reserved for the residual connector.
pub const RESIDUAL_WIDTH: u16 = 3;

const RESIDUAL_LABEL: &str = " ◄ Global Residual ";
const CAPTION: &str = " Click a block to highlight its code ";
const RESIDUAL_CAPTION: &str = " Grey line = global residual · click a block ";

/// Width of the layer blocks inside `inner`.
#[must_use]
pub fn block_width(lesson: &Lesson, inner: Rect) -> u16 {
    if lesson.layers.iter().any(|layer| layer.residual.is_some()) {
        inner.width.saturating_sub(RESIDUAL_WIDTH)
    } else {
        inner.width
    }
}

/// Number of blocks that fit in `inner` without clipping.
#[must_use]
pub const fn visible_layers(inner: Rect) -> usize {
    // n blocks need n * ROW_STRIDE - 1 rows (no arrow after the last one)
    ((inner.height + 1) / ROW_STRIDE) as usize
}

/// Largest useful scroll offset for a lesson.
#[must_use]
pub fn max_scroll(lesson: &Lesson, inner: Rect) -> usize {
    lesson
        .layers
        .len()
        .saturating_sub(visible_layers(inner).max(1))
}

/// Finds the layer block under a terminal cell.
///
/// Arrow rows, the residual column, empty space below the last block and
/// the rows of a block clipped at the bottom are not part of any layer.
#[must_use]
pub fn layer_at(lesson: &Lesson, inner: Rect, scroll: usize, x: u16, y: u16) -> Option<usize> {
    if !screen::contains(inner, x, y) || x >= inner.x + block_width(lesson, inner) {
        return None;
    }
    let row = y - inner.y;
    if row % ROW_STRIDE >= BLOCK_HEIGHT {
        return None;
    }
    // A block that does not fit completely is not drawn
    let slot = (row / ROW_STRIDE) as usize;
    if slot >= visible_layers(inner) {
        return None;
    }
    let index = scroll + slot;
    (index < lesson.layers.len()).then_some(index)
}

/// Renders the diagram panel.
pub fn render(
    f: &mut Frame,
    area: Rect,
    lesson: Option<&Lesson>,
    selection: &Selection,
    scroll: usize,
    focused: bool,
    theme: &Theme,
) {
    let border_color = if focused {
        theme.primary
    } else {
        theme.text_muted
    };
    let mut outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Architecture ")
        .style(Style::default().bg(theme.background));

    let Some(lesson) = lesson else {
        render_placeholder(f, area, outer, theme);
        return;
    };

    let caption = if lesson.layers.iter().any(|layer| layer.residual.is_some()) {
        RESIDUAL_CAPTION
    } else {
        CAPTION
    };
    outer = outer.title_bottom(Line::from(Span::styled(
        caption,
        Style::default().fg(theme.text_muted),
    )));

    if lesson.layers.len() > 1 {
        outer = outer.title(Line::from(format!(" {} layers ", lesson.layers.len())).right_aligned());
    }
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    if lesson.layers.is_empty() {
        let empty = Paragraph::new("This lesson has no diagram.")
            .style(Style::default().fg(theme.text_muted));
        f.render_widget(empty, inner);
        return;
    }

    let scroll = scroll.min(max_scroll(lesson, inner));
    let width = block_width(lesson, inner);
    let bottom = inner.y + inner.height;

    for (index, layer) in lesson.layers.iter().enumerate().skip(scroll) {
        let top = inner.y + ((index - scroll) as u16) * ROW_STRIDE;
        if top + BLOCK_HEIGHT > bottom {
            break;
        }

        let highlighted = selection.highlighted_layer() == Some(index);
        let rect = Rect::new(inner.x, top, width, BLOCK_HEIGHT);
        render_layer(f, rect, layer, highlighted, theme);

        if let Some(role) = layer.residual {
            draw_residual(f, inner, inner.x + width, top, role, theme);
        }

        let arrow_row = top + BLOCK_HEIGHT;
        if index + 1 < lesson.layers.len() && arrow_row < bottom {
            let arrow_x = inner.x + width / 2;
            f.buffer_mut().set_string(
                arrow_x,
                arrow_row,
                "↓",
                Style::default().fg(theme.text_muted),
            );
        }
    }
}

fn render_layer(f: &mut Frame, rect: Rect, layer: &Layer, highlighted: bool, theme: &Theme) {
    let kind_color = theme.kind_color(layer.kind);
    let (border_style, border_type, body_style) = if highlighted {
        (
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            BorderType::Thick,
            Style::default().bg(theme.highlight_bg),
        )
    } else {
        (
            Style::default().fg(kind_color),
            BorderType::Plain,
            Style::default(),
        )
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", layer.kind.tag()),
            Style::default().fg(kind_color).add_modifier(Modifier::BOLD),
        ));
    if let Some(shape) = &layer.shape {
        block = block.title_bottom(Line::from(format!(" {shape} ")).right_aligned());
    }
    if let Some(note) = &layer.note {
        block = block.title_bottom(Line::from(format!(" {note} ")).left_aligned());
    }
    if layer.residual == Some(ResidualRole::End) {
        block = block.title(
            Line::from(Span::styled(
                RESIDUAL_LABEL,
                Style::default().fg(theme.text_muted),
            ))
            .right_aligned(),
        );
    }

    let mut spans = vec![Span::styled(
        layer.name.clone(),
        Style::default()
            .fg(theme.text)
            .add_modifier(Modifier::BOLD),
    )];
    let details = layer.details();
    if !details.is_empty() {
        spans.push(Span::styled(
            format!("  {details}"),
            Style::default().fg(theme.text_secondary),
        ));
    }

    let body = Paragraph::new(Line::from(spans))
        .style(body_style)
        .alignment(Alignment::Left)
        .block(block);
    f.render_widget(body, rect);
}

/// Draws this layer's piece of the skip connector in the reserved column.
///
/// Start branches out of the block's middle row, pass runs the full stride,
/// and end merges back into the block's middle row.
fn draw_residual(f: &mut Frame, inner: Rect, x: u16, top: u16, role: ResidualRole, theme: &Theme) {
    let style = Style::default().fg(theme.text_muted);
    let bottom = inner.y + inner.height;
    let middle = top + 1;
    let line_x = x + 1;
    if line_x >= inner.x + inner.width {
        return;
    }

    let buffer = f.buffer_mut();
    match role {
        ResidualRole::Start => {
            buffer.set_string(x, middle, "─┐", style);
            for row in (middle + 1)..(top + ROW_STRIDE).min(bottom) {
                buffer.set_string(line_x, row, "│", style);
            }
        }
        ResidualRole::Pass => {
            for row in top..(top + ROW_STRIDE).min(bottom) {
                buffer.set_string(line_x, row, "│", style);
            }
        }
        ResidualRole::End => {
            buffer.set_string(line_x, top, "│", style);
            buffer.set_string(x, middle, "◄┘", style);
        }
    }
}

fn render_placeholder(f: &mut Frame, area: Rect, block: Block, theme: &Theme) {
    let placeholder = Paragraph::new("No lesson selected. Pick a tab above.")
        .style(Style::default().fg(theme.text_muted))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(placeholder, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LessonCatalog;

    #[test]
    fn test_visible_layers() {
        assert_eq!(visible_layers(Rect::new(0, 0, 30, 3)), 1);
        assert_eq!(visible_layers(Rect::new(0, 0, 30, 6)), 1);
        assert_eq!(visible_layers(Rect::new(0, 0, 30, 7)), 2);
        assert_eq!(visible_layers(Rect::new(0, 0, 30, 2)), 0);
    }

    #[test]
    fn test_layer_at_skips_arrows_and_residual_column() {
        let catalog = LessonCatalog::builtin().unwrap();
        let lesson = catalog.get("vdsr").unwrap();
        let inner = Rect::new(1, 1, 40, 40);
        let width = block_width(lesson, inner);
        assert_eq!(width, 40 - RESIDUAL_WIDTH);

        assert_eq!(layer_at(lesson, inner, 0, 5, 1), Some(0));
        assert_eq!(layer_at(lesson, inner, 0, 5, 3), Some(0));
        // arrow row
        assert_eq!(layer_at(lesson, inner, 0, 5, 4), None);
        assert_eq!(layer_at(lesson, inner, 0, 5, 5), Some(1));
        // residual column
        assert_eq!(layer_at(lesson, inner, 0, 1 + width, 1), None);
        // scrolled by two layers
        assert_eq!(layer_at(lesson, inner, 2, 5, 1), Some(2));
    }

    #[test]
    fn test_layer_at_below_last_block() {
        let catalog = LessonCatalog::builtin().unwrap();
        let lesson = catalog.get("srcnn").unwrap();
        let inner = Rect::new(0, 0, 30, 60);
        let past_end = lesson.layers.len() as u16 * ROW_STRIDE;
        assert_eq!(layer_at(lesson, inner, 0, 2, past_end), None);
    }

    #[test]
    fn test_layer_at_ignores_clipped_block() {
        let catalog = LessonCatalog::builtin().unwrap();
        let lesson = catalog.get("vdsr").unwrap();
        // Four blocks fit in 18 rows; the fifth would need rows 16-18
        let inner = Rect::new(0, 0, 40, 18);
        assert_eq!(visible_layers(inner), 4);
        assert_eq!(layer_at(lesson, inner, 0, 2, 13), Some(3));
        assert_eq!(layer_at(lesson, inner, 0, 2, 16), None);
        assert_eq!(layer_at(lesson, inner, 0, 2, 17), None);
    }

    #[test]
    fn test_max_scroll() {
        let catalog = LessonCatalog::builtin().unwrap();
        let lesson = catalog.get("vdsr").unwrap();
        // room for two blocks
        let inner = Rect::new(0, 0, 30, 7);
        assert_eq!(max_scroll(lesson, inner), lesson.layers.len() - 2);
        assert_eq!(max_scroll(lesson, Rect::new(0, 0, 30, 200)), 0);
    }
}
