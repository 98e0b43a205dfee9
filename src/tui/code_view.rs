//! Code listing with line numbers and the highlighted range.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::screen;
use super::Theme;
use crate::models::Lesson;
use crate::selection::Selection;

const LINE_HINT: &str = " Click a line to highlight its layer ";

/// Number of rows of code visible in `inner`.
#[must_use]
pub const fn visible_lines(inner: Rect) -> usize {
    inner.height as usize
}

/// Largest useful scroll offset for a listing of `line_count` lines.
#[must_use]
pub const fn max_scroll(line_count: usize, inner: Rect) -> usize {
    line_count.saturating_sub(visible_lines(inner))
}

/// Finds the 1-based code line under a terminal cell.
///
/// Rows past the end of the listing are not lines.
#[must_use]
pub fn line_at(inner: Rect, scroll: usize, line_count: usize, x: u16, y: u16) -> Option<usize> {
    if !screen::contains(inner, x, y) {
        return None;
    }
    let line = scroll + (y - inner.y) as usize + 1;
    (line <= line_count).then_some(line)
}

fn gutter_width(line_count: usize) -> usize {
    line_count.max(1).to_string().len()
}

/// Splits a line into code and trailing `#` comment.
fn split_comment(text: &str) -> (&str, &str) {
    if text.trim_start().starts_with('#') {
        return ("", text);
    }
    match text.find(" #") {
        Some(pos) => text.split_at(pos),
        None => (text, ""),
    }
}

/// Renders the code panel.
///
/// `cursor` is the keyboard cursor line, drawn only while the panel has
/// focus.
#[allow(clippy::too_many_arguments)]
pub fn render(
    f: &mut Frame,
    area: Rect,
    lesson: Option<&Lesson>,
    selection: &Selection,
    scroll: usize,
    cursor: usize,
    focused: bool,
    theme: &Theme,
) {
    let border_color = if focused {
        theme.primary
    } else {
        theme.text_muted
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.background));

    let Some(lesson) = lesson else {
        let placeholder = Paragraph::new("No lesson selected.")
            .style(Style::default().fg(theme.text_muted))
            .alignment(Alignment::Center)
            .block(block.title(" Code "));
        f.render_widget(placeholder, area);
        return;
    };

    block = block
        .title(format!(" {} ", lesson.code_file))
        .title_bottom(
            Line::from(Span::styled(
                LINE_HINT,
                Style::default().fg(theme.text_muted),
            ))
            .right_aligned(),
        );
    if let Some(range) = selection.highlighted_range() {
        block = block.title(
            Line::from(Span::styled(
                format!(" {range} "),
                Style::default().fg(theme.accent),
            ))
            .right_aligned(),
        );
    }

    let inner = block.inner(area);
    let code_lines = lesson.code_lines();
    let scroll = scroll.min(max_scroll(code_lines.len(), inner));
    let width = gutter_width(code_lines.len());

    let lines: Vec<Line> = code_lines
        .iter()
        .enumerate()
        .skip(scroll)
        .take(visible_lines(inner))
        .map(|(index, text)| {
            let number = index + 1;
            let highlighted = selection.is_line_highlighted(number);
            let at_cursor = focused && number == cursor;

            let base = if highlighted {
                Style::default().bg(theme.code_highlight_bg)
            } else {
                Style::default()
            };
            let gutter_style = if at_cursor {
                base.fg(theme.accent).add_modifier(Modifier::BOLD)
            } else if highlighted {
                base.fg(theme.accent)
            } else {
                base.fg(theme.text_muted)
            };
            let marker = if at_cursor { "▶" } else { " " };

            let (code, comment) = split_comment(text);
            let mut spans = vec![
                Span::styled(format!("{marker}{number:>width$} "), gutter_style),
                Span::styled(code.to_string(), base.fg(theme.code)),
            ];
            if !comment.is_empty() {
                spans.push(Span::styled(
                    comment.to_string(),
                    base.fg(theme.code_comment).add_modifier(Modifier::ITALIC),
                ));
            }

            let line = Line::from(spans);
            if highlighted {
                line.style(base)
            } else {
                line
            }
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
