//! Mouse input: clicks on tabs, diagram blocks and code lines, and wheel
//! scrolling.
//!
//! Hit-testing runs against the layout of the last drawn frame
//! (`AppState::viewport`).

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::{code_view, diagram, lesson_tabs, screen, AppState, Focus};

/// Lines scrolled per wheel notch in the code panel
const CODE_WHEEL_STEP: isize = 3;

/// Handle a mouse event. Never requests quit.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) -> Result<bool> {
    // The help overlay covers the panels
    if state.help.is_some() {
        return Ok(false);
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(state, mouse.column, mouse.row),
        MouseEventKind::ScrollUp => handle_wheel(state, mouse.column, mouse.row, -1),
        MouseEventKind::ScrollDown => handle_wheel(state, mouse.column, mouse.row, 1),
        _ => {}
    }
    Ok(false)
}

fn handle_click(state: &mut AppState, x: u16, y: u16) {
    let layout = state.layout();

    if let Some(index) = lesson_tabs::tab_at(layout.header_inner(), state.controller.catalog(), x, y)
    {
        state.clear_status();
        state.select_lesson_at(index);
        return;
    }

    let Some((layer_hit, line_count)) = state.active_lesson().map(|lesson| {
        (
            diagram::layer_at(lesson, layout.diagram_inner(), state.diagram_scroll, x, y),
            lesson.line_count(),
        )
    }) else {
        return;
    };

    if let Some(index) = layer_hit {
        state.clear_status();
        state.focus = Focus::Diagram;
        state.select_layer(index);
        return;
    }

    if let Some(line) = code_view::line_at(layout.code_inner(), state.code_scroll, line_count, x, y)
    {
        state.clear_status();
        state.focus = Focus::Code;
        state.select_line(line);
    }
}

fn handle_wheel(state: &mut AppState, x: u16, y: u16, direction: isize) {
    let layout = state.layout();
    if screen::contains(layout.diagram, x, y) {
        state.scroll_diagram(direction);
    } else if screen::contains(layout.code, x, y) {
        state.scroll_code(direction * CODE_WHEEL_STEP);
    }
}
