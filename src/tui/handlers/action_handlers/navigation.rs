// Navigation action handlers

use crate::tui::{AppState, Focus};
use anyhow::Result;

fn layer_count(state: &AppState) -> usize {
    state.active_lesson().map_or(0, |lesson| lesson.layers.len())
}

/// Handle navigate up action
pub fn handle_navigate_up(state: &mut AppState) -> Result<bool> {
    match state.focus {
        Focus::Diagram => {
            let count = layer_count(state);
            if count == 0 {
                return Ok(false);
            }
            let target = match state.controller.selection().highlighted_layer() {
                Some(index) => index.saturating_sub(1),
                None => count - 1,
            };
            state.select_layer(target);
        }
        Focus::Code => state.move_cursor(state.code_cursor.saturating_sub(1)),
    }
    Ok(false)
}

/// Handle navigate down action
pub fn handle_navigate_down(state: &mut AppState) -> Result<bool> {
    match state.focus {
        Focus::Diagram => {
            let count = layer_count(state);
            if count == 0 {
                return Ok(false);
            }
            let target = match state.controller.selection().highlighted_layer() {
                Some(index) => (index + 1).min(count - 1),
                None => 0,
            };
            state.select_layer(target);
        }
        Focus::Code => state.move_cursor(state.code_cursor + 1),
    }
    Ok(false)
}

/// Handle jump to first action
pub fn handle_jump_to_first(state: &mut AppState) -> Result<bool> {
    match state.focus {
        Focus::Diagram => {
            if layer_count(state) > 0 {
                state.select_layer(0);
            }
        }
        Focus::Code => state.move_cursor(1),
    }
    Ok(false)
}

/// Handle jump to last action
pub fn handle_jump_to_last(state: &mut AppState) -> Result<bool> {
    match state.focus {
        Focus::Diagram => {
            let count = layer_count(state);
            if count > 0 {
                state.select_layer(count - 1);
            }
        }
        Focus::Code => state.move_cursor(state.line_count()),
    }
    Ok(false)
}

/// Handle toggle focus action
pub fn handle_toggle_focus(state: &mut AppState) -> Result<bool> {
    state.focus = state.focus.toggled();
    Ok(false)
}
