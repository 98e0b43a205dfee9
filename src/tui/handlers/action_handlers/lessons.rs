// Lesson tab action handlers

use crate::tui::AppState;
use anyhow::Result;

fn active_position(state: &AppState) -> Option<usize> {
    state
        .controller
        .selection()
        .lesson_id()
        .and_then(|id| state.controller.catalog().position(id))
}

/// Handle previous lesson action (wraps to the last tab)
pub fn handle_previous_lesson(state: &mut AppState) -> Result<bool> {
    let count = state.controller.catalog().len();
    let target = match active_position(state) {
        Some(0) | None => count.saturating_sub(1),
        Some(index) => index - 1,
    };
    state.select_lesson_at(target);
    Ok(false)
}

/// Handle next lesson action (wraps to the first tab)
pub fn handle_next_lesson(state: &mut AppState) -> Result<bool> {
    let count = state.controller.catalog().len();
    let target = match active_position(state) {
        Some(index) if index + 1 < count => index + 1,
        _ => 0,
    };
    state.select_lesson_at(target);
    Ok(false)
}

/// Handle jump to lesson action
pub fn handle_jump_to_lesson(state: &mut AppState, index: usize) -> Result<bool> {
    if !state.select_lesson_at(index) && index >= state.controller.catalog().len() {
        state.set_status(format!("No lesson {}", index + 1));
    }
    Ok(false)
}
