// Highlight action handlers

use crate::tui::{AppState, Focus};
use anyhow::Result;

/// Handle activate action
///
/// In the code panel this selects the cursor line. In the diagram it
/// highlights the first layer when nothing is highlighted yet.
pub fn handle_activate(state: &mut AppState) -> Result<bool> {
    match state.focus {
        Focus::Code => {
            let line = state.code_cursor;
            if line == 0 {
                return Ok(false);
            }
            state.select_line(line);
            if state.controller.selection().is_clear() {
                state.set_status(format!("Line {line} is not part of any layer"));
            }
        }
        Focus::Diagram => {
            if state.controller.selection().highlighted_layer().is_none() {
                state.select_layer(0);
            }
        }
    }
    Ok(false)
}

/// Handle clear highlight action
pub fn handle_clear_highlight(state: &mut AppState) -> Result<bool> {
    state.clear_highlight();
    Ok(false)
}
