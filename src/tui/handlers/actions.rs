//! Action dispatch for the main screen.

use anyhow::Result;

use crate::shortcuts::Action;
use crate::tui::AppState;

use super::action_handlers::{lessons, navigation, selection};

/// Dispatch an action to the appropriate handler.
///
/// Returns `true` when the application should quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        // Navigation
        Action::NavigateUp => navigation::handle_navigate_up(state),
        Action::NavigateDown => navigation::handle_navigate_down(state),
        Action::JumpToFirst => navigation::handle_jump_to_first(state),
        Action::JumpToLast => navigation::handle_jump_to_last(state),
        Action::ToggleFocus => navigation::handle_toggle_focus(state),

        // Lessons
        Action::PreviousLesson => lessons::handle_previous_lesson(state),
        Action::NextLesson => lessons::handle_next_lesson(state),
        Action::JumpToLesson(index) => lessons::handle_jump_to_lesson(state, index),

        // Highlight
        Action::Activate => selection::handle_activate(state),
        Action::ClearHighlight => selection::handle_clear_highlight(state),

        // Help
        Action::ToggleHelp => {
            state.open_help();
            Ok(false)
        }

        Action::Quit => {
            state.should_quit = true;
            Ok(true)
        }

        // Help overlay only
        Action::ScrollUp | Action::ScrollDown => Ok(false),
    }
}
