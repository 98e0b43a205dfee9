//! Component trait pattern for TUI components.
//!
//! Overlays implement [`Component`] so they can consume keys on their own
//! and report back to `AppState` through a small event enum.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A component that can be rendered and handle input.
///
/// Components are self-contained UI elements that manage their own state,
/// handle keyboard input, and can emit events to communicate with the parent.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to the parent.
    /// Returns `None` if input was handled internally without needing parent action.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);

    /// Check if component should close.
    ///
    /// Default implementation returns `false`.
    fn should_close(&self) -> bool {
        false
    }
}

/// Events emitted by overlay components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentEvent {
    /// The overlay was dismissed
    Closed,
    /// The user asked to leave the application from inside the overlay
    QuitRequested,
}
