//! Help overlay listing every keyboard shortcut.
//!
//! The key column is generated from [`ShortcutRegistry`], so the overlay
//! always matches the active bindings.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::screen::centered_rect;
use super::Theme;
use crate::branding::APP_DISPLAY_NAME;
use crate::shortcuts::{Action, ShortcutRegistry, HELP_CONTEXT, MAIN_CONTEXT};

const KEY_COLUMN: usize = 18;

const SECTIONS: [(&str, &[Action]); 4] = [
    (
        "LESSONS",
        &[
            Action::PreviousLesson,
            Action::NextLesson,
            Action::JumpToLesson(0),
        ],
    ),
    (
        "NAVIGATION",
        &[
            Action::ToggleFocus,
            Action::NavigateUp,
            Action::NavigateDown,
            Action::JumpToFirst,
            Action::JumpToLast,
        ],
    ),
    ("HIGHLIGHT", &[Action::Activate, Action::ClearHighlight]),
    ("GENERAL", &[Action::ToggleHelp, Action::Quit]),
];

const MOUSE_LINES: [(&str, &str); 4] = [
    ("Click tab", "Open lesson"),
    ("Click block", "Highlight the layer and its code"),
    ("Click code line", "Highlight the first layer covering it"),
    ("Wheel", "Scroll the panel under the pointer"),
];

const TIPS: [&str; 3] = [
    "Ranges may overlap; a code line belongs to the first layer that covers it.",
    "Clicking a line no layer covers clears the highlight.",
    "Mouse capture can be turned off with --no-mouse or `config set --mouse false`.",
];

/// One rendered row of help content.
#[derive(Debug, Clone, PartialEq, Eq)]
enum HelpRow {
    Heading(String),
    Entry(String, String),
    Text(String),
    Blank,
}

/// State for the help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlayState {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    rows: Vec<HelpRow>,
    closed: bool,
}

impl HelpOverlayState {
    /// Creates the overlay from the registered shortcuts.
    #[must_use]
    pub fn new(registry: &ShortcutRegistry) -> Self {
        Self {
            scroll_offset: 0,
            rows: Self::build_rows(registry),
            closed: false,
        }
    }

    fn build_rows(registry: &ShortcutRegistry) -> Vec<HelpRow> {
        let listing = registry.listing(MAIN_CONTEXT);
        let mut rows = Vec::new();

        for (title, actions) in SECTIONS {
            rows.push(HelpRow::Heading(title.to_string()));
            for action in actions {
                if let Some((keys, _)) = listing.iter().find(|(_, listed)| listed == action) {
                    let description = match action {
                        Action::JumpToLesson(_) => "Open lesson by position".to_string(),
                        other => other.description(),
                    };
                    rows.push(HelpRow::Entry(keys.clone(), description));
                }
            }
            rows.push(HelpRow::Blank);
        }

        rows.push(HelpRow::Heading("MOUSE".to_string()));
        for (keys, description) in MOUSE_LINES {
            rows.push(HelpRow::Entry(keys.to_string(), description.to_string()));
        }
        rows.push(HelpRow::Blank);

        rows.push(HelpRow::Heading("TIPS".to_string()));
        for tip in TIPS {
            rows.push(HelpRow::Text(format!("• {tip}")));
        }
        rows
    }

    /// Total number of content lines.
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.rows.len()
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines() {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to the top.
    pub const fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll to the bottom.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.total_lines().saturating_sub(1);
    }

    fn content(&self, theme: &Theme) -> Vec<Line<'static>> {
        self.rows
            .iter()
            .map(|row| match row {
                HelpRow::Heading(title) => Line::from(Span::styled(
                    format!("═══ {title} ═══"),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )),
                HelpRow::Entry(keys, description) => Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{keys:<KEY_COLUMN$}"),
                        Style::default().fg(theme.primary),
                    ),
                    Span::styled(description.clone(), Style::default().fg(theme.text)),
                ]),
                HelpRow::Text(text) => Line::from(Span::styled(
                    format!("  {text}"),
                    Style::default().fg(theme.text_secondary),
                )),
                HelpRow::Blank => Line::from(""),
            })
            .collect()
    }
}

impl Component for HelpOverlayState {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        let registry = ShortcutRegistry::new();
        match registry.lookup(HELP_CONTEXT, key)? {
            Action::ScrollUp => self.scroll_up(),
            Action::ScrollDown => self.scroll_down(),
            Action::JumpToFirst => self.scroll_to_top(),
            Action::JumpToLast => self.scroll_to_bottom(),
            Action::ToggleHelp => {
                self.closed = true;
                return Some(ComponentEvent::Closed);
            }
            Action::Quit => return Some(ComponentEvent::QuitRequested),
            _ => {}
        }
        None
    }

    /// Render the help overlay as a centered modal.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let modal_area = centered_rect(70, 80, area);
        f.render_widget(Clear, modal_area);

        // Content area and scrollbar
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content_area = chunks[0];
        let scrollbar_area = chunks[1];

        let visible_height = content_area.height.saturating_sub(2) as usize;
        let paragraph = Paragraph::new(self.content(theme))
            .block(
                Block::default()
                    .title(format!(" {APP_DISPLAY_NAME} - Help "))
                    .title_alignment(Alignment::Center)
                    .title_bottom(
                        Line::from(" ?/Esc close · ↑↓ scroll ")
                            .style(Style::default().fg(theme.text_muted))
                            .centered(),
                    )
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .style(Style::default().fg(theme.text).bg(theme.background))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));

        f.render_widget(paragraph, content_area);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(theme.primary));

        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines().saturating_sub(visible_height))
                .position(self.scroll_offset);

        f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_rows_come_from_registry() {
        let help = HelpOverlayState::new(&ShortcutRegistry::new());
        assert!(help
            .rows
            .contains(&HelpRow::Entry("Tab/Shift+Tab".to_string(), Action::ToggleFocus.description())));
        assert!(help
            .rows
            .iter()
            .any(|row| matches!(row, HelpRow::Entry(keys, _) if keys == "1-9")));
    }

    #[test]
    fn test_scrolling_is_bounded() {
        let mut help = HelpOverlayState::new(&ShortcutRegistry::new());
        help.scroll_up();
        assert_eq!(help.scroll_offset, 0);

        help.handle_input(key(KeyCode::End));
        assert_eq!(help.scroll_offset, help.total_lines() - 1);
        help.handle_input(key(KeyCode::Down));
        assert_eq!(help.scroll_offset, help.total_lines() - 1);

        help.handle_input(key(KeyCode::Char('g')));
        assert_eq!(help.scroll_offset, help.total_lines() - 1);
        help.handle_input(key(KeyCode::Home));
        assert_eq!(help.scroll_offset, 0);
    }

    #[test]
    fn test_escape_closes() {
        let mut help = HelpOverlayState::new(&ShortcutRegistry::new());
        assert!(!help.should_close());
        assert_eq!(
            help.handle_input(key(KeyCode::Esc)),
            Some(ComponentEvent::Closed)
        );
        assert!(help.should_close());
    }

    #[test]
    fn test_ctrl_c_requests_quit() {
        let mut help = HelpOverlayState::new(&ShortcutRegistry::new());
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            help.handle_input(event),
            Some(ComponentEvent::QuitRequested)
        );
    }
}
