//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_wrap)]
// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod code_view;
pub mod component;
pub mod diagram;
pub mod handlers;
pub mod help_overlay;
pub mod lesson_tabs;
pub mod screen;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::catalog::{LessonCatalog, DEFAULT_LESSON_ID};
use crate::config::Config;
use crate::models::Lesson;
use crate::selection::SelectionController;
use crate::shortcuts::ShortcutRegistry;

// Re-export TUI components
pub use component::{Component, ComponentEvent};
pub use help_overlay::HelpOverlayState;
pub use screen::ScreenLayout;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Panel that receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Up/Down move between layers
    #[default]
    Diagram,
    /// Up/Down move the code cursor
    Code,
}

impl Focus {
    /// The other panel.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Diagram => Self::Code,
            Self::Code => Self::Diagram,
        }
    }
}

/// Application state.
pub struct AppState {
    /// Lesson catalog and cross-highlight state
    pub controller: SelectionController,
    /// Loaded configuration (after command-line overrides)
    pub config: Config,
    /// Active color theme
    pub theme: Theme,
    /// Panel receiving navigation keys
    pub focus: Focus,
    /// Code cursor, a 1-based line (0 when the listing is empty)
    pub code_cursor: usize,
    /// First visible code line, 0-based
    pub code_scroll: usize,
    /// First visible diagram block
    pub diagram_scroll: usize,
    /// Terminal area of the last drawn frame, used for mouse hit-testing
    pub viewport: Rect,
    /// Help overlay, when open
    pub help: Option<HelpOverlayState>,
    /// One-shot message shown in the status bar
    pub status_message: String,
    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the application state, opening the configured lesson.
    #[must_use]
    pub fn new(catalog: LessonCatalog, config: Config, theme: Theme) -> Self {
        let lesson_id = resolve_startup_lesson(&catalog, &config.ui.default_lesson);
        let controller = SelectionController::with_lesson(catalog, &lesson_id);
        let help = config
            .ui
            .show_help_on_startup
            .then(|| HelpOverlayState::new(&ShortcutRegistry::new()));

        let mut state = Self {
            controller,
            config,
            theme,
            focus: Focus::default(),
            code_cursor: 0,
            code_scroll: 0,
            diagram_scroll: 0,
            viewport: Rect::default(),
            help,
            status_message: String::new(),
            should_quit: false,
        };
        state.reset_views();
        state
    }

    /// The active lesson, if any.
    #[must_use]
    pub fn active_lesson(&self) -> Option<&Lesson> {
        self.controller.active_lesson()
    }

    /// Number of code lines in the active lesson.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.active_lesson().map_or(0, Lesson::line_count)
    }

    /// Panel geometry of the last drawn frame.
    #[must_use]
    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::compute(self.viewport)
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message.clear();
    }

    /// Opens the help overlay.
    pub fn open_help(&mut self) {
        self.help = Some(HelpOverlayState::new(&ShortcutRegistry::new()));
    }

    /// Closes the help overlay.
    pub fn close_help(&mut self) {
        self.help = None;
    }

    /// Switches lesson; cursor and scroll positions start over.
    pub fn select_lesson(&mut self, lesson_id: &str) -> bool {
        let changed = self.controller.select_lesson(lesson_id);
        if changed {
            self.reset_views();
        }
        changed
    }

    /// Switches to the lesson at a tab position.
    pub fn select_lesson_at(&mut self, index: usize) -> bool {
        let Some(id) = self
            .controller
            .catalog()
            .get_index(index)
            .map(|lesson| lesson.id.clone())
        else {
            return false;
        };
        self.select_lesson(&id)
    }

    /// Highlights a layer and moves the code cursor to its first line.
    pub fn select_layer(&mut self, index: usize) -> bool {
        let changed = self.controller.select_layer(index);
        if let Some(range) = self.controller.selection().highlighted_range() {
            self.code_cursor = range.start().min(self.line_count());
        }
        self.sync_scroll();
        changed
    }

    /// Moves the code cursor to `line` and highlights the layer covering it.
    pub fn select_line(&mut self, line: usize) -> bool {
        self.code_cursor = line;
        let changed = self.controller.select_line(line);
        self.sync_scroll();
        changed
    }

    /// Moves the code cursor without changing the highlight.
    pub fn move_cursor(&mut self, line: usize) {
        let count = self.line_count();
        if count == 0 {
            return;
        }
        self.code_cursor = line.clamp(1, count);
        if !self.viewport.is_empty() {
            let visible = code_view::visible_lines(self.layout().code_inner()).max(1);
            self.code_scroll =
                screen::ensure_visible(self.code_scroll, self.code_cursor - 1, visible);
        }
    }

    /// Clears the highlight by re-selecting the active lesson.
    pub fn clear_highlight(&mut self) -> bool {
        let Some(id) = self.controller.selection().lesson_id().map(str::to_owned) else {
            return false;
        };
        self.controller.select_lesson(&id)
    }

    /// Scrolls the diagram by `delta` blocks.
    pub fn scroll_diagram(&mut self, delta: isize) {
        let inner = self.layout().diagram_inner();
        let max = self
            .active_lesson()
            .map_or(0, |lesson| diagram::max_scroll(lesson, inner));
        self.diagram_scroll = self.diagram_scroll.saturating_add_signed(delta).min(max);
    }

    /// Scrolls the code listing by `delta` lines.
    pub fn scroll_code(&mut self, delta: isize) {
        let inner = self.layout().code_inner();
        let max = code_view::max_scroll(self.line_count(), inner);
        self.code_scroll = self.code_scroll.saturating_add_signed(delta).min(max);
    }

    /// Limits both scroll offsets to what the current viewport can show.
    ///
    /// Rendering and hit-testing then agree on the first visible block and
    /// line after a resize.
    pub fn clamp_scroll(&mut self) {
        let layout = self.layout();
        let diagram_max = self
            .active_lesson()
            .map_or(0, |lesson| diagram::max_scroll(lesson, layout.diagram_inner()));
        let code_max = code_view::max_scroll(self.line_count(), layout.code_inner());
        self.diagram_scroll = self.diagram_scroll.min(diagram_max);
        self.code_scroll = self.code_scroll.min(code_max);
    }

    /// Keeps the highlighted block and the first highlighted line (or the
    /// cursor) on screen.
    pub fn sync_scroll(&mut self) {
        if self.viewport.is_empty() {
            return;
        }
        let layout = self.layout();

        if let Some(index) = self.controller.selection().highlighted_layer() {
            let visible = diagram::visible_layers(layout.diagram_inner()).max(1);
            self.diagram_scroll = screen::ensure_visible(self.diagram_scroll, index, visible);
        }

        let target = self
            .controller
            .selection()
            .highlighted_range()
            .map_or(self.code_cursor, |range| range.start());
        if target > 0 {
            let visible = code_view::visible_lines(layout.code_inner()).max(1);
            self.code_scroll = screen::ensure_visible(self.code_scroll, target - 1, visible);
        }
    }

    fn reset_views(&mut self) {
        self.code_cursor = usize::from(self.line_count() > 0);
        self.code_scroll = 0;
        self.diagram_scroll = 0;
    }
}

/// Picks the lesson to open at startup.
///
/// An unknown id falls back to the default lesson, then to the first one.
#[must_use]
pub fn resolve_startup_lesson(catalog: &LessonCatalog, requested: &str) -> String {
    if catalog.get(requested).is_some() {
        return requested.to_string();
    }
    let fallback = if catalog.get(DEFAULT_LESSON_ID).is_some() {
        DEFAULT_LESSON_ID.to_string()
    } else {
        catalog
            .get_index(0)
            .map(|lesson| lesson.id.clone())
            .unwrap_or_default()
    };
    tracing::warn!(
        "Configured lesson '{}' not found, opening '{}'",
        requested,
        fallback
    );
    fallback
}

/// Initialize terminal for TUI
pub fn setup_terminal(mouse: bool) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    if mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal mode
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Draws one frame and records its area for mouse hit-testing.
pub fn draw<B: Backend>(terminal: &mut Terminal<B>, state: &mut AppState) -> Result<()> {
    terminal
        .draw(|f| {
            state.viewport = f.area();
            state.clamp_scroll();
            render(f, state);
        })
        .context("Failed to draw frame")?;
    Ok(())
}

/// Main TUI event loop
pub fn run_tui<B: Backend>(state: &mut AppState, terminal: &mut Terminal<B>) -> Result<()> {
    loop {
        draw(terminal, state)?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Mouse(mouse) if state.config.ui.mouse => {
                    handlers::handle_mouse_event(state, mouse)?;
                }
                // Resize and everything else re-render on the next loop
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Routes a key press to the help overlay or the main screen.
///
/// Returns `true` when the application should quit.
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if let Some(help) = state.help.as_mut() {
        match help.handle_input(key) {
            Some(ComponentEvent::QuitRequested) => {
                state.should_quit = true;
                return Ok(true);
            }
            Some(ComponentEvent::Closed) => state.close_help(),
            None => {}
        }
        return Ok(false);
    }

    state.clear_status();
    handlers::handle_main_input(state, key)
}

/// Renders the whole screen.
pub fn render(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;

    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let layout = ScreenLayout::compute(f.area());
    let selection = state.controller.selection();
    let lesson = state.active_lesson();

    lesson_tabs::render(
        f,
        layout.header,
        state.controller.catalog(),
        selection.lesson_id(),
        theme,
    );
    render_intro(f, layout.intro, lesson, theme);
    diagram::render(
        f,
        layout.diagram,
        lesson,
        selection,
        state.diagram_scroll,
        state.focus == Focus::Diagram,
        theme,
    );
    render_insight(f, layout.insight, state);
    code_view::render(
        f,
        layout.code,
        lesson,
        selection,
        state.code_scroll,
        state.code_cursor,
        state.focus == Focus::Code,
        theme,
    );
    StatusBar::render(f, layout.status, state, theme);

    if let Some(help) = &state.help {
        help.render(f, f.area(), theme);
    }
}

/// Render lesson title, description and key points
fn render_intro(f: &mut Frame, area: Rect, lesson: Option<&Lesson>, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text_muted))
        .style(Style::default().bg(theme.background));

    let Some(lesson) = lesson else {
        let placeholder = Paragraph::new("No lesson selected.")
            .style(Style::default().fg(theme.text_muted))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            lesson.title.clone(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", lesson.subtitle),
            Style::default().fg(theme.text_secondary),
        ),
    ])];
    lines.push(Line::from(Span::styled(
        lesson.description.clone(),
        Style::default().fg(theme.text),
    )));
    for point in &lesson.key_points {
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(theme.accent)),
            Span::styled(point.clone(), Style::default().fg(theme.text_secondary)),
        ]));
    }

    let intro = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(intro, area);
}

/// Render the lesson insight, followed by details of the highlighted layer
fn render_insight(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text_muted))
        .title(" Insight ")
        .style(Style::default().bg(theme.background));

    let Some(lesson) = state.active_lesson() else {
        let placeholder = Paragraph::new("No lesson selected.")
            .style(Style::default().fg(theme.text_muted))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    };

    let mut lines = vec![Line::from(Span::styled(
        lesson
            .insight
            .clone()
            .unwrap_or_else(|| "Select a block to highlight its code.".to_string()),
        Style::default().fg(theme.text_secondary),
    ))];

    let layer = state
        .controller
        .selection()
        .highlighted_layer()
        .and_then(|index| lesson.layers.get(index));
    if let Some(layer) = layer {
        let mut header = vec![
            Span::styled(
                format!("{} ", layer.kind.tag()),
                Style::default().fg(theme.kind_color(layer.kind)),
            ),
            Span::styled(
                layer.name.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(range) = layer.code_range {
            header.push(Span::styled(
                format!("  {range}"),
                Style::default().fg(theme.accent),
            ));
        }
        lines.push(Line::from(header));

        let details: Vec<String> = [
            Some(layer.details()).filter(|details| !details.is_empty()),
            layer.shape.clone(),
            layer.note.clone(),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !details.is_empty() {
            lines.push(Line::from(Span::styled(
                details.join(" · "),
                Style::default().fg(theme.text_secondary),
            )));
        }
    }

    let insight = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(insight, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let mut state = AppState::new(
            LessonCatalog::builtin().unwrap(),
            Config::new(),
            Theme::dark(),
        );
        state.viewport = Rect::new(0, 0, 120, 40);
        state
    }

    #[test]
    fn test_startup_opens_configured_lesson() {
        let mut config = Config::new();
        config.ui.default_lesson = "srcnn".to_string();
        let state = AppState::new(LessonCatalog::builtin().unwrap(), config, Theme::dark());
        assert_eq!(state.controller.selection().lesson_id(), Some("srcnn"));
        assert_eq!(state.code_cursor, 1);
        assert!(state.help.is_none());
    }

    #[test]
    fn test_startup_falls_back_for_unknown_lesson() {
        let catalog = LessonCatalog::builtin().unwrap();
        assert_eq!(resolve_startup_lesson(&catalog, "esrgan"), DEFAULT_LESSON_ID);
        assert_eq!(resolve_startup_lesson(&catalog, "srcnn"), "srcnn");
    }

    #[test]
    fn test_startup_help() {
        let mut config = Config::new();
        config.ui.show_help_on_startup = true;
        let state = AppState::new(LessonCatalog::builtin().unwrap(), config, Theme::dark());
        assert!(state.help.is_some());
    }

    #[test]
    fn test_select_layer_moves_cursor_to_range() {
        let mut state = state();
        assert!(state.select_layer(1));
        let range = state.controller.selection().highlighted_range().unwrap();
        assert_eq!(state.code_cursor, range.start());
    }

    #[test]
    fn test_lesson_switch_resets_views() {
        let mut state = state();
        state.select_line(20);
        state.scroll_code(5);
        assert!(state.select_lesson("srcnn"));
        assert_eq!(state.code_cursor, 1);
        assert_eq!(state.code_scroll, 0);
        assert!(state.controller.selection().is_clear());
    }

    #[test]
    fn test_clear_highlight_keeps_lesson() {
        let mut state = state();
        state.select_layer(0);
        assert!(state.clear_highlight());
        assert!(state.controller.selection().is_clear());
        assert_eq!(state.controller.selection().lesson_id(), Some(DEFAULT_LESSON_ID));
        assert!(!state.clear_highlight());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = state();
        state.scroll_code(-3);
        assert_eq!(state.code_scroll, 0);
        state.scroll_code(1000);
        let max = code_view::max_scroll(state.line_count(), state.layout().code_inner());
        assert_eq!(state.code_scroll, max);
    }

    #[test]
    fn test_focus_toggle() {
        assert_eq!(Focus::Diagram.toggled(), Focus::Code);
        assert_eq!(Focus::Code.toggled(), Focus::Diagram);
    }
}
