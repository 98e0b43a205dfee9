//! Status bar widget for the current selection, messages and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Focus, Theme};
use crate::shortcuts::{Action, ShortcutRegistry, MAIN_CONTEXT};

/// Actions advertised in the hints line, in display order.
const HINT_ACTIONS: [Action; 6] = [
    Action::ToggleFocus,
    Action::NavigateUp,
    Action::Activate,
    Action::NextLesson,
    Action::ToggleHelp,
    Action::Quit,
];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let first_line = if state.status_message.is_empty() {
            Self::selection_line(state, theme)
        } else {
            Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.warning),
            ))
        };

        let status = Paragraph::new(vec![first_line, Self::hints_line(theme)])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.text_muted))
                    .title(" Status "),
            );

        f.render_widget(status, area);
    }

    /// Describes the focused panel and the highlighted layer.
    fn selection_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let focus = match state.focus {
            Focus::Diagram => "Diagram".to_string(),
            Focus::Code => format!("Code (line {})", state.code_cursor),
        };
        let mut spans = vec![
            Span::styled("Focus: ", Style::default().fg(theme.primary)),
            Span::styled(focus, Style::default().fg(theme.text)),
            Span::styled("  │  ", Style::default().fg(theme.text_muted)),
        ];

        let selection = state.controller.selection();
        let layer = state.controller.active_lesson().and_then(|lesson| {
            selection
                .highlighted_layer()
                .and_then(|index| lesson.layers.get(index))
        });
        match layer {
            Some(layer) => {
                spans.push(Span::styled("Layer: ", Style::default().fg(theme.primary)));
                spans.push(Span::styled(
                    layer.name.clone(),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ));
                let range = selection
                    .highlighted_range()
                    .map_or_else(|| "no code".to_string(), |range| range.to_string());
                spans.push(Span::styled(
                    format!(" ({range})"),
                    Style::default().fg(theme.text_secondary),
                ));
            }
            None => spans.push(Span::styled(
                "Nothing highlighted",
                Style::default().fg(theme.text_muted),
            )),
        }

        Line::from(spans)
    }

    /// Key hints built from the shortcut registry.
    fn hints_line(theme: &Theme) -> Line<'static> {
        let registry = ShortcutRegistry::new();
        let listing = registry.listing(MAIN_CONTEXT);

        let mut spans: Vec<Span<'static>> = Vec::new();
        for action in HINT_ACTIONS {
            let Some((keys, _)) = listing.iter().find(|(_, listed)| *listed == action) else {
                continue;
            };
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            // Only the first key of each group keeps the line short
            let key = keys.split('/').next().unwrap_or(keys).to_string();
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                action.hint(),
                Style::default().fg(theme.text_muted),
            ));
        }

        Line::from(spans)
    }
}
