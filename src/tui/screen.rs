//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! Both sides call [`ScreenLayout::compute`] on the same terminal area, so a
//! click always lands on what was drawn there.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Rows of the header panel (title border + tab row + border).
pub const HEADER_HEIGHT: u16 = 3;
/// Rows of the intro panel.
pub const INTRO_HEIGHT: u16 = 7;
/// Rows of the insight panel under the diagram.
pub const INSIGHT_HEIGHT: u16 = 8;
/// Rows of the status bar.
pub const STATUS_HEIGHT: u16 = 4;

/// Panel rectangles for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// App title and lesson tabs
    pub header: Rect,
    /// Lesson title, description and key points
    pub intro: Rect,
    /// Layer diagram
    pub diagram: Rect,
    /// Lesson insight and highlighted layer details
    pub insight: Rect,
    /// Code listing
    pub code: Rect,
    /// Status and key hints
    pub status: Rect,
}

impl ScreenLayout {
    /// Splits the terminal area into panels.
    #[must_use]
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(INTRO_HEIGHT),
                Constraint::Min(8),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[2]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(INSIGHT_HEIGHT)])
            .split(columns[0]);

        Self {
            header: rows[0],
            intro: rows[1],
            diagram: left[0],
            insight: left[1],
            code: columns[1],
            status: rows[3],
        }
    }

    /// Area inside the header border, where the tabs are drawn.
    #[must_use]
    pub fn header_inner(&self) -> Rect {
        inner(self.header)
    }

    /// Area inside the diagram border.
    #[must_use]
    pub fn diagram_inner(&self) -> Rect {
        inner(self.diagram)
    }

    /// Area inside the code border.
    #[must_use]
    pub fn code_inner(&self) -> Rect {
        inner(self.code)
    }
}

/// Area inside a one-cell border.
#[must_use]
pub fn inner(rect: Rect) -> Rect {
    rect.inner(Margin::new(1, 1))
}

/// Checks whether a terminal cell lies inside `rect`.
#[must_use]
pub const fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && y >= rect.y
        && (x as u32) < rect.x as u32 + rect.width as u32
        && (y as u32) < rect.y as u32 + rect.height as u32
}

/// Returns a scroll offset that keeps `target` within `visible` rows.
///
/// The offset only moves when the target would otherwise be off screen.
#[must_use]
pub const fn ensure_visible(scroll: usize, target: usize, visible: usize) -> usize {
    if visible == 0 {
        return target;
    }
    if target < scroll {
        target
    } else if target >= scroll + visible {
        target + 1 - visible
    } else {
        scroll
    }
}

/// Helper to create a centered rectangle.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
