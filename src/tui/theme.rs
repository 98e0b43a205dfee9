//! Theme system for consistent UI colors across dark and light modes.
//!
//! Besides the semantic UI colors, the theme assigns a fill color to each
//! diagram layer kind and the colors of the code listing.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::models::LayerKind;

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components with support
/// for both dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Primary UI colors
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Warning state color for hints and cautions
    pub warning: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels and less important content
    pub text_secondary: Color,
    /// Muted text color for help text, connectors, and dim content
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,

    // Code listing
    /// Plain code text
    pub code: Color,
    /// `#` comments
    pub code_comment: Color,
    /// Background of highlighted code lines
    pub code_highlight_bg: Color,

    // Diagram layer kinds
    /// Data (input/output) blocks
    pub kind_data: Color,
    /// Convolution blocks
    pub kind_conv: Color,
    /// Activation blocks
    pub kind_activation: Color,
    /// Composite blocks
    pub kind_block: Color,
    /// Pointwise operation blocks
    pub kind_op: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    ///
    /// This uses the `dark-light` crate to detect whether the OS is in
    /// dark or light mode, and returns the matching theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves a configured theme mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,

            code: Color::Rgb(200, 220, 255),
            code_comment: Color::Green,
            code_highlight_bg: Color::Rgb(90, 70, 0),

            kind_data: Color::Gray,
            kind_conv: Color::LightBlue,
            kind_activation: Color::LightYellow,
            kind_block: Color::LightMagenta,
            kind_op: Color::LightRed,
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),

            code: Color::Rgb(30, 40, 90),
            code_comment: Color::Rgb(0, 120, 0),
            code_highlight_bg: Color::Rgb(255, 240, 180),

            kind_data: Color::Rgb(90, 90, 90),
            kind_conv: Color::Blue,
            kind_activation: Color::Rgb(160, 120, 0),
            kind_block: Color::Magenta,
            kind_op: Color::Red,
        }
    }

    /// Color used for a diagram block of the given kind.
    #[must_use]
    pub const fn kind_color(&self, kind: LayerKind) -> Color {
        match kind {
            LayerKind::Data => self.kind_data,
            LayerKind::Conv => self.kind_conv,
            LayerKind::Activation => self.kind_activation,
            LayerKind::Block => self.kind_block,
            LayerKind::Op => self.kind_op,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
