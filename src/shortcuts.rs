//! Centralized shortcut and action system.
//!
//! This module maps key events to actions per input context and provides the
//! labels shown in the status bar hints and the help overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Input context for the main screen.
pub const MAIN_CONTEXT: &str = "main";
/// Input context while the help overlay is open.
pub const HELP_CONTEXT: &str = "help";

/// All possible actions in the application.
///
/// This enum is the bridge between keyboard shortcuts and application
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    /// Previous layer (diagram) or line (code)
    NavigateUp,
    /// Next layer (diagram) or line (code)
    NavigateDown,
    /// First layer or line
    JumpToFirst,
    /// Last layer or line
    JumpToLast,

    // === LESSONS ===
    /// Previous lesson tab
    PreviousLesson,
    /// Next lesson tab
    NextLesson,
    /// Lesson tab by zero-based position
    JumpToLesson(usize),

    // === SELECTION ===
    /// Switch focus between diagram and code
    ToggleFocus,
    /// Select the code line under the cursor
    Activate,
    /// Clear the highlight
    ClearHighlight,

    // === HELP ===
    /// Open or close the help overlay
    ToggleHelp,
    /// Scroll help up
    ScrollUp,
    /// Scroll help down
    ScrollDown,

    // === GENERAL ===
    /// Leave the application
    Quit,
}

impl Action {
    /// Human-readable description used in the help overlay.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::NavigateUp => "Previous layer / line".to_string(),
            Self::NavigateDown => "Next layer / line".to_string(),
            Self::JumpToFirst => "First layer / line".to_string(),
            Self::JumpToLast => "Last layer / line".to_string(),
            Self::PreviousLesson => "Previous lesson".to_string(),
            Self::NextLesson => "Next lesson".to_string(),
            Self::JumpToLesson(index) => format!("Open lesson {}", index + 1),
            Self::ToggleFocus => "Switch focus between diagram and code".to_string(),
            Self::Activate => "Highlight the layer for the code line under the cursor".to_string(),
            Self::ClearHighlight => "Clear highlight".to_string(),
            Self::ToggleHelp => "Toggle this help".to_string(),
            Self::ScrollUp => "Scroll up".to_string(),
            Self::ScrollDown => "Scroll down".to_string(),
            Self::Quit => "Quit".to_string(),
        }
    }

    /// Short label for status bar hints.
    #[must_use]
    pub const fn hint(&self) -> &'static str {
        match self {
            Self::NavigateUp | Self::NavigateDown => "Move",
            Self::JumpToFirst | Self::JumpToLast => "Jump",
            Self::PreviousLesson | Self::NextLesson | Self::JumpToLesson(_) => "Lesson",
            Self::ToggleFocus => "Focus",
            Self::Activate => "Select line",
            Self::ClearHighlight => "Clear",
            Self::ToggleHelp => "Help",
            Self::ScrollUp | Self::ScrollDown => "Scroll",
            Self::Quit => "Quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier keys
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    ///
    /// Shift is dropped for character keys since the character already
    /// carries the case ('G', '?').
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }

    /// Display label such as "Ctrl+C", "Enter" or "g".
    #[must_use]
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", key.to_uppercase())
        } else {
            key
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
    /// Registration order per context, for help listings
    ordered: Vec<(String, KeyBinding, Action)>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
            ordered: Vec::new(),
        };

        registry.register_main_shortcuts();
        registry.register_help_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = MAIN_CONTEXT;

        // === NAVIGATION ===
        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);
        self.register(ctx, K::Char('g'), M::NONE, Action::JumpToFirst);
        self.register(ctx, K::Char('G'), M::NONE, Action::JumpToLast);

        // === LESSONS ===
        self.register(ctx, K::Left, M::NONE, Action::PreviousLesson);
        self.register(ctx, K::Right, M::NONE, Action::NextLesson);
        self.register(ctx, K::Char('h'), M::NONE, Action::PreviousLesson);
        self.register(ctx, K::Char('l'), M::NONE, Action::NextLesson);
        for (index, digit) in ('1'..='9').enumerate() {
            self.register(ctx, K::Char(digit), M::NONE, Action::JumpToLesson(index));
        }

        // === SELECTION ===
        self.register(ctx, K::Tab, M::NONE, Action::ToggleFocus);
        self.register(ctx, K::BackTab, M::SHIFT, Action::ToggleFocus);
        self.register(ctx, K::Enter, M::NONE, Action::Activate);
        self.register(ctx, K::Char(' '), M::NONE, Action::Activate);
        self.register(ctx, K::Esc, M::NONE, Action::ClearHighlight);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register shortcuts for the help overlay.
    fn register_help_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = HELP_CONTEXT;

        self.register(ctx, K::Up, M::NONE, Action::ScrollUp);
        self.register(ctx, K::Down, M::NONE, Action::ScrollDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::ScrollUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::ScrollDown);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Esc, M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('q'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
        self.ordered.push((context.to_string(), binding, action));
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }

    /// Key labels grouped by action, in registration order.
    ///
    /// Lesson digit bindings are folded into a single "1-9" entry.
    #[must_use]
    pub fn listing(&self, context: &str) -> Vec<(String, Action)> {
        let mut entries: Vec<(Vec<String>, Action)> = Vec::new();
        let mut digits_listed = false;

        for (ctx, binding, action) in &self.ordered {
            if ctx != context {
                continue;
            }
            if let Action::JumpToLesson(_) = action {
                if !digits_listed {
                    entries.push((vec!["1-9".to_string()], Action::JumpToLesson(0)));
                    digits_listed = true;
                }
                continue;
            }
            let label = binding.label();
            match entries.iter_mut().find(|(_, existing)| existing == action) {
                Some((labels, _)) => labels.push(label),
                None => entries.push((vec![label], *action)),
            }
        }

        entries
            .into_iter()
            .map(|(labels, action)| (labels.join("/"), action))
            .collect()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
