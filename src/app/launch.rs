//! Interactive session startup: command-line overrides and the TUI run.

use anyhow::{Context, Result};

use crate::catalog::LessonCatalog;
use crate::config::{Config, ThemeMode};
use crate::{logging, tui};

/// Command-line overrides for an interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Lesson to open instead of `ui.default_lesson`
    pub lesson: Option<String>,
    /// Disable mouse capture regardless of config
    pub no_mouse: bool,
    /// Theme to use instead of `ui.theme_mode`
    pub theme: Option<ThemeMode>,
    /// Log at debug level
    pub verbose: bool,
}

/// Applies command-line overrides on top of the loaded configuration.
///
/// An explicit `--lesson` must name a real lesson; only the configured
/// default is allowed to fall back silently.
pub fn apply_overrides(
    mut config: Config,
    options: &LaunchOptions,
    catalog: &LessonCatalog,
) -> Result<Config> {
    if let Some(lesson) = &options.lesson {
        if catalog.get(lesson).is_none() {
            anyhow::bail!(
                "Unknown lesson '{}'. Available: {}",
                lesson,
                catalog.ids().join(", ")
            );
        }
        config.ui.default_lesson.clone_from(lesson);
    }
    if options.no_mouse {
        config.ui.mouse = false;
    }
    if let Some(theme) = options.theme {
        config.ui.theme_mode = theme;
    }
    Ok(config)
}

/// Loads the lessons and runs the TUI until the user quits
pub fn launch_tui(config: Config, options: &LaunchOptions) -> Result<()> {
    let log_path = config.log_file_path()?;
    logging::init_file(&config, options.verbose, &log_path)?;

    let catalog = LessonCatalog::builtin()?;
    let config = apply_overrides(config, options, &catalog)?;
    tracing::info!(
        lessons = catalog.len(),
        lesson = %config.ui.default_lesson,
        mouse = config.ui.mouse,
        "Starting TUI"
    );

    let theme = tui::Theme::from_mode(config.ui.theme_mode);
    let mouse = config.ui.mouse;
    let mut app_state = tui::AppState::new(catalog, config, theme);

    // Initialize TUI
    let mut terminal = tui::setup_terminal(mouse)?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal before reporting any loop error
    tui::restore_terminal(terminal)?;

    result.context("TUI event loop failed")?;
    tracing::info!("Session ended");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config_values() {
        let catalog = LessonCatalog::builtin().unwrap();
        let options = LaunchOptions {
            lesson: Some("srcnn".to_string()),
            no_mouse: true,
            theme: Some(ThemeMode::Light),
            verbose: false,
        };

        let config = apply_overrides(Config::new(), &options, &catalog).unwrap();
        assert_eq!(config.ui.default_lesson, "srcnn");
        assert!(!config.ui.mouse);
        assert_eq!(config.ui.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let catalog = LessonCatalog::builtin().unwrap();
        let config = apply_overrides(Config::new(), &LaunchOptions::default(), &catalog).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_unknown_lesson_override_is_rejected() {
        let catalog = LessonCatalog::builtin().unwrap();
        let options = LaunchOptions {
            lesson: Some("esrgan".to_string()),
            ..LaunchOptions::default()
        };
        let err = apply_overrides(Config::new(), &options, &catalog).unwrap_err();
        assert!(err.to_string().contains("Unknown lesson 'esrgan'"));
    }
}
