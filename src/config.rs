//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::{APP_DATA_DIR, CONFIG_DIR_ENV};
use crate::catalog::DEFAULT_LESSON_ID;

/// Log levels accepted in `[logging] level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Parses a case-insensitive mode name ("auto", "dark", "light").
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Lowercase name used in CLI output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Lesson shown on startup
    #[serde(default = "default_lesson")]
    pub default_lesson: String,
    /// Capture mouse clicks for tabs, diagram blocks and code lines
    #[serde(default = "default_true")]
    pub mouse: bool,
    /// Display help on startup
    #[serde(default)]
    pub show_help_on_startup: bool,
}

fn default_lesson() -> String {
    DEFAULT_LESSON_ID.to_string()
}

const fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            default_lesson: default_lesson(),
            mouse: true,
            show_help_on_startup: false,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file used while the TUI owns the terminal.
    /// Defaults to `superres-lab.log` in the config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/SuperResLab/config.toml`
/// - macOS: `~/Library/Application Support/SuperResLab/config.toml`
/// - Windows: `%APPDATA%\SuperResLab\config.toml`
///
/// The directory can be overridden with the `SUPERRES_LAB_CONFIG_DIR`
/// environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Path of the log file written during TUI sessions.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        match &self.logging.file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("superres-lab.log")),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`; a missing file yields defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))
    }

    /// Loads configuration, falling back to defaults when the file cannot
    /// be read or is invalid.
    ///
    /// The load error is returned next to the defaults so the caller can
    /// report it before logging is set up.
    pub fn load_or_default() -> (Self, Option<anyhow::Error>) {
        match Self::config_file_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => (Self::new(), Some(e)),
        }
    }

    /// [`Config::load_or_default`] for an explicit file.
    pub fn load_from_or_default(config_path: &Path) -> (Self, Option<anyhow::Error>) {
        match Self::load_from(config_path) {
            Ok(config) => (config, None),
            Err(e) => (Self::new(), Some(e)),
        }
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `default_lesson` is not blank
    /// - `logging.level` is one of trace, debug, info, warn, error
    ///
    /// Whether `default_lesson` names a real lesson is checked at startup,
    /// where an unknown id falls back to the built-in default.
    pub fn validate(&self) -> Result<()> {
        if self.ui.default_lesson.trim().is_empty() {
            anyhow::bail!("ui.default_lesson cannot be empty");
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            anyhow::bail!(
                "Invalid logging.level '{}'. Must be one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.ui.default_lesson, DEFAULT_LESSON_ID);
        assert!(config.ui.mouse);
        assert!(!config.ui.show_help_on_startup);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_config_validate() {
        assert!(Config::new().validate().is_ok());
    }

    #[test]
    fn test_config_validate_rejects_blank_lesson() {
        let mut config = Config::new();
        config.ui.default_lesson = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_rejects_bad_level() {
        let mut config = Config::new();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        config.logging.level = "DEBUG".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::from_toml("[ui]\ntheme_mode = \"Light\"\n").unwrap();
        assert_eq!(config.ui.theme_mode, ThemeMode::Light);
        assert_eq!(config.ui.default_lesson, DEFAULT_LESSON_ID);
        assert!(config.ui.mouse);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.ui.default_lesson = "srcnn".to_string();
        config.ui.mouse = false;
        config.logging.file = Some(temp_dir.path().join("lab.log"));

        // Manually save to temp location for testing
        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        let content = fs::read_to_string(&config_file).unwrap();
        let loaded = Config::from_toml(&content).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[ui\ntheme_mode = ").unwrap();

        assert!(Config::load_from(&config_file).is_err());

        let (config, error) = Config::load_from_or_default(&config_file);
        assert_eq!(config, Config::new());
        let error = error.expect("load error is reported");
        assert!(format!("{error:#}").contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[logging]\nlevel = \"loud\"\n").unwrap();

        let (config, error) = Config::load_from_or_default(&config_file);
        assert_eq!(config.logging.level, "info");
        assert!(error.is_some());
    }

    #[test]
    fn test_log_file_path_prefers_configured_file() {
        let mut config = Config::new();
        config.logging.file = Some(PathBuf::from("/tmp/custom.log"));
        assert_eq!(
            config.log_file_path().unwrap(),
            PathBuf::from("/tmp/custom.log")
        );
    }

    #[test]
    fn test_theme_mode_parse() {
        assert_eq!(ThemeMode::parse("auto"), Some(ThemeMode::Auto));
        assert_eq!(ThemeMode::parse("Dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("LIGHT"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("sepia"), None);
        assert_eq!(ThemeMode::Light.as_str(), "light");
    }
}
