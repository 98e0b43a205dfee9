//! Configuration management CLI commands.

use crate::cli::common::{find_lesson, load_catalog, print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the configuration file path
    Path,
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Lesson opened on startup
    #[arg(long, value_name = "ID")]
    lesson: Option<String>,

    /// Capture mouse clicks in the TUI (true or false)
    #[arg(long, value_name = "BOOL")]
    mouse: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: String,
    ui: UiOutput,
    logging: LoggingOutput,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    default_lesson: String,
    mouse: bool,
    show_help_on_startup: bool,
}

#[derive(Serialize, Debug)]
struct LoggingOutput {
    level: String,
    file: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let output = ConfigOutput::from_config(&config)?;

        if self.json {
            print_json(&output)
        } else {
            output_human_readable(&output);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.theme.is_none() && self.lesson.is_none() && self.mouse.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --theme, --lesson, or --mouse",
            ));
        }

        // Load current configuration
        let mut config = Config::load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable configuration: {e:#}");
            Config::default()
        });

        if let Some(theme_str) = &self.theme {
            config.ui.theme_mode = ThemeMode::parse(theme_str).ok_or_else(|| {
                CliError::validation("Invalid theme mode. Must be 'auto', 'light', or 'dark'")
            })?;
        }

        if let Some(lesson) = &self.lesson {
            let catalog = load_catalog()?;
            find_lesson(&catalog, lesson)?;
            config.ui.default_lesson.clone_from(lesson);
        }

        if let Some(mouse) = self.mouse {
            config.ui.mouse = mouse;
        }

        // Save configuration
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;
        tracing::info!("Configuration saved");

        println!("Configuration updated successfully.");

        Ok(())
    }
}

impl ConfigOutput {
    fn from_config(config: &Config) -> CliResult<Self> {
        let path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
        let log_file = config
            .log_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve log path: {e}")))?;

        Ok(Self {
            path: path.to_string_lossy().to_string(),
            ui: UiOutput {
                theme: config.ui.theme_mode.as_str().to_string(),
                default_lesson: config.ui.default_lesson.clone(),
                mouse: config.ui.mouse,
                show_help_on_startup: config.ui.show_help_on_startup,
            },
            logging: LoggingOutput {
                level: config.logging.level.clone(),
                file: log_file.to_string_lossy().to_string(),
            },
        })
    }
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    println!("Super-Res Lab Configuration");
    println!("===========================");
    println!();
    println!("File: {}", output.path);
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", output.ui.theme);
    println!("  Default Lesson: {}", output.ui.default_lesson);
    println!("  Mouse: {}", output.ui.mouse);
    println!("  Help On Startup: {}", output.ui.show_help_on_startup);
    println!();

    println!("Logging:");
    println!("  Level: {}", output.logging.level);
    println!("  File: {}", output.logging.file);
    println!();
}
