//! Super-Res Lab - Terminal tutorial for super-resolution networks
//!
//! Without a subcommand this starts the interactive TUI. Subcommands give
//! headless access to the lessons and the diagram/code lookup.

use anyhow::Result;
use clap::{Parser, Subcommand};

use superres_lab::app::{self, LaunchOptions};
use superres_lab::branding::APP_DESCRIPTION;
use superres_lab::cli::{self, CliResult, ExitCode};
use superres_lab::config::{Config, ThemeMode};
use superres_lab::logging;

/// Super-Res Lab - Terminal tutorial for super-resolution networks
#[derive(Parser, Debug)]
#[command(author, version, about = APP_DESCRIPTION, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Lesson to open (see `lessons`)
    #[arg(long, value_name = "ID")]
    lesson: Option<String>,

    /// Do not capture the mouse
    #[arg(long)]
    no_mouse: bool,

    /// Theme (auto, dark, or light)
    #[arg(long, value_name = "MODE", value_parser = parse_theme)]
    theme: Option<ThemeMode>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available lessons
    Lessons(cli::LessonsArgs),
    /// Show a lesson's layers and code ranges
    Show(cli::ShowArgs),
    /// Find the layer for a code line, or the lines for a layer
    Locate(cli::LocateArgs),
    /// Manage configuration
    Config(cli::ConfigArgs),
}

fn parse_theme(value: &str) -> Result<ThemeMode, String> {
    ThemeMode::parse(value).ok_or_else(|| format!("invalid theme '{value}' (auto, dark, light)"))
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are not errors
            let code = if err.use_stderr() {
                ExitCode::ValidationError.code()
            } else {
                ExitCode::Success.code()
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    // A broken config file never blocks startup
    let (config, load_error) = Config::load_or_default();
    if let Some(e) = load_error {
        eprintln!("Warning: {e:#}; using default configuration");
    }

    match cli.command {
        Some(command) => {
            logging::init_stderr(&config, cli.verbose);

            if let Err(err) = run_command(command) {
                eprintln!("Error: {err}");
                std::process::exit(err.exit_code().code());
            }
            Ok(())
        }
        None => {
            let options = LaunchOptions {
                lesson: cli.lesson,
                no_mouse: cli.no_mouse,
                theme: cli.theme,
                verbose: cli.verbose,
            };
            app::launch_tui(config, &options)
        }
    }
}

fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Lessons(args) => args.execute(),
        Command::Show(args) => args.execute(),
        Command::Locate(args) => args.execute(),
        Command::Config(args) => args.execute(),
    }
}
